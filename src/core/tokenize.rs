//! The `tokenize` stage: morphological analysis plus POS and length filtering.

use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use rayon::prelude::*;

use crate::cli::{AppContext, TokenizeArgs};
use crate::core::filter::{FilterPolicy, filter_stems};
use crate::infra::config::load_config;
use crate::infra::io::{load_table, store_table};
use crate::infra::table::encode_tokens;
use crate::morph::analyzer::get_analyzer;

pub fn run(args: TokenizeArgs, ctx: &AppContext) -> Result<()> {
    // Load configuration with graceful fallback
    let config = load_config().unwrap_or_default();
    let tcfg = config.tokenize;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&tcfg.output_file));

    let mut table = load_table(&args.input)?;

    let source = table.column_index(&tcfg.source_column).ok_or_else(|| {
        anyhow::anyhow!(
            "source column {:?} not present in {}",
            tcfg.source_column,
            args.input.display()
        )
    })?;

    // One analyzer instance for the whole run; construction can be expensive
    let analyzer = get_analyzer(&tcfg.analyzer, &tcfg.word_tag)?;
    let policy = FilterPolicy::from_config(&tcfg);

    if !ctx.quiet {
        println!(
            "Analyzing {} rows with the {} analyzer...",
            table.rows.len(),
            analyzer.name()
        );
    }

    // Set up progress bar (unless quiet mode)
    let progress = if ctx.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(table.rows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    // Analyze in parallel with order preserved in collect
    let cells: Vec<Result<String>> = table
        .rows
        .par_iter()
        .map(|row| {
            let morphemes = analyzer.analyze(&row[source]);
            let stems = filter_stems(&morphemes, &policy);
            let cell = encode_tokens(&stems).context("failed to serialize token list")?;

            progress.inc(1);
            Ok(cell)
        })
        .collect();

    progress.finish_with_message("Analysis complete");

    // Surface the first failure in original row order
    let mut values = Vec::with_capacity(cells.len());
    for cell in cells {
        values.push(cell?);
    }

    table.set_column(&tcfg.token_column, values);

    if ctx.dry_run {
        if !ctx.quiet {
            let warn = if ctx.no_color { Style::new() } else { Style::new().yellow() };
            println!(
                "{}",
                format!(
                    "DRY RUN: Would write {} tokenized rows to {}",
                    table.rows.len(),
                    output.display()
                )
                .style(warn)
            );
        }
        return Ok(());
    }

    store_table(&table, &output)?;

    if !ctx.quiet {
        let check = if ctx.no_color { Style::new() } else { Style::new().green() };
        println!(
            "{} Tokenized {} rows at {}",
            "✓".style(check),
            table.rows.len(),
            output.display()
        );
    }

    Ok(())
}
