//! The `clean` stage: sanitize text columns, then segment rows into reviews.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use rayon::prelude::*;

use crate::cli::{AppContext, CleanArgs};
use crate::core::sanitize::Sanitizer;
use crate::core::segment::segment_reviews;
use crate::infra::config::load_config;
use crate::infra::io::{load_table, store_table};

pub fn run(args: CleanArgs, ctx: &AppContext) -> Result<()> {
    // Load configuration with graceful fallback
    let config = load_config().unwrap_or_default();
    let ccfg = config.clean;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ccfg.output_file));

    let mut table = load_table(&args.input)?;

    // Configured text columns absent from this scrape are skipped
    let text_columns: Vec<usize> = ccfg
        .text_columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    if !ctx.quiet {
        println!("Cleaning {} rows...", table.rows.len());
    }

    // Clean in parallel with order preserved in collect
    let sanitizer = Sanitizer::new();
    let rows = std::mem::take(&mut table.rows);
    table.rows = rows
        .into_par_iter()
        .map(|mut row| {
            for &idx in &text_columns {
                let cleaned = sanitizer.clean(&row[idx]);
                row[idx] = cleaned;
            }
            row
        })
        .collect();

    let segmented = segment_reviews(&table, &ccfg.boundary_column, &ccfg.boundary_marker)?;

    if ctx.dry_run {
        if !ctx.quiet {
            let warn = if ctx.no_color { Style::new() } else { Style::new().yellow() };
            println!(
                "{}",
                format!(
                    "DRY RUN: Would write {} rows ({} reviews) to {}",
                    segmented.table.rows.len(),
                    segmented.review_count,
                    output.display()
                )
                .style(warn)
            );
        }
        return Ok(());
    }

    store_table(&segmented.table, &output)?;

    if !ctx.quiet {
        let check = if ctx.no_color { Style::new() } else { Style::new().green() };
        println!(
            "{} Segmented {} rows into {} reviews at {}",
            "✓".style(check),
            segmented.table.rows.len(),
            segmented.review_count,
            output.display()
        );
    }

    Ok(())
}
