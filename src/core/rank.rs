//! The `rank` stage: per-subject keyword counting, ranking, truncation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Style};
use tracing::debug;

use crate::cli::{AppContext, RankArgs};
use crate::core::aggregate::{RankPolicy, rank_keywords};
use crate::infra::config::load_config;
use crate::infra::io::{load_table, store_table};
use crate::infra::table::{Table, decode_tokens};

pub fn run(args: RankArgs, ctx: &AppContext) -> Result<()> {
    // Load configuration with graceful fallback
    let config = load_config().unwrap_or_default();
    let rcfg = config.rank;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&rcfg.output_file));

    let table = load_table(&args.input)?;

    let subject = table.column_index(&rcfg.subject_column).ok_or_else(|| {
        anyhow::anyhow!(
            "subject column {:?} not present in {}",
            rcfg.subject_column,
            args.input.display()
        )
    })?;
    let tokens = table.column_index(&rcfg.token_column).ok_or_else(|| {
        anyhow::anyhow!(
            "token column {:?} not present in {}",
            rcfg.token_column,
            args.input.display()
        )
    })?;

    if !ctx.quiet {
        println!("Ranking keywords from {} rows...", table.rows.len());
    }

    let mut rows = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let stems = decode_tokens(&row[tokens])
            // +2: header line plus 1-based numbering
            .with_context(|| format!("line {} of {}", i + 2, args.input.display()))?;
        rows.push((row[subject].clone(), stems));
    }

    let policy = RankPolicy::from_config(&rcfg);
    let ranks = rank_keywords(rows, &policy);

    let subjects = ranks.iter().filter(|r| r.rank == 1).count();
    debug!("ranked {} keywords across {} subjects", ranks.len(), subjects);

    let mut out = Table::new(vec![
        rcfg.subject_column.clone(),
        "rank".to_string(),
        "keyword".to_string(),
        "frequency".to_string(),
    ]);
    for rank in &ranks {
        out.rows.push(vec![
            rank.name.clone(),
            rank.rank.to_string(),
            rank.keyword.clone(),
            rank.frequency.to_string(),
        ]);
    }

    if ctx.dry_run {
        if !ctx.quiet {
            let warn = if ctx.no_color { Style::new() } else { Style::new().yellow() };
            println!(
                "{}",
                format!(
                    "DRY RUN: Would write {} keyword rows to {}",
                    out.rows.len(),
                    output.display()
                )
                .style(warn)
            );
        }
        return Ok(());
    }

    store_table(&out, &output)?;

    if !ctx.quiet {
        let check = if ctx.no_color { Style::new() } else { Style::new().green() };
        println!(
            "{} Ranked {} keywords across {} subjects at {}",
            "✓".style(check),
            ranks.len(),
            subjects,
            output.display()
        );
    }

    Ok(())
}
