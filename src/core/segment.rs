//! Splits a flat scrape table into numbered reviews at boundary rows.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::infra::table::Table;

/// Column appended to the output carrying the 1-based review number.
pub const REVIEW_ID_COLUMN: &str = "review_id";

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("boundary column {0:?} not present in input header")]
    MissingBoundaryColumn(String),

    #[error("no review boundary found: no value in column {column:?} contains {marker:?}")]
    NoBoundaryFound { column: String, marker: String },
}

/// A segmented table plus the number of reviews it was split into.
#[derive(Debug)]
pub struct Segmented {
    pub table: Table,
    pub review_count: u64,
}

/// Walk the rows in order, starting a new review at every row whose boundary
/// column contains the marker. Rows before the first boundary are leading
/// noise from the scraper and are dropped. Every kept row gets the current
/// review id appended as a trailing column.
#[instrument(skip(input))]
pub fn segment_reviews(input: &Table, column: &str, marker: &str) -> Result<Segmented, SegmentError> {
    let idx = input
        .column_index(column)
        .ok_or_else(|| SegmentError::MissingBoundaryColumn(column.to_string()))?;

    let mut headers = input.headers.clone();
    headers.push(REVIEW_ID_COLUMN.to_string());

    let mut out = Table::new(headers);
    let mut current_id: u64 = 0;

    for row in &input.rows {
        if row[idx].contains(marker) {
            current_id += 1;
        }
        if current_id == 0 {
            continue;
        }
        let mut kept = row.clone();
        kept.push(current_id.to_string());
        out.rows.push(kept);
    }

    if current_id == 0 {
        return Err(SegmentError::NoBoundaryFound {
            column: column.to_string(),
            marker: marker.to_string(),
        });
    }

    debug!("segmented {} rows into {} reviews", out.rows.len(), current_id);

    Ok(Segmented {
        table: out,
        review_count: current_id,
    })
}
