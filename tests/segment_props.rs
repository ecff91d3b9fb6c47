// Property checks for review segmentation over arbitrary boundary layouts.
use proptest::prelude::*;

use reviewmill::core::segment::{REVIEW_ID_COLUMN, SegmentError, segment_reviews};
use reviewmill::infra::table::Table;

const MARKER: &str = "https://blog.naver.com";

fn table_from_flags(flags: &[bool]) -> Table {
    let mut table = Table::new(vec!["content".to_string(), "link".to_string()]);
    for (i, &boundary) in flags.iter().enumerate() {
        let link = if boundary {
            format!("{MARKER}/post/{i}")
        } else {
            String::new()
        };
        table.rows.push(vec![format!("row {i}"), link]);
    }
    table
}

proptest! {
    #[test]
    fn review_ids_partition_rows_in_order(flags in proptest::collection::vec(any::<bool>(), 0..64)) {
        let table = table_from_flags(&flags);
        let boundaries = flags.iter().filter(|&&b| b).count() as u64;

        match segment_reviews(&table, "link", MARKER) {
            Ok(segmented) => {
                prop_assert!(boundaries > 0);
                prop_assert_eq!(segmented.review_count, boundaries);
                prop_assert_eq!(
                    segmented.table.headers.last().map(|h| h.as_str()),
                    Some(REVIEW_ID_COLUMN)
                );

                // Everything from the first boundary onwards survives
                let first = flags.iter().position(|&b| b).unwrap();
                prop_assert_eq!(segmented.table.rows.len(), flags.len() - first);

                // Ids start at 1, never decrease, grow by at most 1 per row,
                // and finish at the boundary count
                let ids: Vec<u64> = segmented
                    .table
                    .rows
                    .iter()
                    .map(|row| row.last().unwrap().parse().unwrap())
                    .collect();
                prop_assert_eq!(ids[0], 1);
                for pair in ids.windows(2) {
                    prop_assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
                }
                prop_assert_eq!(*ids.last().unwrap(), boundaries);
            }
            Err(err) => {
                prop_assert_eq!(boundaries, 0);
                prop_assert!(
                    matches!(err, SegmentError::NoBoundaryFound { .. }),
                    "unexpected error: {err}"
                );
            }
        }
    }
}
