//! Filepath: src/infra/table.rs
//! Tabular snapshot passed between pipeline stages, plus the codec for the
//! list-valued token column. A missing value is the empty string, so rows
//! stay rectangular and absence never needs an Option.

use thiserror::Error;

/// In-memory CSV snapshot: one header row plus data rows of equal width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Overwrite a column's values, or append it as the last column.
    /// `values` must hold one entry per row, in row order.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }
}

/// Raised when a stored token-list cell cannot be parsed back into stems.
#[derive(Debug, Error)]
#[error("malformed token list {snippet:?}: {source}")]
pub struct MalformedTokenList {
    /// Leading fragment of the offending cell.
    pub snippet: String,

    #[source]
    pub source: serde_json::Error,
}

/// Serialize a stem list into its column representation.
///
/// The format is a JSON array of strings, decided once here and validated by
/// [`decode_tokens`]; nothing else ever reads or writes the token column.
pub fn encode_tokens(stems: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(stems)
}

/// Parse a stored token-list cell back into stems.
///
/// An absent value (empty cell) is an empty list; anything else must be a
/// JSON array of strings.
pub fn decode_tokens(cell: &str) -> Result<Vec<String>, MalformedTokenList> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(trimmed)
        .map_err(|source| MalformedTokenList { snippet: snippet_of(trimmed), source })
}

const SNIPPET_CHARS: usize = 40;

fn snippet_of(value: &str) -> String {
    if value.chars().count() <= SNIPPET_CHARS {
        return value.to_string();
    }

    let cut: String = value.chars().take(SNIPPET_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn stems(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn column_index_finds_named_columns() {
        let table = Table::new(stems(&["name", "content", "link"]));

        assert_eq!(table.column_index("content"), Some(1));
        assert_eq!(table.column_index("review_id"), None);
    }

    #[test]
    fn set_column_appends_when_absent() {
        let mut table = Table::new(stems(&["name"]));
        table.rows = vec![stems(&["모모카페"]), stems(&["소소상점"])];

        table.set_column("tokens", stems(&["[]", "[\"스콘\"]"]));

        assert_eq!(table.headers, stems(&["name", "tokens"]));
        assert_eq!(table.rows[1], stems(&["소소상점", "[\"스콘\"]"]));
    }

    #[test]
    fn set_column_overwrites_when_present() {
        let mut table = Table::new(stems(&["name", "tokens"]));
        table.rows = vec![stems(&["모모카페", "old"])];

        table.set_column("tokens", stems(&["new"]));

        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.rows[0], stems(&["모모카페", "new"]));
    }

    #[test]
    fn encode_produces_json_array_of_strings() {
        let cell = encode_tokens(&stems(&["가가", "나나"])).unwrap();

        assert_eq!(cell, r#"["가가","나나"]"#);
    }

    #[test]
    fn decode_treats_empty_cell_as_empty_list() {
        assert_eq!(decode_tokens("").unwrap(), Vec::<String>::new());
        assert_eq!(decode_tokens("   ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn decode_rejects_non_json_values() {
        let err = decode_tokens("not-a-list").unwrap_err();

        assert_eq!(err.snippet, "not-a-list");
        assert!(err.to_string().contains("malformed token list"));
    }

    #[test]
    fn decode_rejects_python_style_literals() {
        // The old single-quoted literal format is not valid here
        assert!(decode_tokens("['가가', '나나']").is_err());
    }

    #[test]
    fn snippet_is_truncated_for_long_values() {
        let long = "x".repeat(200);
        let err = decode_tokens(&long).unwrap_err();

        assert!(err.snippet.chars().count() < 50);
        assert!(err.snippet.ends_with("..."));
    }

    proptest! {
        #[test]
        fn token_codec_round_trips(input in proptest::collection::vec(any::<String>(), 0..8)) {
            let cell = encode_tokens(&input).unwrap();
            let decoded = decode_tokens(&cell).unwrap();

            prop_assert_eq!(decoded, input);
        }
    }
}
