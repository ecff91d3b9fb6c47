//! Batch CSV load/store at stage boundaries.
//!
//! Inputs may arrive as UTF-8 or EUC-KR (scraped dumps from Korean portals
//! often carry the legacy encoding); outputs are always UTF-8. A store either
//! produces the complete file or leaves the destination untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::infra::table::Table;

/// Fatal conditions while loading an input table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not valid UTF-8 or EUC-KR", path.display())]
    UnreadableEncoding { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Read a delimited table, trying strict UTF-8 first and then EUC-KR.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
        _ => LoadError::Io { path: path.to_path_buf(), source },
    })?;

    let text = decode(&bytes)
        .ok_or_else(|| LoadError::UnreadableEncoding { path: path.to_path_buf() })?;

    parse_csv(&text).map_err(|source| LoadError::Csv { path: path.to_path_buf(), source })
}

/// Strict UTF-8 (BOM tolerated), then strict EUC-KR. None when both fail.
fn decode(bytes: &[u8]) -> Option<String> {
    let body = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(body) {
        return Some(text.to_string());
    }

    let decoded = encoding_rs::EUC_KR.decode_without_bom_handling_and_without_replacement(body)?;
    debug!("input decoded via EUC-KR fallback");
    Some(decoded.into_owned())
}

fn parse_csv(text: &str) -> Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        // Normalize ragged rows: short rows pad with absent values, long
        // rows drop the overflow
        let mut row: Vec<String> = record.iter().take(width).map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(Table { headers, rows })
}

/// Write a table as UTF-8 CSV. The output lands in a temp file next to the
/// destination and is persisted in one rename, so a failed run never leaves
/// a partial file behind.
pub fn store_table(table: &Table, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;

    let mut writer = csv::Writer::from_writer(tmp.as_file());
    writer
        .write_record(&table.headers)
        .context("failed to write header")?;
    for row in &table.rows {
        writer.write_record(row).context("failed to write row")?;
    }
    writer.flush().context("failed to flush output")?;
    drop(writer);

    tmp.persist(path)
        .with_context(|| format!("failed to persist {}", path.display()))?;

    debug!("stored {} rows at {}", table.rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(bytes: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_utf8_input() {
        let (_dir, path) = write_temp("name,content\n모모카페,커피 맛집\n".as_bytes());

        let table = load_table(&path).unwrap();

        assert_eq!(table.headers, vec!["name", "content"]);
        assert_eq!(table.rows, vec![vec!["모모카페", "커피 맛집"]]);
    }

    #[test]
    fn strips_utf8_bom() {
        let (_dir, path) = write_temp("\u{feff}a,b\n1,2\n".as_bytes());

        let table = load_table(&path).unwrap();

        assert_eq!(table.headers, vec!["a", "b"]);
    }

    #[test]
    fn falls_back_to_euc_kr() {
        // "카페,name\n디저트,모모카페\n" encoded as EUC-KR; not valid UTF-8
        let bytes: &[u8] = &[
            0xc4, 0xab, 0xc6, 0xe4, 0x2c, 0x6e, 0x61, 0x6d, 0x65, 0x0a, 0xb5, 0xf0, 0xc0, 0xfa,
            0xc6, 0xae, 0x2c, 0xb8, 0xf0, 0xb8, 0xf0, 0xc4, 0xab, 0xc6, 0xe4, 0x0a,
        ];
        assert!(std::str::from_utf8(bytes).is_err());

        let (_dir, path) = write_temp(bytes);
        let table = load_table(&path).unwrap();

        assert_eq!(table.headers, vec!["카페", "name"]);
        assert_eq!(table.rows, vec![vec!["디저트", "모모카페"]]);
    }

    #[test]
    fn rejects_bytes_no_encoding_accepts() {
        let (_dir, path) = write_temp(&[0xff, 0xff, 0xff]);

        let err = load_table(&path).unwrap_err();

        assert!(matches!(err, LoadError::UnreadableEncoding { .. }));
        assert!(err.to_string().contains("not valid UTF-8 or EUC-KR"));
    }

    #[test]
    fn missing_file_is_reported_distinctly() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let err = load_table(&path).unwrap_err();

        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn ragged_rows_are_padded_and_truncated() {
        let (_dir, path) = write_temp(b"a,b,c\n1,2\n1,2,3,4\n");

        let table = load_table(&path).unwrap();

        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn store_then_load_preserves_quoted_cells() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        // A token-list cell carries commas and quotes; CSV quoting must keep
        // it intact through a round trip
        let mut table = Table::new(vec!["name".to_string(), "tokens".to_string()]);
        table.rows = vec![vec![
            "모모카페".to_string(),
            r#"["가가","나나"]"#.to_string(),
        ]];

        store_table(&table, &path).unwrap();
        let loaded = load_table(&path).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn store_writes_header_first() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = Table::new(vec!["name".to_string(), "rank".to_string()]);
        table.rows = vec![vec!["모모카페".to_string(), "1".to_string()]];

        store_table(&table, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert!(written.starts_with("name,rank\n"));
    }
}
