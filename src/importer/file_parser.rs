// ==========================================
// Divider Calculatie - tabular file parser
// ==========================================
// Supports: CSV (.csv)
// Output: header list + one string map per non-blank row
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// A parsed tabular file: trimmed headers plus raw cell maps.
#[derive(Debug)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl ParsedTable {
    /// Headers that are required but absent from this table.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|col| !self.headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect()
    }
}

// ==========================================
// CSV parser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(file_path: &Path) -> ImportResult<ParsedTable> {
        // file must exist
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        // extension check
        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged row lengths
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(ParsedTable { headers, rows })
    }
}
