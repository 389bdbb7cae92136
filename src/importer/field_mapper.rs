// ==========================================
// Divider Calculatie - field mapper
// ==========================================
// Responsibility: column validation + raw row -> domain record mapping
// Invariant: cell values pass through as raw text; numeric
// interpretation belongs to the engine
// ==========================================

use crate::domain::{DividerDefinition, PartRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{CsvParser, ParsedTable};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

// Column names expected in the part table
pub const COL_STUKLIJST: &str = "Stuklijst";
pub const COL_SOORT: &str = "Soort";
pub const COL_OMSCHRIJVING: &str = "Omschrijving";
pub const COL_P: [&str; 5] = ["P1", "P2", "P3", "P4", "P5"];
pub const COL_NETTO_LENGTE: &str = "Netto lengte PL";

// Column names expected in the divider table
pub const DIVIDER_COLUMNS: [&str; 4] = ["name", "L", "B", "H"];

/// All required part-table columns, in sheet order.
pub fn required_part_columns() -> Vec<&'static str> {
    let mut columns = vec![COL_STUKLIJST, COL_SOORT, COL_OMSCHRIJVING];
    columns.extend(COL_P);
    columns.push(COL_NETTO_LENGTE);
    columns
}

/// Load and validate the part table from a CSV file.
///
/// Every required column must be present in the header; any missing column
/// fails the import before a single record is produced.
pub fn load_part_records(path: &Path) -> ImportResult<Vec<PartRecord>> {
    let table = CsvParser::parse(path)?;
    validate_columns(&table, &required_part_columns())?;

    let records: Vec<PartRecord> = table.rows.iter().map(map_part_record).collect();
    info!(path = %path.display(), rows = records.len(), "part table loaded");
    Ok(records)
}

/// Load and validate the divider table from a CSV file.
///
/// Values stay raw text; the catalog builder applies its strict parse.
pub fn load_divider_definitions(path: &Path) -> ImportResult<Vec<DividerDefinition>> {
    let table = CsvParser::parse(path)?;
    validate_columns(&table, &DIVIDER_COLUMNS)?;

    let definitions: Vec<DividerDefinition> =
        table.rows.iter().map(map_divider_definition).collect();
    info!(path = %path.display(), rows = definitions.len(), "divider table loaded");
    Ok(definitions)
}

fn validate_columns(table: &ParsedTable, required: &[&str]) -> ImportResult<()> {
    if table.headers.is_empty() {
        return Err(ImportError::EmptyTable);
    }
    let missing = table.missing_columns(required);
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }
    Ok(())
}

fn map_part_record(row: &HashMap<String, String>) -> PartRecord {
    PartRecord {
        stuklijst_id: cell(row, COL_STUKLIJST),
        soort: cell(row, COL_SOORT),
        omschrijving: cell(row, COL_OMSCHRIJVING),
        p: COL_P.map(|col| cell(row, col)),
        netto_lengte: cell(row, COL_NETTO_LENGTE),
    }
}

fn map_divider_definition(row: &HashMap<String, String>) -> DividerDefinition {
    DividerDefinition {
        name: cell(row, "name"),
        l: cell(row, "L"),
        b: cell(row, "B"),
        h: cell(row, "H"),
    }
}

fn cell(row: &HashMap<String, String>, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}
