// ==========================================
// Divider Calculatie - import layer
// ==========================================
// Responsibility: plain tabular files -> validated domain records
// Invariant: no classification logic; a bad table never reaches the engine
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;

pub use error::{ImportError, ImportResult};
pub use field_mapper::{
    load_divider_definitions, load_part_records, required_part_columns,
};
pub use file_parser::{CsvParser, ParsedTable};
