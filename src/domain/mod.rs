// ==========================================
// Divider Calculatie - domain model layer
// ==========================================
// Responsibility: input/output entities and closed vocabularies
// Invariant: no parsing or classification logic lives here
// ==========================================

pub mod classification;
pub mod divider;
pub mod part;
pub mod types;

// Re-export core types
pub use classification::{ClassificationRow, NO_MATCH};
pub use divider::{default_divider_definitions, Divider, DividerDefinition};
pub use part::{PartRecord, PARAM_COUNT};
pub use types::{RejectReason, ShapeCategory};
