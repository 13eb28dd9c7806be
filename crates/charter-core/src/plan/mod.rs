//! Plan handling: document types, parsing, genericity detection,
//! enhancement, completion, fallback synthesis.

pub mod complete;
pub mod document;
pub mod enhance;
pub mod fallback;
pub mod genericity;
pub mod parser;

pub use complete::complete;
pub use document::{
    CoderSection, DesignSystem, DesignerSection, Page, PlanDocument, PlannerSection, Requirements,
};
pub use enhance::enhance;
pub use fallback::fallback_plan;
pub use genericity::is_generic;
pub use parser::{MalformedPlanError, parse_plan};
