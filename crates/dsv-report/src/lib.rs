//! Report formatting for the dataset-structure validator.
//!
//! Two independent outputs from the same issue store plus dataset summary:
//!
//! - **Structured result**: errors/warnings partition as stable JSON
//! - **Console report**: grouped, truncated, colorized text for terminals

mod bytes;
mod console;
mod structured;

pub use bytes::format_bytes;
pub use console::{ConsoleOptions, console_format};
pub use structured::{
    IssueEntry, ValidationPayload, ValidationResult, build_payload, build_result,
};
