//! Shared data model for the dataset-structure validator.
//!
//! Value types only: issue records, severities, dataset summary statistics,
//! and the workspace error type. Collection and rendering behavior live in
//! `dsv-issues` and `dsv-report`.

pub mod error;
pub mod issue;
pub mod summary;

pub use error::{DsvError, Result};
pub use issue::{Issue, NewIssue, Severity};
pub use summary::DatasetSummary;
