//! Issue catalog and run-scoped issue store.
//!
//! Scanners and rule evaluators emit [`dsv_model::NewIssue`] records into an
//! [`IssueStore`]; the store resolves message text and severity against the
//! [`IssueCatalog`] and preserves insertion order for reporting.

mod catalog;
mod store;

pub use catalog::{CatalogEntry, IssueCatalog};
pub use store::{IssueField, IssueFilter, IssueStore};
