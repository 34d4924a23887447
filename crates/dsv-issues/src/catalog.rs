//! Static lookup from issue code to canonical message and default severity.
//!
//! The catalog is process-wide, read-only configuration: loaded once, never
//! mutated after startup. Looking up an unknown code during insertion is a
//! configuration error (a rule referenced a code that was never registered),
//! not a data error.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use dsv_model::Severity;

/// One registered issue kind.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Canonical reason text shown in report headers.
    pub message: String,
    /// Severity applied when the emitting rule does not specify one.
    pub severity: Severity,
}

/// Code-keyed table of registered issue kinds.
#[derive(Debug, Clone, Default)]
pub struct IssueCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl IssueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a code. Re-registering an existing code replaces its entry;
    /// this only happens while a catalog is being built, never after load.
    pub fn register(
        &mut self,
        code: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) {
        self.entries.insert(
            code.into(),
            CatalogEntry {
                message: message.into(),
                severity,
            },
        );
    }

    pub fn resolve(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Iterate entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(code, entry)| (code.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The builtin catalog of non-schema issue codes emitted by the file and
    /// dataset scanners.
    pub fn builtin() -> &'static IssueCatalog {
        static BUILTIN: LazyLock<IssueCatalog> = LazyLock::new(|| {
            let mut catalog = IssueCatalog::new();
            for (code, severity, message) in BUILTIN_ENTRIES {
                catalog.register(*code, *severity, *message);
            }
            catalog
        });
        &BUILTIN
    }
}

/// Issue kinds raised outside schema-driven rule evaluation: unreadable or
/// malformed files, stray paths, and dataset-level structure findings.
const BUILTIN_ENTRIES: &[(&str, Severity, &str)] = &[
    ("EMPTY_FILE", Severity::Error, "Empty file."),
    (
        "FILE_READ",
        Severity::Error,
        "We were unable to read this file.",
    ),
    (
        "INVALID_LOCATION",
        Severity::Error,
        "The file has a valid name, but is located in an invalid directory.",
    ),
    ("JSON_INVALID", Severity::Error, "Not a valid JSON file."),
    (
        "JSON_KEY_RECOMMENDED",
        Severity::Warning,
        "A recommended metadata field is missing.",
    ),
    (
        "MISSING_SESSION",
        Severity::Warning,
        "Not all subjects contain the same sessions.",
    ),
    (
        "NIFTI_HEADER_UNREADABLE",
        Severity::Error,
        "We were unable to parse header data from this NIfTI file.",
    ),
    (
        "NOT_INCLUDED",
        Severity::Warning,
        "File is not part of any accepted naming scheme for this dataset.",
    ),
    (
        "README_FILE_MISSING",
        Severity::Warning,
        "The recommended file README is missing.",
    ),
    (
        "SIDECAR_WITHOUT_DATAFILE",
        Severity::Error,
        "A sidecar file was found without a corresponding data file.",
    ),
    (
        "SUBJECT_FOLDERS",
        Severity::Error,
        "There are no subject directories in this dataset.",
    ),
    (
        "UNUSED_STIMULUS",
        Severity::Warning,
        "A stimulus file was declared but never referenced.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_known_code() {
        let entry = IssueCatalog::builtin().resolve("EMPTY_FILE").unwrap();
        assert_eq!(entry.message, "Empty file.");
        assert_eq!(entry.severity, Severity::Error);
    }

    #[test]
    fn unknown_code_is_not_found() {
        assert!(IssueCatalog::builtin().resolve("NOT_REGISTERED").is_none());
    }

    #[test]
    fn custom_catalog_registration() {
        let mut catalog = IssueCatalog::new();
        catalog.register("CUSTOM", Severity::Warning, "Custom finding.");
        assert!(catalog.contains("CUSTOM"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.resolve("CUSTOM").unwrap().severity,
            Severity::Warning
        );
    }
}
