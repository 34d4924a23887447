//! Structured validation result for machine consumption.
//!
//! Partitions the issue store into `errors` and `warnings` as stable JSON,
//! optionally wrapped in a schema-versioned payload for downstream tooling.

use chrono::Utc;
use serde::Serialize;

use dsv_issues::IssueStore;
use dsv_model::{DatasetSummary, Issue, Severity};

const RESULT_SCHEMA: &str = "dsv.validation-result";
const RESULT_SCHEMA_VERSION: u32 = 1;

/// One issue as exposed to downstream consumers.
#[derive(Debug, Clone, Serialize)]
pub struct IssueEntry {
    pub severity: Severity,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Affected-file evidence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
    pub help_url: String,
}

impl From<&Issue> for IssueEntry {
    fn from(issue: &Issue) -> Self {
        Self {
            severity: issue.severity,
            code: issue.code.clone(),
            sub_code: issue.sub_code.clone(),
            message: issue.message.clone(),
            location: issue.location.clone(),
            rule: issue.rule.clone(),
            suggestion: issue.suggestion.clone(),
            evidence: issue.affects.clone().unwrap_or_default(),
            help_url: help_url(&issue.code),
        }
    }
}

/// Errors/warnings partition of a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<IssueEntry>,
    pub warnings: Vec<IssueEntry>,
}

/// Schema-versioned wrapper written by the CLI.
#[derive(Debug, Serialize)]
pub struct ValidationPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub summary: DatasetSummary,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Partition every record into exactly one of `errors` or `warnings`.
///
/// The partition is total: warnings collect `Severity::Warning`, everything
/// else routes to errors.
pub fn build_result(store: &IssueStore) -> ValidationResult {
    let mut result = ValidationResult::default();
    for issue in store {
        let entry = IssueEntry::from(issue);
        match issue.severity {
            Severity::Warning => result.warnings.push(entry),
            Severity::Error => result.errors.push(entry),
        }
    }
    result
}

/// Build the wrapped payload with summary statistics and a timestamp.
pub fn build_payload(store: &IssueStore, summary: &DatasetSummary) -> ValidationPayload {
    ValidationPayload {
        schema: RESULT_SCHEMA,
        schema_version: RESULT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        summary: summary.clone(),
        result: build_result(store),
    }
}

fn help_url(code: &str) -> String {
    format!("https://neurostars.org/search?q={code}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsv_model::NewIssue;

    #[test]
    fn partition_routes_by_severity() {
        let mut store = IssueStore::new();
        store.add(NewIssue::new("EMPTY_FILE")).unwrap();
        store.add(NewIssue::new("MISSING_SESSION")).unwrap();
        store.add(NewIssue::new("NOT_INCLUDED")).unwrap();
        let result = build_result(&store);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.errors.len() + result.warnings.len(), store.size());
    }

    #[test]
    fn entry_carries_record_detail() {
        let mut store = IssueStore::new();
        let mut issue = NewIssue::new("EMPTY_FILE").with_location("/sub-01/anat/sub-01_T1w.nii.gz");
        issue.affects = Some(vec!["/sub-01/anat/sub-01_T1w.json".to_string()]);
        store.add(issue).unwrap();

        let result = build_result(&store);
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
        let entry = &result.errors[0];
        assert_eq!(entry.code, "EMPTY_FILE");
        assert_eq!(entry.message, "Empty file.");
        assert_eq!(entry.location.as_deref(), Some("/sub-01/anat/sub-01_T1w.nii.gz"));
        assert_eq!(entry.evidence, vec!["/sub-01/anat/sub-01_T1w.json".to_string()]);
        assert!(entry.help_url.ends_with("EMPTY_FILE"));
    }

    #[test]
    fn payload_serializes_with_schema_fields() {
        let mut store = IssueStore::new();
        store.add(NewIssue::new("EMPTY_FILE")).unwrap();
        let payload = build_payload(&store, &DatasetSummary::default());
        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["schema"], "dsv.validation-result");
        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
