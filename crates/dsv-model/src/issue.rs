use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation finding.
///
/// `Error` blocks compliance, `Warning` is advisory. A finding is data for
/// this engine, never an exception: a dataset full of errors is still a
/// successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Uppercase tag used in console report headers.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A validation finding as emitted by a scanner or rule evaluator.
///
/// `code` is the only required field. `severity` and `message` may be left
/// unset, in which case the issue store resolves them from the catalog at
/// insertion time; an unknown code with no inline message aborts the add.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIssue {
    /// Stable identifier of the kind of problem; keys the catalog.
    pub code: String,
    /// Finer-grained classification used for grouping/display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Path or locator that triggered the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Name of the rule that fired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Paths of other files affected by this finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affects: Option<Vec<String>>,
}

impl NewIssue {
    /// Shorthand for the common case of a code plus triggering location.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_sub_code(mut self, sub_code: impl Into<String>) -> Self {
        self.sub_code = Some(sub_code.into());
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

/// A stored validation finding.
///
/// Unlike [`NewIssue`], `severity` and `message` are always concrete: the
/// store resolves both before the record is appended, so no record is ever
/// unclassified at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_code: Option<String>,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affects: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn new_issue_deserializes_with_code_only() {
        let issue: NewIssue = serde_json::from_str(r#"{"code": "EMPTY_FILE"}"#).unwrap();
        assert_eq!(issue.code, "EMPTY_FILE");
        assert!(issue.severity.is_none());
        assert!(issue.message.is_none());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let issue = NewIssue::new("EMPTY_FILE")
            .with_location("/sub-01/anat/sub-01_T1w.nii.gz")
            .with_severity(Severity::Warning);
        assert_eq!(issue.code, "EMPTY_FILE");
        assert_eq!(issue.severity, Some(Severity::Warning));
        assert_eq!(
            issue.location.as_deref(),
            Some("/sub-01/anat/sub-01_T1w.nii.gz")
        );
    }
}
