//! Run-scoped accumulation of validation findings.
//!
//! One [`IssueStore`] per validation run: created empty, filled by `add`
//! calls from the scanners, read-only once formatting starts. The store is
//! append-only — every `add` creates one more record, two findings with the
//! same code are two records. Single sequential writer by contract; no
//! internal synchronization.

use std::collections::BTreeMap;

use tracing::debug;

use dsv_model::{DsvError, Issue, NewIssue, Result, Severity};

use crate::catalog::IssueCatalog;

/// Fields an [`IssueFilter`] or grouping may select on.
///
/// An explicit enumeration rather than arbitrary keys, so every operation
/// over issue fields is resolved at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueField {
    Code,
    SubCode,
    Severity,
    Location,
    Rule,
}

/// AND-filter over issue fields; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub code: Option<String>,
    pub sub_code: Option<String>,
    pub severity: Option<Severity>,
    pub location: Option<String>,
    pub rule: Option<String>,
}

impl IssueFilter {
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn severity(severity: Severity) -> Self {
        Self {
            severity: Some(severity),
            ..Self::default()
        }
    }

    fn matches(&self, issue: &Issue) -> bool {
        if let Some(code) = &self.code
            && issue.code != *code
        {
            return false;
        }
        if let Some(sub_code) = &self.sub_code
            && issue.sub_code.as_ref() != Some(sub_code)
        {
            return false;
        }
        if let Some(severity) = self.severity
            && issue.severity != severity
        {
            return false;
        }
        if let Some(location) = &self.location
            && issue.location.as_ref() != Some(location)
        {
            return false;
        }
        if let Some(rule) = &self.rule
            && issue.rule.as_ref() != Some(rule)
        {
            return false;
        }
        true
    }
}

/// Ordered collection of resolved issues for one validation run.
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
    /// Resolved reason text per code, built as codes are first seen. Used by
    /// the report formatter for group headers without re-querying the catalog.
    code_messages: BTreeMap<String, String>,
}

impl IssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and append one finding, defaulting message and severity from
    /// the builtin catalog.
    ///
    /// # Errors
    ///
    /// [`DsvError::UnknownIssueCode`] when the code is not registered and the
    /// finding carries no inline message. This is a contract violation in the
    /// emitting rule and should fail the run.
    pub fn add(&mut self, issue: NewIssue) -> Result<()> {
        self.add_with_catalog(IssueCatalog::builtin(), issue)
    }

    /// `add` against an explicit catalog.
    pub fn add_with_catalog(&mut self, catalog: &IssueCatalog, issue: NewIssue) -> Result<()> {
        let NewIssue {
            code,
            sub_code,
            severity,
            location,
            message,
            rule,
            suggestion,
            affects,
        } = issue;

        let entry = catalog.resolve(&code);
        // An absent message resolves from the catalog only; an inline message
        // describes one record and never stands in for the catalog entry.
        let message = match message {
            Some(message) => message,
            None => match entry {
                Some(entry) => entry.message.clone(),
                None => {
                    return Err(DsvError::UnknownIssueCode { code });
                }
            },
        };
        let severity = severity
            .or_else(|| entry.map(|entry| entry.severity))
            .unwrap_or(Severity::Error);

        self.code_messages.entry(code.clone()).or_insert_with(|| {
            entry.map_or_else(|| message.clone(), |entry| entry.message.clone())
        });

        debug!(code = %code, severity = %severity, "issue recorded");
        self.issues.push(Issue {
            code,
            sub_code,
            severity,
            location,
            message,
            rule,
            suggestion,
            affects,
        });
        Ok(())
    }

    /// All records matching the filter, in insertion order.
    pub fn get(&self, filter: &IssueFilter) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| filter.matches(issue))
            .collect()
    }

    /// Sub-store of matching records, carrying the message-cache subset for
    /// the codes that survive the filter.
    pub fn filter(&self, filter: &IssueFilter) -> IssueStore {
        let issues: Vec<Issue> = self
            .issues
            .iter()
            .filter(|issue| filter.matches(issue))
            .cloned()
            .collect();
        self.sub_store(issues)
    }

    /// Stable partition by one field.
    ///
    /// The `None` key collects records where the field is absent. Repeated
    /// grouping of the same store yields identical keys, member order, and
    /// sizes: keys are sorted, members stay in insertion order.
    pub fn group_by(&self, field: IssueField) -> BTreeMap<Option<String>, IssueStore> {
        let mut buckets: BTreeMap<Option<String>, Vec<Issue>> = BTreeMap::new();
        for issue in &self.issues {
            buckets
                .entry(field_value(issue, field))
                .or_default()
                .push(issue.clone());
        }
        buckets
            .into_iter()
            .map(|(key, issues)| (key, self.sub_store(issues)))
            .collect()
    }

    /// Count of records currently held.
    pub fn size(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Cached reason text for a code, if any record with that code was added.
    pub fn code_message(&self, code: &str) -> Option<&str> {
        self.code_messages.get(code).map(String::as_str)
    }

    fn sub_store(&self, issues: Vec<Issue>) -> IssueStore {
        let code_messages = self
            .code_messages
            .iter()
            .filter(|(code, _)| issues.iter().any(|issue| issue.code == **code))
            .map(|(code, message)| (code.clone(), message.clone()))
            .collect();
        IssueStore {
            issues,
            code_messages,
        }
    }
}

impl<'a> IntoIterator for &'a IssueStore {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

fn field_value(issue: &Issue, field: IssueField) -> Option<String> {
    match field {
        IssueField::Code => Some(issue.code.clone()),
        IssueField::SubCode => issue.sub_code.clone(),
        IssueField::Severity => Some(issue.severity.to_string()),
        IssueField::Location => issue.location.clone(),
        IssueField::Rule => issue.rule.clone(),
    }
}
