//! Console rendering of a validation run.
//!
//! Produces one newline-joined string: severity sections (warnings first,
//! then errors), per-code groups with optional sub-code groups, truncated
//! file listings, and a closing dataset summary table.

use comfy_table::{Cell, Color, Table, presets};
use owo_colors::OwoColorize;
use tracing::debug;

use dsv_issues::{IssueField, IssueFilter, IssueStore};
use dsv_model::{DatasetSummary, Issue, Severity};

use crate::bytes::format_bytes;

/// Records shown per group before truncation kicks in.
const FILE_PREVIEW_COUNT: usize = 2;

/// Leading pad used between summary table columns.
const SUMMARY_PAD: &str = "       ";

/// Rendering options for the console report.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Disable per-group file-listing truncation.
    pub verbose: bool,
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
        }
    }
}

/// Render the full console report for a run.
pub fn console_format(
    store: &IssueStore,
    summary: &DatasetSummary,
    options: &ConsoleOptions,
) -> String {
    debug!(issues = store.size(), verbose = options.verbose, "rendering console report");
    let mut output: Vec<String> = Vec::new();
    if store.is_empty() {
        output.push(paint_ok("This dataset appears to be valid.", options.color));
    } else {
        // Warnings first so the most severe findings end up closest to the
        // prompt.
        for severity in [Severity::Warning, Severity::Error] {
            let section = store.filter(&IssueFilter::severity(severity));
            if section.is_empty() {
                continue;
            }
            format_issues(&mut output, &section, severity, options);
        }
    }
    output.push(String::new());
    output.push(format_summary(summary, options.color));
    output.push(String::new());
    output.join("\n")
}

fn format_issues(
    output: &mut Vec<String>,
    section: &IssueStore,
    severity: Severity,
    options: &ConsoleOptions,
) {
    for (code, group) in section.group_by(IssueField::Code) {
        let Some(code) = code else { continue };
        if group.is_empty() {
            continue;
        }
        let message = group.code_message(&code).unwrap_or_default();
        let header = format!("[{}] {} {}", severity.tag(), code, message);
        output.push(format!("\t{}", paint(&header, severity, options.color)));

        let sub_groups = group.group_by(IssueField::SubCode);
        if sub_groups.len() == 1 && sub_groups.contains_key(&None) {
            format_files(output, &group, 2, options);
        } else {
            for (sub_code, sub_group) in &sub_groups {
                if sub_group.is_empty() {
                    continue;
                }
                let label = sub_code.as_deref().unwrap_or("None");
                output.push(format!("\t\t{}", paint(label, severity, options.color)));
                format_files(output, sub_group, 3, options);
            }
        }
    }
}

/// Render a group of records as detail lines, truncated unless verbose.
fn format_files(
    output: &mut Vec<String>,
    group: &IssueStore,
    depth: usize,
    options: &ConsoleOptions,
) {
    let indent = "\t".repeat(depth);
    let limit = if options.verbose {
        group.size()
    } else {
        FILE_PREVIEW_COUNT
    };
    for issue in group.iter().take(limit) {
        output.push(format!(
            "{indent}{}",
            detail_line(issue, group.code_message(&issue.code))
        ));
    }
    if !options.verbose && group.size() > FILE_PREVIEW_COUNT {
        output.push(String::new());
        output.push(format!(
            "{indent}{} more files with the same issue",
            group.size() - FILE_PREVIEW_COUNT
        ));
    }
}

/// Join the non-empty detail fields of one record. The group header already
/// shows the code message, so it is suppressed here unless the record carries
/// its own text.
fn detail_line(issue: &Issue, code_message: Option<&str>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(location) = issue.location.as_deref()
        && !location.is_empty()
    {
        parts.push(location);
    }
    if !issue.message.is_empty() && Some(issue.message.as_str()) != code_message {
        parts.push(&issue.message);
    }
    if let Some(rule) = issue.rule.as_deref()
        && !rule.is_empty()
    {
        parts.push(rule);
    }
    parts.join(" - ")
}

/// Three-column dataset summary as an unbordered padded table, followed by a
/// closing help pointer.
fn format_summary(summary: &DatasetSummary, color: bool) -> String {
    let column1 = vec![
        format!(
            "{} Files, {}",
            summary.total_files,
            format_bytes(summary.size_bytes)
        ),
        format!(
            "{} - Subjects {} - Sessions",
            summary.subjects.len(),
            summary.display_session_count()
        ),
    ];
    let column2 = &summary.tasks;
    let column3 = &summary.modalities;
    let longest = column1.len().max(column2.len()).max(column3.len());

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(vec![
        Cell::new(SUMMARY_PAD),
        header_cell("Summary:", color),
        header_cell("Available Tasks:", color),
        header_cell("Available Modalities:", color),
    ]);
    for idx in 0..longest {
        table.add_row(vec![
            SUMMARY_PAD.to_string(),
            column1.get(idx).cloned().unwrap_or_default(),
            column2.get(idx).cloned().unwrap_or_default(),
            column3.get(idx).cloned().unwrap_or_default(),
        ]);
    }

    let mut output = vec![table.to_string()];
    output.push(String::new());
    let help = "\tIf you have any questions, please post on https://neurostars.org.";
    output.push(if color {
        help.cyan().to_string()
    } else {
        help.to_string()
    });
    output.join("\n")
}

fn header_cell(label: &str, color: bool) -> Cell {
    if color {
        Cell::new(label).fg(Color::Magenta)
    } else {
        Cell::new(label)
    }
}

fn paint(text: &str, severity: Severity, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match severity {
        Severity::Error => text.red().to_string(),
        Severity::Warning => text.yellow().to_string(),
    }
}

fn paint_ok(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}
