use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Deserialize;
use tracing::info;

use dsv_issues::{IssueCatalog, IssueStore};
use dsv_model::{DatasetSummary, NewIssue, Severity};
use dsv_report::{ConsoleOptions, build_payload, build_result, console_format};

use crate::cli::ReportArgs;

/// Raw scanner emissions for one validation run: unresolved issue records
/// plus the dataset statistics the scanners gathered.
#[derive(Debug, Default, Deserialize)]
pub struct RawRun {
    #[serde(default)]
    pub issues: Vec<NewIssue>,
    #[serde(default)]
    pub summary: DatasetSummary,
}

/// Load a run, feed the store, and render. Returns whether the structured
/// result contains errors (drives the process exit code).
pub fn run_report(args: &ReportArgs, color: bool) -> Result<bool> {
    let raw = load_run(&args.issues_file)?;
    let summary = raw.summary;

    let mut store = IssueStore::new();
    for issue in raw.issues {
        store.add(issue).with_context(|| {
            format!("record issue from {}", args.issues_file.display())
        })?;
    }
    info!(issues = store.size(), "issues loaded");

    let result = build_result(&store);
    let has_errors = !result.errors.is_empty();

    if let Some(path) = &args.json {
        let payload = build_payload(&store, &summary);
        let json = serde_json::to_string_pretty(&payload).context("serialize result")?;
        if path == Path::new("-") {
            println!("{json}");
        } else {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "structured result written");
        }
    } else {
        let options = ConsoleOptions {
            verbose: args.show_all,
            color,
        };
        print!("{}", console_format(&store, &summary, &options));
    }

    Ok(has_errors)
}

/// List every registered issue code with its default severity and message.
pub fn run_codes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for (code, entry) in IssueCatalog::builtin().iter() {
        table.add_row(vec![
            Cell::new(code),
            severity_cell(entry.severity),
            Cell::new(&entry.message),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_run(path: &Path) -> Result<RawRun> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("error").fg(Color::Red),
        Severity::Warning => Cell::new("warning").fg(Color::Yellow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_run(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(json.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn report_flags_errors_from_loaded_run() {
        let file = write_run(
            r#"{
                "issues": [
                    {"code": "EMPTY_FILE", "location": "/sub-01/anat/sub-01_T1w.nii.gz"}
                ],
                "summary": {"total_files": 1, "size_bytes": 0}
            }"#,
        );
        let args = ReportArgs {
            issues_file: file.path().to_path_buf(),
            json: None,
            show_all: false,
        };
        let has_errors = run_report(&args, false).expect("run report");
        assert!(has_errors);
    }

    #[test]
    fn report_rejects_unregistered_code() {
        let file = write_run(r#"{"issues": [{"code": "NOT_REGISTERED"}]}"#);
        let args = ReportArgs {
            issues_file: file.path().to_path_buf(),
            json: None,
            show_all: false,
        };
        assert!(run_report(&args, false).is_err());
    }

    #[test]
    fn json_output_lands_on_disk() {
        let file = write_run(
            r#"{"issues": [{"code": "MISSING_SESSION"}], "summary": {"total_files": 4, "size_bytes": 1000}}"#,
        );
        let out_dir = tempfile::tempdir().expect("temp dir");
        let out_path = out_dir.path().join("result.json");
        let args = ReportArgs {
            issues_file: file.path().to_path_buf(),
            json: Some(out_path.clone()),
            show_all: false,
        };
        let has_errors = run_report(&args, false).expect("run report");
        assert!(!has_errors);
        let written = fs::read_to_string(&out_path).expect("read result");
        let value: serde_json::Value = serde_json::from_str(&written).expect("parse result");
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
        assert!(value["errors"].as_array().unwrap().is_empty());
    }
}
