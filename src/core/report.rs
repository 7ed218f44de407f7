use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use time::Date;

use crate::{
    core::locale::{format_long_date, format_rupiah},
    models::Project,
};

pub const REPORT_COLUMNS: [&str; 7] = [
    "Project Name",
    "Client",
    "Location",
    "Budget",
    "Spent",
    "Progress",
    "Status",
];

pub type ReportRow = [String; REPORT_COLUMNS.len()];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Html,
    Text,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Text => "txt",
        }
    }
}

/// Printable table of every project.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub generated_on: Date,
    pub rows: Vec<ReportRow>,
}

/// Builds the report for `projects`, keeping their order.
pub fn render_report(projects: &[Project], title: &str, generated_on: Date) -> Report {
    Report {
        title: title.to_string(),
        generated_on,
        rows: projects.iter().map(report_row).collect(),
    }
}

fn report_row(project: &Project) -> ReportRow {
    [
        project.name.clone(),
        project.client.clone(),
        project.location.clone(),
        format_rupiah(project.budget),
        format_rupiah(project.spent),
        format!("{}%", project.progress),
        project.status.label().to_string(),
    ]
}

impl Report {
    pub fn timestamp_line(&self) -> String {
        format!("Dicetak pada: {}", format_long_date(self.generated_on))
    }

    /// Header row followed by one row per project.
    pub fn table(&self) -> Vec<Vec<&str>> {
        std::iter::once(REPORT_COLUMNS.to_vec())
            .chain(
                self.rows
                    .iter()
                    .map(|row| row.iter().map(String::as_str).collect()),
            )
            .collect()
    }

    /// Fixed-width rendering for terminals and plain printers.
    pub fn to_text(&self) -> String {
        let table = self.table();
        let mut widths = [0usize; REPORT_COLUMNS.len()];
        for row in &table {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", self.timestamp_line());
        out.push('\n');
        for (i, row) in table.iter().enumerate() {
            let line = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| pad(cell, width))
                .collect::<Vec<_>>()
                .join(" | ");
            let _ = writeln!(out, "{}", line.trim_end());
            if i == 0 {
                let rule = widths
                    .iter()
                    .map(|w| "-".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("-+-");
                let _ = writeln!(out, "{}", rule);
            }
        }
        out
    }

    /// Standalone printable page.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        out.push_str(HTML_STYLE);
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<h1>{}</h1>", escape_html(&self.title));
        let _ = writeln!(
            out,
            "<p class=\"printed\">{}</p>",
            escape_html(&self.timestamp_line())
        );
        out.push_str("<table>\n<thead>\n<tr>");
        for column in REPORT_COLUMNS {
            let _ = write!(out, "<th>{}</th>", column);
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", escape_html(cell));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        out
    }

    pub fn encode(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Html => self.to_html(),
            ReportFormat::Text => self.to_text(),
        }
    }
}

const HTML_STYLE: &str = r#"<style>
body { font-family: Helvetica, Arial, sans-serif; color: #0f172a; margin: 2em; }
h1 { font-size: 18pt; margin-bottom: 0.2em; }
.printed { font-size: 10pt; color: #64748b; }
table { border-collapse: collapse; width: 100%; font-size: 8pt; }
th, td { border: 1px solid #cbd5e1; padding: 3pt; text-align: left; }
th { background: #3b82f6; color: #ffffff; font-weight: bold; }
tbody tr:nth-child(even) { background: #f8fafc; }
td:first-child, td:last-child { font-weight: bold; }
</style>
"#;

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writes the report to `target`. A directory target receives `file_name`.
pub fn export_report(
    report: &Report,
    target: &Path,
    file_name: &str,
    format: ReportFormat,
) -> anyhow::Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(format!("{}.{}", file_name, format.extension()))
    } else {
        target.to_path_buf()
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {:?}", parent))?;
    }
    fs::write(&path, report.encode(format))
        .with_context(|| format!("Failed to write report {:?}", path))?;
    tracing::info!(path = %path.display(), rows = report.rows.len(), "report exported");
    Ok(path)
}
