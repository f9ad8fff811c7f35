//! Report writing.
//!
//! A report is the rendered tree followed by the content of every
//! collected file, each under a `--- path ---` delimiter line.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing a report.
///
/// Failures reading individual source files are not errors; they are
/// written inline into the report.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const TREE_HEADER: &str = "=== Directory Structure ===";
pub const CONTENTS_HEADER: &str = "=== File Contents ===";

/// Counts gathered while writing a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Files written, including those replaced by an error placeholder.
    pub files_written: usize,
    /// Files whose content could not be read.
    pub read_errors: usize,
}

/// Write a report to `output_path`, creating or truncating it.
pub fn write_report(
    root: &Path,
    tree_text: &str,
    files: &[String],
    output_path: &Path,
) -> Result<ReportSummary, OutputError> {
    let file = File::create(output_path).map_err(|source| OutputError::Create {
        path: output_path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let summary = write_report_to(root, tree_text, files, &mut writer)?;
    writer.flush()?;
    Ok(summary)
}

/// Write a report to any writer.
///
/// `files` are paths relative to `root`, written in the order given.
pub fn write_report_to<W: Write>(
    root: &Path,
    tree_text: &str,
    files: &[String],
    out: &mut W,
) -> Result<ReportSummary, OutputError> {
    let mut summary = ReportSummary::default();

    writeln!(out, "{}", TREE_HEADER)?;
    out.write_all(tree_text.as_bytes())?;
    out.write_all(b"\n\n")?;

    writeln!(out, "{}", CONTENTS_HEADER)?;
    for rel_path in files {
        writeln!(out, "--- {} ---", rel_path)?;

        let content = match read_text(&root.join(rel_path)) {
            Ok(text) => text,
            Err(e) => {
                log::info!("failed to read {}: {}", rel_path, e);
                summary.read_errors += 1;
                format!("[read error: {}]\n", e)
            }
        };

        out.write_all(content.as_bytes())?;
        out.write_all(b"\n")?;
        summary.files_written += 1;
    }

    Ok(summary)
}

/// Read a file as text, replacing invalid UTF-8 and normalizing line endings.
fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(normalize_newlines(&String::from_utf8_lossy(&bytes)).into_owned())
}

/// Convert `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
