//! Fluent builder API for treecat.
//!
//! Wires the filter rules, tree renderer, file collector and report
//! writer together for one invocation.

use std::path::{Path, PathBuf};

use crate::errors::TreecatError;
use crate::filter::FilterRules;
use crate::output::{write_report, ReportSummary};
use crate::tree::render_tree_with_options;
use crate::walker::{collect_files_with_options, ErrorHook, WalkOptions};

/// Builder for a directory report.
///
/// # Examples
///
/// ```no_run
/// use treecat::builder::Treecat;
///
/// let summary = Treecat::new("./project")
///     .write_report("output.txt")
///     .unwrap();
/// println!("{} files", summary.files_written);
/// ```
pub struct Treecat<'a> {
    root: PathBuf,
    rules: FilterRules,
    walk_options: WalkOptions<'a>,
}

impl<'a> Treecat<'a> {
    /// Create a new builder for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rules: FilterRules::default(),
            walk_options: WalkOptions::default(),
        }
    }

    /// Replace the built-in filter rules.
    pub fn rules(mut self, rules: FilterRules) -> Self {
        self.rules = rules;
        self
    }

    /// Never collect the given path.
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.walk_options = self.walk_options.exclude(path);
        self
    }

    /// Receive directory listing failures that are otherwise skipped.
    pub fn on_walk_error(mut self, hook: ErrorHook<'a>) -> Self {
        self.walk_options = self.walk_options.on_error(hook);
        self
    }

    /// Render the tree and collect target files.
    pub fn build(&self) -> Result<TreecatResult, TreecatError> {
        check_root(&self.root)?;

        let tree = render_tree_with_options(&self.root, &self.rules, &self.walk_options);
        let files = collect_files_with_options(&self.root, &self.rules, &self.walk_options);
        log::info!("collected {} files under {}", files.len(), self.root.display());

        Ok(TreecatResult {
            root: self.root.clone(),
            tree,
            files,
        })
    }

    /// Build and write the report to `output_path`.
    ///
    /// The output file is never collected into its own report.
    pub fn write_report(self, output_path: impl AsRef<Path>) -> Result<ReportSummary, TreecatError> {
        let output_path = output_path.as_ref();
        let result = self.exclude(output_path).build()?;
        result.write_report(output_path)
    }
}

/// Rendered tree and collected files for one root.
#[derive(Debug, Clone)]
pub struct TreecatResult {
    /// Root directory walked.
    pub root: PathBuf,
    /// Rendered directory tree.
    pub tree: String,
    /// Target files, relative to `root`, sorted.
    pub files: Vec<String>,
}

impl TreecatResult {
    /// Write this result as a report.
    pub fn write_report(&self, output_path: &Path) -> Result<ReportSummary, TreecatError> {
        let summary = write_report(&self.root, &self.tree, &self.files, output_path)?;
        if summary.read_errors > 0 {
            log::info!("{} files could not be read", summary.read_errors);
        }
        Ok(summary)
    }
}

fn check_root(root: &Path) -> Result<(), TreecatError> {
    let metadata = match root.metadata() {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TreecatError::PathNotFound(root.to_path_buf()));
        }
        Err(e) => return Err(TreecatError::Io(e)),
    };

    if !metadata.is_dir() {
        return Err(TreecatError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
