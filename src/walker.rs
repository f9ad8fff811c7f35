//! Directory traversal and target collection.
//!
//! Uses the `ignore` crate's walker with its standard filters turned off,
//! so hidden files and `.gitignore` patterns get no special treatment.
//! Only [`FilterRules`] decide what is pruned and what is collected.

use std::fmt;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::filter::FilterRules;

/// Errors that can occur while listing a directory.
///
/// These never abort a walk. They are logged and handed to the
/// diagnostic hook in [`WalkOptions`], if one is set.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            WalkError::PermissionDenied { path }
        } else {
            WalkError::Io { path, source }
        }
    }

    /// Path the failure occurred at.
    pub fn path(&self) -> &Path {
        match self {
            WalkError::PermissionDenied { path } | WalkError::Io { path, .. } => path,
        }
    }
}

/// Callback invoked for every recovered walk failure.
pub type ErrorHook<'a> = &'a dyn Fn(&WalkError);

/// Options for directory walking.
#[derive(Default, Clone)]
pub struct WalkOptions<'a> {
    /// Absolute paths never collected (typically the report file itself).
    pub exclude: Vec<PathBuf>,
    /// Diagnostic hook for listing failures that are otherwise swallowed.
    pub on_error: Option<ErrorHook<'a>>,
}

impl fmt::Debug for WalkOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkOptions")
            .field("exclude", &self.exclude)
            .field("on_error", &self.on_error.map(|_| "<hook>"))
            .finish()
    }
}

impl<'a> WalkOptions<'a> {
    /// Never collect the given path.
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude.push(path.into());
        self
    }

    /// Set the diagnostic hook.
    pub fn on_error(mut self, hook: ErrorHook<'a>) -> Self {
        self.on_error = Some(hook);
        self
    }

    pub(crate) fn report(&self, error: WalkError) {
        log::debug!("skipping unreadable entry: {}", error);
        if let Some(hook) = self.on_error {
            hook(&error);
        }
    }
}

/// Collect target files under `root`, as sorted relative paths.
///
/// # Examples
///
/// ```no_run
/// use treecat::filter::FilterRules;
/// use treecat::walker::collect_files;
/// use std::path::Path;
///
/// for rel in collect_files(Path::new("."), &FilterRules::default()) {
///     println!("{rel}");
/// }
/// ```
pub fn collect_files(root: &Path, rules: &FilterRules) -> Vec<String> {
    collect_files_with_options(root, rules, &WalkOptions::default())
}

/// Collect target files with custom options.
pub fn collect_files_with_options(
    root: &Path,
    rules: &FilterRules,
    options: &WalkOptions<'_>,
) -> Vec<String> {
    let prune_rules = rules.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        // Prune before descending; the root itself is always walked.
        .filter_entry(move |entry| !is_pruned(&prune_rules, entry))
        .build();

    let mut files = Vec::new();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                options.report(walk_error_from_ignore(root, e));
                continue;
            }
        };

        if entry.depth() == 0 || !is_file_like(&entry) {
            continue;
        }

        let path = entry.path();
        log::trace!("visiting {}", path.display());

        if !rules.is_target(path) {
            continue;
        }

        if options.exclude.iter().any(|p| p == path) {
            log::debug!("excluding {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        files.push(relative.to_string_lossy().into_owned());
    }

    files.sort();
    files
}

/// An entry of a single directory listing, in name order.
#[derive(Debug, Clone)]
pub(crate) struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    /// Real directory, safe to descend into. Symlinked directories are leaves.
    pub descend: bool,
    /// Directory matching an ignore prefix; listed but never shown or entered.
    pub pruned: bool,
}

/// List the immediate children of `dir`, sorted by name.
///
/// Pruned directories are kept in the listing, flagged, so callers see the
/// full sibling count. Failures go to the diagnostic hook; an unreadable
/// directory yields whatever was read before the failure (usually nothing).
pub(crate) fn list_dir(dir: &Path, rules: &FilterRules, options: &WalkOptions<'_>) -> Vec<ListedEntry> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                options.report(walk_error_from_ignore(dir, e));
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let pruned = is_pruned(rules, &entry);
        if pruned {
            log::debug!("pruning ignored directory: {}", entry.path().display());
        }

        entries.push(ListedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_path_buf(),
            descend: entry.file_type().is_some_and(|ft| ft.is_dir()),
            pruned,
        });
    }
    entries
}

/// Directories (or links to them) below the root whose name is ignored.
fn is_pruned(rules: &FilterRules, entry: &ignore::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_dir(),
        _ => false,
    };
    is_dir && rules.is_ignored_dir(&entry.file_name().to_string_lossy())
}

/// Regular files, plus symlinks that do not resolve to a directory.
fn is_file_like(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

fn walk_error_from_ignore(root: &Path, error: ignore::Error) -> WalkError {
    match error {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => WalkError::from_io(path, io_err),
            other => WalkError::Io {
                path,
                source: std::io::Error::other(other.to_string()),
            },
        },
        ignore::Error::WithDepth { err, .. } => walk_error_from_ignore(root, *err),
        ignore::Error::Io(io_err) => WalkError::from_io(root, io_err),
        other => WalkError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::other(other.to_string()),
        },
    }
}
