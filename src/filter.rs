//! File classification against allow and ignore lists.
//!
//! A [`FilterRules`] value is built once and shared by reference between
//! the tree renderer, the collector and the classifier.

use std::collections::HashSet;
use std::path::Path;

/// Extensions collected by default (lower-case, with leading dot).
const TARGET_EXTENSIONS: &[&str] = &[
    // C / C++
    ".c", ".cpp", ".cc", ".cxx", ".h", ".hpp", ".hh",
    // JVM
    ".java", ".kt",
    ".cs",
    ".go",
    ".rs",
    ".swift",
    // JS / TS
    ".js", ".jsx", ".ts", ".tsx",
    ".php",
    ".py",
    ".rb",
    // Shell / batch
    ".sh", ".bat", ".cmd", ".ps1",
    // Config and text
    ".json", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".config", ".env",
    ".md", ".txt",
];

/// Names collected even without an extension.
const TARGET_FILENAMES: &[&str] = &[
    "makefile",
    "dockerfile",
    "readme",
    "requirements.txt",
    "pipfile",
    "package.json",
    "tsconfig.json",
    "composer.json",
];

/// Directory-name prefixes that are never entered.
const IGNORED_DIR_PREFIXES: &[&str] = &[".git", "node_modules", "__pycache__"];

/// File names or extensions that are always rejected.
const IGNORED_NAMES: &[&str] = &[".gitignore", ".pyc", ".o", ".class", ".exe", ".dll", ".so"];

/// Which allow-list accepted a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The extension is a target extension.
    Extension,
    /// The file has no extension and its name is a target filename.
    FileName,
}

/// Outcome of classifying a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Accepted(MatchRule),
    /// Name or extension is on the ignore list. Takes precedence over any match.
    RejectedIgnored,
    RejectedUnmatched,
}

impl Classification {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Accepted(_))
    }
}

/// Matching criteria for target files and ignored directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    target_extensions: HashSet<String>,
    target_filenames: HashSet<String>,
    ignored_dir_prefixes: Vec<String>,
    ignored_names: HashSet<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self::new(
            TARGET_EXTENSIONS,
            TARGET_FILENAMES,
            IGNORED_DIR_PREFIXES,
            IGNORED_NAMES,
        )
    }
}

impl FilterRules {
    /// Build a rule set. All entries are lower-cased.
    pub fn new<S: AsRef<str>>(
        target_extensions: &[S],
        target_filenames: &[S],
        ignored_dir_prefixes: &[S],
        ignored_names: &[S],
    ) -> Self {
        Self {
            target_extensions: lowercase_set(target_extensions),
            target_filenames: lowercase_set(target_filenames),
            ignored_dir_prefixes: ignored_dir_prefixes
                .iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
            ignored_names: lowercase_set(ignored_names),
        }
    }

    /// Check whether a directory name starts with an ignored prefix.
    ///
    /// This is a prefix test, so `.github` is ignored by the `.git` rule.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.ignored_dir_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// Classify a path by its file name alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecat::filter::{Classification, FilterRules, MatchRule};
    ///
    /// let rules = FilterRules::default();
    /// assert_eq!(rules.classify("src/Main.PY"), Classification::Accepted(MatchRule::Extension));
    /// assert_eq!(rules.classify("Makefile"), Classification::Accepted(MatchRule::FileName));
    /// assert_eq!(rules.classify(".gitignore"), Classification::RejectedIgnored);
    /// ```
    pub fn classify(&self, path: impl AsRef<Path>) -> Classification {
        let name = match path.as_ref().file_name() {
            Some(n) => n.to_string_lossy().to_lowercase(),
            None => return Classification::RejectedUnmatched,
        };
        let extension = split_extension(&name);

        if self.ignored_names.contains(&name)
            || (!extension.is_empty() && self.ignored_names.contains(extension))
        {
            return Classification::RejectedIgnored;
        }

        if self.target_extensions.contains(extension) {
            return Classification::Accepted(MatchRule::Extension);
        }

        if extension.is_empty() && self.target_filenames.contains(&name) {
            return Classification::Accepted(MatchRule::FileName);
        }

        Classification::RejectedUnmatched
    }

    /// Check whether a file should be collected.
    pub fn is_target(&self, path: impl AsRef<Path>) -> bool {
        self.classify(path).is_accepted()
    }

    /// Target filenames that can never match the bare-filename rule because
    /// they carry an extension of their own.
    pub fn unreachable_filenames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .target_filenames
            .iter()
            .map(String::as_str)
            .filter(|name| !split_extension(name).is_empty())
            .collect();
        names.sort_unstable();
        names
    }
}

fn lowercase_set<S: AsRef<str>>(items: &[S]) -> HashSet<String> {
    items.iter().map(|s| s.as_ref().to_lowercase()).collect()
}

/// Split off the extension of a file name, including its dot.
///
/// Leading dots belong to the stem, so `.env` has no extension while
/// `a.` has the extension `.`.
pub fn split_extension(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => &name[stem_start + idx..],
        None => "",
    }
}
