//! Directory tree rendering.
//!
//! Renders a directory straight to text with box-drawing characters.
//! No node structure is kept; every call lists the filesystem afresh.

use std::fs;
use std::path::Path;

use crate::filter::FilterRules;
use crate::walker::{list_dir, WalkOptions};

/// Box-drawing characters for tree rendering.
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// Render the directory tree under `root`.
///
/// The first line is the root's own name. Ignored directories are left
/// out together with their contents; every other entry, file or not,
/// is shown.
///
/// # Examples
///
/// ```no_run
/// use treecat::filter::FilterRules;
/// use treecat::tree::render_tree;
/// use std::path::Path;
///
/// println!("{}", render_tree(Path::new("."), &FilterRules::default()));
/// ```
pub fn render_tree(root: &Path, rules: &FilterRules) -> String {
    render_tree_with_options(root, rules, &WalkOptions::default())
}

/// Render the directory tree, reporting unreadable directories to the
/// hook in `options`.
pub fn render_tree_with_options(root: &Path, rules: &FilterRules, options: &WalkOptions<'_>) -> String {
    // Pre-allocate for typical tree size
    let mut output = String::with_capacity(4096);
    output.push_str(&root_name(root));
    render_dir(&mut output, root, "", rules, options);
    output
}

fn render_dir(
    output: &mut String,
    dir: &Path,
    prefix: &str,
    rules: &FilterRules,
    options: &WalkOptions<'_>,
) {
    let children = list_dir(dir, rules, options);

    // Pruned directories still count as siblings when picking connectors.
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        if child.pruned {
            continue;
        }
        let is_last = i == child_count - 1;

        output.push('\n');
        output.push_str(prefix);
        output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        output.push_str(&child.name);

        if child.descend {
            let continuation = if is_last { SPACE } else { VERTICAL };
            let new_prefix = format!("{}{}", prefix, continuation);
            render_dir(output, &child.path, &new_prefix, rules, options);
        }
    }
}

/// Display name for the root: its last component, resolving `.` and `..`
/// through the filesystem when needed.
fn root_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    fs::canonicalize(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}
