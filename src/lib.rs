//! Treecat - dump a directory tree and its source files into one report.
//!
//! Treecat walks a directory, renders its structure as a text tree, and
//! concatenates every file that passes the extension/filename allow-list
//! into a single document, each file under its own header line.
//!
//! # Quick Start
//!
//! ```no_run
//! use treecat::builder::Treecat;
//!
//! let summary = Treecat::new("./my-project")
//!     .write_report("output.txt")
//!     .unwrap();
//!
//! println!("Wrote {} files", summary.files_written);
//! ```
//!
//! # Modules
//!
//! - [`filter`] - Allow/ignore rules and file classification
//! - [`tree`] - Directory tree rendering
//! - [`walker`] - Target file collection
//! - [`output`] - Report writing
//! - [`builder`] - Fluent API tying the above together

pub mod filter;
pub mod errors;
pub mod tree;
pub mod walker;
pub mod output;
pub mod builder;

// Re-export key types at crate root for convenience
pub use builder::{Treecat, TreecatResult};
pub use errors::TreecatError;
pub use filter::{Classification, FilterRules, MatchRule};
pub use output::{OutputError, ReportSummary};
pub use tree::render_tree;
pub use walker::{collect_files, WalkError, WalkOptions};
