//! Treecat CLI - dump a directory tree and its source files into one report.

use std::path::{Component, Path, PathBuf};

use clap::Parser;
use treecat::builder::Treecat;
use treecat::errors::{exit_code, TreecatError};
use treecat::filter::FilterRules;

#[derive(Parser)]
#[command(name = "treecat")]
#[command(about = "Collect source and config files under a directory into one text file, \
                   together with the directory structure")]
struct Cli {
    /// Root directory to scan
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "output.txt")]
    out: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli.dir, &cli.out) {
        Ok(out_path) => println!("Done. Output written to: {}", out_path.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(dir: &Path, out: &Path) -> Result<PathBuf, TreecatError> {
    let root = absolute_path(dir)?;
    let out_path = absolute_path(out)?;

    let rules = FilterRules::default();
    for name in rules.unreachable_filenames() {
        log::debug!("filename rule `{}` has an extension and only matches by extension", name);
    }

    let summary = Treecat::new(&root)
        .rules(rules)
        .write_report(&out_path)?;
    log::info!(
        "wrote {} files ({} unreadable) to {}",
        summary.files_written,
        summary.read_errors,
        out_path.display()
    );

    Ok(out_path)
}

/// Make `path` absolute and fold `.` and `..` lexically, without touching
/// symlinks.
fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
