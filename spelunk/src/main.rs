//! # spelunk
//!
//! A CLI for a first look at an unfamiliar source tree: how many files and
//! lines of each language it holds, and where they live.
//!
//! ## Overview
//!
//! spelunk is built on top of spelunklib. It walks a directory once, skipping
//! dependency, build and version-control directories, classifies every file
//! by name, counts the lines of recognised source files and prints a table.
//!
//! ## Usage
//!
//! ```bash
//! # Inventory the current directory
//! spelunk
//!
//! # Also list the directories holding each language
//! spelunk --where
//!
//! # Skip more directories (repeatable)
//! spelunk -e HTML -e DoxyFiles
//!
//! # Only count one language
//! spelunk --language Python
//!
//! # HTML or LaTeX tables, or the raw inventory as JSON
//! spelunk --pretty html
//! spelunk --pretty latex
//! spelunk --pretty json
//! ```

mod render;

use std::process::ExitCode;
use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use spelunklib::{
    scan_directory, InventoryReport, InventoryTable, OrderBy, Ordering, ScanOptions, TextEncoding,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::OutputFormat;

/// Log filter when neither `--verbose` nor `RUST_LOG` is given
const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter for `--verbose`
const VERBOSE_LOG_FILTER: &str = "spelunk=debug,spelunklib=debug";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("spelunk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inventory of a source tree: files and lines by language")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("encoding")
                .short('c')
                .long("encoding")
                .default_value("utf-8")
                .help("The file encoding to use when reading (e.g. utf-8, latin-1, utf-16, cp1252)"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Directory name to exclude (can be specified multiple times)"),
        )
        .arg(
            Arg::new("language")
                .short('l')
                .long("language")
                .help("Find only code of a particular language"),
        )
        .arg(
            Arg::new("pretty")
                .short('p')
                .long("pretty")
                .ignore_case(true)
                .value_parser(["plain", "html", "latex", "json"])
                .default_value("plain")
                .help("Output layout"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .ignore_case(true)
                .value_parser(["label", "files", "lines"])
                .default_value("label")
                .help("Order languages by label, or by file or line count (largest first)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pruned directories and skipped files to stderr"),
        )
        .arg(
            Arg::new("where")
                .short('w')
                .long("where")
                .action(ArgAction::SetTrue)
                .help("Print where files are located"),
        )
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build scan options from matches
fn build_options(matches: &ArgMatches) -> Result<ScanOptions, anyhow::Error> {
    let encoding = matches
        .get_one::<String>("encoding")
        .map(|s| TextEncoding::from_str(s))
        .transpose()?
        .unwrap_or_default();

    let excludes: Vec<String> = matches
        .get_many::<String>("exclude")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    let mut options = ScanOptions::new().exclude_dirs(excludes).encoding(encoding);
    if let Some(language) = matches.get_one::<String>("language") {
        options = options.language(language);
    }

    Ok(options)
}

/// Scan, then produce the text to print
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let format = matches
        .get_one::<String>("pretty")
        .map(|s| OutputFormat::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let order_by = matches
        .get_one::<String>("sort")
        .map(|s| OrderBy::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let show_where = matches.get_flag("where");

    let options = build_options(matches)?;
    debug!(path, encoding = %options.encoding, language = ?options.language, "scanning");

    let inventory = scan_directory(path, &options)?;

    match format {
        OutputFormat::Json => Ok(render::render_json(&inventory)?),
        OutputFormat::Table(layout) => {
            let report = InventoryReport::from_inventory(
                &inventory,
                show_where,
                Ordering::natural(order_by),
            );
            let table = InventoryTable::from_report(&report);
            Ok(render::render_table(&table, layout)?)
        }
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["spelunk"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_build_options_defaults() {
        let options = build_options(&matches(&[])).unwrap();
        assert_eq!(options, ScanOptions::new());
    }

    #[test]
    fn test_build_options_from_flags() {
        let options = build_options(&matches(&[
            "-e", "HTML", "-e", "DoxyFiles", "-l", "Python", "-c", "latin-1",
        ]))
        .unwrap();

        assert!(options.is_excluded_dir("html"));
        assert!(options.is_excluded_dir("doxyfiles"));
        assert!(options.is_excluded_dir("node_modules"));
        assert_eq!(options.language.as_deref(), Some("Python"));
        assert_eq!(options.encoding, TextEncoding::Latin1);
    }

    #[test]
    fn test_build_options_bad_encoding() {
        let err = build_options(&matches(&["--encoding", "klingon"])).unwrap_err();
        assert!(err.to_string().contains("unsupported encoding 'klingon'"));
    }

    #[test]
    fn test_pretty_is_case_insensitive() {
        let m = matches(&["--pretty", "LaTeX"]);
        let pretty = m.get_one::<String>("pretty").unwrap();
        assert_eq!(
            OutputFormat::from_str(pretty).unwrap(),
            OutputFormat::Table(render::Layout::Latex)
        );
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let m = matches(&["--sort", "Lines"]);
        let sort = m.get_one::<String>("sort").unwrap();
        assert_eq!(OrderBy::from_str(sort).unwrap(), OrderBy::Lines);
    }

    #[test]
    fn test_build_options_utf16_encoding() {
        let options = build_options(&matches(&["-c", "utf-16"])).unwrap();
        assert_eq!(options.encoding.name(), "UTF-16LE");
    }

    #[test]
    fn test_rejects_unknown_pretty() {
        let result = build_command().try_get_matches_from(["spelunk", "--pretty", "csv"]);
        assert!(result.is_err());
    }
}
