//! Command definitions and dispatch

use crate::{input, render};
use adr_analysis::{Analyzer, AnalyzerConfig};
use adr_store::{InMemoryStore, ReportStore};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

/// Output format of `analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable summary
    Text,
    /// The stored record as pretty JSON
    Json,
}

/// The `adr-analyzer` command tree
#[must_use]
pub fn command() -> Command {
    let config = Arg::new("config")
        .long("config")
        .short('c')
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("TOML file overriding analyzer thresholds");

    Command::new("adr-analyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rule-based quality analysis for Architecture Decision Records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (-v info, -vv debug); RUST_LOG overrides"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("analyze")
                .about("Analyze one ADR")
                .arg(
                    Arg::new("input")
                        .value_name("PATH")
                        .required(true)
                        .help("Markdown or text file, or - for stdin"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["text", "json"])
                        .default_value("text")
                        .help("Report format"),
                )
                .arg(config.clone()),
        )
        .subcommand(
            Command::new("batch")
                .about("Analyze many ADRs in parallel; prints a JSON array")
                .arg(
                    Arg::new("inputs")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..)
                        .help("Markdown or text files"),
                )
                .arg(config),
        )
        .subcommand(Command::new("catalog").about("Print the fixed rule tables as JSON"))
}

/// Logging options shared by every subcommand
#[must_use]
pub fn log_options(matches: &ArgMatches) -> (u8, bool) {
    (
        matches.get_count("verbose"),
        matches.get_flag("log-json"),
    )
}

/// Run the selected subcommand, writing results to `out`
///
/// # Errors
///
/// Unreadable input or config, PDF input, empty documents (single-document
/// mode only) and write failures.
pub fn run(matches: &ArgMatches, out: &mut dyn Write) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("analyze", args)) => {
            let format = match args.get_one::<String>("format").map(String::as_str) {
                Some("json") => Format::Json,
                _ => Format::Text,
            };
            let arg = args
                .get_one::<String>("input")
                .context("missing input path")?;
            analyze(arg, format, analyzer(args)?, out)
        }
        Some(("batch", args)) => {
            let paths: Vec<&String> = args
                .get_many::<String>("inputs")
                .context("missing input paths")?
                .collect();
            batch(&paths, analyzer(args)?, out)
        }
        Some(("catalog", _)) => {
            serde_json::to_writer_pretty(&mut *out, &adr_catalog::snapshot())?;
            writeln!(out)?;
            Ok(())
        }
        _ => anyhow::bail!("no subcommand given; see --help"),
    }
}

fn analyzer(args: &ArgMatches) -> anyhow::Result<Analyzer> {
    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => {
            let config = AnalyzerConfig::from_file(path)
                .with_context(|| format!("invalid config {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        None => AnalyzerConfig::default(),
    };
    Ok(Analyzer::new(config))
}

fn analyze(arg: &str, format: Format, analyzer: Analyzer, out: &mut dyn Write) -> anyhow::Result<()> {
    let input = input::read(arg)?;
    let report = analyzer
        .analyze(&input.text)
        .with_context(|| format!("cannot analyze {arg}"))?;
    let record = InMemoryStore::new().save(report, input.provenance);
    match format {
        Format::Text => write!(out, "{}", render::text(&record))?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn batch(paths: &[&String], analyzer: Analyzer, out: &mut dyn Write) -> anyhow::Result<()> {
    let inputs: Vec<anyhow::Result<input::Input>> =
        paths.iter().map(|p| input::read(p)).collect();
    let texts: Vec<&str> = inputs
        .iter()
        .map(|i| i.as_ref().map_or("", |i| i.text.as_str()))
        .collect();
    let reports = analyzer.analyze_batch(&texts);

    let store = InMemoryStore::new();
    let mut entries = Vec::with_capacity(paths.len());
    for ((path, input), report) in paths.iter().zip(inputs).zip(reports) {
        let entry = match (input, report) {
            (Err(e), _) => json!({ "file": path, "error": format!("{e:#}") }),
            (Ok(_), Err(e)) => json!({ "file": path, "error": e.to_string() }),
            (Ok(input), Ok(report)) => {
                let record = store.save(report, input.provenance);
                json!({ "file": path, "analysis": record })
            }
        };
        entries.push(entry);
    }
    tracing::info!(documents = entries.len(), "batch complete");

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn parses_analyze_options() {
        let m = command()
            .try_get_matches_from(["adr-analyzer", "-vv", "analyze", "adr.md", "--format", "json"])
            .unwrap();
        assert_eq!(log_options(&m), (2, false));
        let (name, args) = m.subcommand().unwrap();
        assert_eq!(name, "analyze");
        assert_eq!(args.get_one::<String>("format").unwrap(), "json");
    }

    #[test]
    fn rejects_unknown_format() {
        let result = command().try_get_matches_from(["adr-analyzer", "analyze", "a.md", "--format", "html"]);
        assert!(result.is_err());
    }

    #[test]
    fn batch_requires_a_path() {
        assert!(command().try_get_matches_from(["adr-analyzer", "batch"]).is_err());
    }
}
