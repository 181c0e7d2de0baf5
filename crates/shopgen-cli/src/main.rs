mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use config::{ConfigError, ShopgenConfig, load_config};
use logging::init_logging;
use shopgen_generate::{GenerationEngine, GenerationError};
use shopgen_store::{StoreError, ingest_dir, top_spenders};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "shopgen", version, about = "Synthetic e-commerce dataset generator")]
struct Cli {
    /// Optional TOML settings file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Directory for the CSV files and the database.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the five CSV files.
    Generate(GenerateArgs),
    /// Load the CSV files into the database, replacing existing tables.
    Ingest(DatabaseArgs),
    /// Print the top spenders from the database.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Records per entity kind.
    #[arg(long)]
    records: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Instant treated as "now", e.g. 2025-01-01T00:00:00.
    #[arg(long, value_parser = parse_anchor)]
    anchor: Option<NaiveDateTime>,
    #[arg(long)]
    min_items: Option<u32>,
    #[arg(long)]
    max_items: Option<u32>,
}

#[derive(Args, Debug)]
struct DatabaseArgs {
    /// Database file name, relative to the data directory.
    #[arg(long)]
    database: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(flatten)]
    database: DatabaseArgs,
    /// Number of users to show.
    #[arg(long)]
    limit: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.log_file.as_deref())?;
    execute(cli)
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Command::Generate(args) => run_generate(config, args),
        Command::Ingest(args) => run_ingest(config, args),
        Command::Report(args) => run_report(config, args),
    }
}

fn run_generate(mut config: ShopgenConfig, args: GenerateArgs) -> Result<(), CliError> {
    let options = &mut config.generate;
    if let Some(records) = args.records {
        options.record_count = records;
    }
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    if let Some(anchor) = args.anchor {
        options.anchor = anchor;
    }
    if let Some(min_items) = args.min_items {
        options.min_items_per_order = min_items;
    }
    if let Some(max_items) = args.max_items {
        options.max_items_per_order = max_items;
    }

    let engine = GenerationEngine::new(config.generate.clone());
    let result = engine.run(&config.data_dir)?;
    println!(
        "Data generated successfully in {} ({} bytes)",
        result.out_dir.display(),
        result.report.bytes_written
    );
    Ok(())
}

fn run_ingest(mut config: ShopgenConfig, args: DatabaseArgs) -> Result<(), CliError> {
    if let Some(database) = args.database {
        config.database = database;
    }
    let database = config.database_path();
    ingest_dir(&config.data_dir, &database)?;
    println!("CSV data ingested into {} successfully", database.display());
    Ok(())
}

fn run_report(mut config: ShopgenConfig, args: ReportArgs) -> Result<(), CliError> {
    if let Some(database) = args.database.database {
        config.database = database;
    }
    if let Some(limit) = args.limit {
        config.report_limit = limit;
    }

    let spenders = top_spenders(&config.database_path(), config.report_limit)?;
    println!("Top {} Users by Total Spending:", config.report_limit);
    for spender in spenders {
        println!("{spender}");
    }
    Ok(())
}

fn parse_anchor(value: &str) -> Result<NaiveDateTime, String> {
    shopgen_core::parse_timestamp(value)
        .map_err(|err| format!("expected YYYY-MM-DDTHH:MM:SS: {err}"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shopgen",
            "generate",
            "--records",
            "10",
            "--anchor",
            "2024-02-29T08:30:00",
            "--data-dir",
            "out",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("out")));
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.records, Some(10));
                assert_eq!(
                    args.anchor.map(|a| a.to_string()),
                    Some("2024-02-29 08:30:00".to_string())
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_anchor() {
        let result = Cli::try_parse_from(["shopgen", "generate", "--anchor", "yesterday"]);
        assert!(result.is_err());
    }

    fn empty_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("shopgen_cli_{label}_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn parse(args: &[&str], data_dir: &std::path::Path) -> Cli {
        let data_dir = data_dir.to_str().expect("utf-8 temp path");
        let mut argv = vec!["shopgen"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["--data-dir", data_dir]);
        Cli::try_parse_from(argv).expect("parse")
    }

    #[test]
    fn report_on_empty_dir_fails_with_missing_database() {
        let dir = empty_dir("report_missing");
        let database = dir.join(shopgen_core::DEFAULT_DATABASE_FILE);

        let err = execute(parse(&["report"], &dir)).expect_err("report must fail");
        assert!(
            matches!(err, CliError::Store(StoreError::NotFound { ref path }) if *path == database),
            "unexpected error {err}"
        );
        assert!(!database.exists());
    }

    #[test]
    fn ingest_on_empty_dir_fails_with_missing_csv() {
        let dir = empty_dir("ingest_missing");

        let err = execute(parse(&["ingest"], &dir)).expect_err("ingest must fail");
        assert!(
            matches!(
                err,
                CliError::Store(StoreError::NotFound { ref path }) if path.ends_with("users.csv")
            ),
            "unexpected error {err}"
        );
        assert!(!dir.join(shopgen_core::DEFAULT_DATABASE_FILE).exists());
    }

    #[test]
    fn generate_ingest_report_succeed_in_order() {
        let dir = empty_dir("pipeline");

        execute(parse(&["generate", "--records", "20"], &dir)).expect("generate");
        execute(parse(&["ingest"], &dir)).expect("ingest");
        execute(parse(&["report", "--limit", "3"], &dir)).expect("report");
        assert!(dir.join(shopgen_core::DEFAULT_DATABASE_FILE).is_file());
    }

    #[test]
    fn report_accepts_database_and_limit() {
        let cli =
            Cli::try_parse_from(["shopgen", "report", "--database", "shop.db", "--limit", "3"])
                .unwrap();
        match cli.command {
            Command::Report(args) => {
                assert_eq!(args.database.database, Some(PathBuf::from("shop.db")));
                assert_eq!(args.limit, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
