//! Instruction-set reference builder CLI.
//!
//! This binary is the single entry point for building the reference. It performs:
//! 1. **Build (default):** Merge input documents into the persisted store, enrich, write the
//!    renderer-facing data, then persist the store.
//! 2. **Inspect:** Show what each variant of one mnemonic carries (operands, encoding pattern).
//!
//! Logging goes to stderr through `tracing`; `RUST_LOG` overrides `-v`/`-q`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use isaref_core::common::Error;
use isaref_core::{Config, Database, inspect, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "isaref",
    author,
    version,
    about = "Instruction-set reference builder",
    long_about = "Consolidate hand-authored instruction records into a canonical store and emit cross-linked reference data.\n\nExamples:\n  isaref\n  isaref --input input --db db --output docs --strict\n  isaref inspect --arch ARMv8-A --mnemonic adc"
)]
struct Cli {
    /// JSON configuration file; flags override its values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory of input documents.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Directory of the persisted store.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Directory receiving renderer-facing output.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fail on any unparsable document or invalid record.
    #[arg(long)]
    strict: bool,

    /// Run every stage but write nothing.
    #[arg(long)]
    dry_run: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect every variant of a mnemonic in the persisted store.
    Inspect {
        /// Architecture name as stored (e.g. `RISC-V`).
        #[arg(long)]
        arch: String,

        /// Mnemonic, matched case-insensitively.
        #[arg(long)]
        mnemonic: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = load_config(&cli).and_then(|config| match &cli.command {
        Some(Commands::Inspect {
            arch,
            mnemonic,
            json,
        }) => cmd_inspect(&config, arch, mnemonic, *json),
        None => cmd_build(&config),
    });

    result.unwrap_or_else(|err| {
        eprintln!("error: {err}");
        if let Error::Strict { failures } = &err {
            for failure in failures {
                eprintln!("  {failure}");
            }
        }
        ExitCode::FAILURE
    })
}

/// Installs the stderr subscriber.
///
/// # Arguments
///
/// * `verbose` - Number of `-v` flags: 0 is `info`, 1 is `debug`, more is `trace`.
/// * `quiet` - Restricts output to errors.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Reads the configuration file, if any, and applies flag overrides.
fn load_config(cli: &Cli) -> Result<Config, Error> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    if let Some(input) = &cli.input {
        config.paths.input_dir.clone_from(input);
    }
    if let Some(db) = &cli.db {
        config.paths.db_dir.clone_from(db);
    }
    if let Some(output) = &cli.output {
        config.paths.output_dir.clone_from(output);
    }
    config.build.strict |= cli.strict;
    config.build.dry_run |= cli.dry_run;

    tracing::debug!(
        input = %config.paths.input_dir.display(),
        db = %config.paths.db_dir.display(),
        output = %config.paths.output_dir.display(),
        strict = config.build.strict,
        dry_run = config.build.dry_run,
        "configuration resolved"
    );
    Ok(config)
}

/// Runs the full build and prints the summary report.
fn cmd_build(config: &Config) -> Result<ExitCode, Error> {
    let outcome = pipeline::run(config)?;
    outcome.stats.print();
    if outcome.written {
        println!(
            "[*] {} instructions across {} architectures -> {}",
            outcome.site.instruction_count(),
            outcome.site.architectures.len(),
            config.paths.output_dir.display()
        );
    } else {
        println!("[*] Dry run: no files written");
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the variant checks for one mnemonic.
///
/// Exits with failure when the mnemonic has no variant in the architecture.
fn cmd_inspect(config: &Config, arch: &str, mnemonic: &str, json: bool) -> Result<ExitCode, Error> {
    let db = Database::load(&config.paths.db_dir)?;
    let checks = inspect::inspect(&db, arch, mnemonic);

    if checks.is_empty() {
        eprintln!("No instruction named '{mnemonic}' in {arch}");
        return Ok(ExitCode::FAILURE);
    }

    if json {
        match serde_json::to_string_pretty(&checks) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: cannot encode report: {err}");
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        for (n, check) in checks.iter().enumerate() {
            println!("[{}] {check}", n + 1);
        }
    }
    Ok(ExitCode::SUCCESS)
}
