//! checkout — run one checkout simulation from the command line.
//!
//! ```text
//! checkout [PARAMS_FILE] [--csv DIR]
//! ```
//!
//! The ten run parameters are read whitespace-separated from `PARAMS_FILE`,
//! or from stdin when no file is given:
//!
//! ```text
//! seed servers self_checkouts max_queue_length customers
//! arrival_rate service_rate resting_rate rest_probability greedy_probability
//! ```
//!
//! The event log and the `[avg served not_served]` summary go to stdout.
//! Diagnostics go to stderr; set `RUST_LOG` to see more than warnings.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ck_core::{CheckoutConfig, SimRandom};
use ck_output::{CsvWriter, OutputObserver, ServerLabels, TextWriter};
use ck_sim::SimBuilder;

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Checkout simulator.
#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// File with the ten run parameters (read from stdin if omitted).
    params: Option<PathBuf>,

    /// Also write events.csv and summary.csv into this directory.
    #[clap(long, value_name = "DIR")]
    csv: Option<PathBuf>,
}

fn read_params(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading parameters from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading parameters from stdin")?;
            Ok(input)
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let config = CheckoutConfig::from_tokens(&read_params(args.params.as_ref())?)
        .context("invalid simulation parameters")?;
    info!("{config:?}");

    let rng = SimRandom::from_config(&config)?;
    let mut sim = SimBuilder::new(config, rng).build()?;
    let labels = ServerLabels::from_floor(&sim.floor);

    let csv = match &args.csv {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };

    let stdout = io::stdout().lock();
    let mut observer = OutputObserver::new((TextWriter::new(stdout), csv), labels);
    sim.run(&mut observer)?;

    if let Some(e) = observer.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("checkout").chain(list.iter().copied()))
    }

    #[test]
    fn no_arguments_means_stdin() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.params.is_none());
        assert!(parsed.csv.is_none());
    }

    #[test]
    fn file_and_csv_directory() {
        let parsed = args(&["--csv", "out", "params.txt"]).unwrap();
        assert_eq!(parsed.params, Some(PathBuf::from("params.txt")));
        assert_eq!(parsed.csv, Some(PathBuf::from("out")));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(args(&["--csv"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn help_is_reported_not_exited() {
        let err = args(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn argument_definitions_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
