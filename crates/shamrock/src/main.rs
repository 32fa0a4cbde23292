//! Command-line secret reconstruction.
//!
//! Reads a share document, prints the reconstructed value and, unless
//! `--no-verify` is given, the outcome of cross-validating the Lagrange and
//! Vandermonde paths. Exits with an error when reconstruction fails or the
//! verification finds a discrepancy.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use shamrock_integers::{DecodeMode, Integer};
use shamrock_interp::VerificationReport;
use shamrock_shares::{reconstruct, subsets_agree, ReconstructConfig, ShareDocument};
use tracing::{info, span, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Share document to read.
    #[arg(short, long, default_value = "input.json")]
    input: PathBuf,

    /// Skip non-digit characters in share values instead of rejecting them.
    #[arg(long)]
    lenient: bool,

    /// Use this threshold instead of the document's `k`.
    #[arg(short = 'k', long)]
    threshold: Option<usize>,

    /// Abscissa to evaluate at.
    #[arg(long = "at", default_value = "0", value_parser = parse_integer, allow_hyphen_values = true)]
    target: Integer,

    /// Abscissae where both algorithms must agree (repeatable).
    #[arg(long = "check", value_parser = parse_integer, allow_hyphen_values = true)]
    check_points: Vec<Integer>,

    /// Only run the Lagrange evaluation.
    #[arg(long)]
    no_verify: bool,

    /// Print the recovered polynomial.
    #[arg(long)]
    coefficients: bool,

    /// Also check that every k-subset of the shares agrees, up to this many subsets.
    #[arg(long, value_name = "LIMIT")]
    all_subsets: Option<u128>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ReconstructConfig {
        let defaults = ReconstructConfig::default();
        ReconstructConfig {
            decode_mode: if self.lenient {
                DecodeMode::Lenient
            } else {
                DecodeMode::Strict
            },
            threshold_override: self.threshold,
            target: self.target.clone(),
            check_points: if self.check_points.is_empty() {
                defaults.check_points
            } else {
                self.check_points.clone()
            },
            verify: !self.no_verify,
        }
    }
}

fn parse_integer(s: &str) -> Result<Integer, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("{s:?} is not a decimal integer"))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

fn print_report(report: &VerificationReport) {
    for m in &report.mismatches {
        println!("MISMATCH ({}) at x={}: got {}, expected {}", m.method, m.x, m.actual, m.expected);
    }
    for c in &report.cross_checks {
        let verdict = if c.agrees() { "match" } else { "MISMATCH" };
        println!(
            "P({}) via lagrange = {}; via coefficients = {}: {verdict}",
            c.t, c.lagrange, c.coefficients
        );
    }
    if report.mismatches.is_empty() {
        println!("all {} point reproductions exact", report.points_checked);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let span = span!(Level::INFO, "shamrock");
    let _enter = span.entered();

    let config = cli.config();
    let document = ShareDocument::from_path(&cli.input)
        .with_context(|| format!("loading shares from {}", cli.input.display()))?;
    info!(shares = document.shares.len(), k = config.threshold(document.k), "loaded");

    let result = reconstruct(&document, &config).context("reconstruction failed")?;

    let xs: Vec<String> = result.selected.iter().map(|p| p.x.to_string()).collect();
    println!("selected x: {}", xs.join(", "));
    println!("P({}) = {}", result.target, result.value);

    if let Some(coefficients) = result.coefficients.as_ref().filter(|_| cli.coefficients) {
        println!("P(x) = {coefficients}");
    }
    if let Some(report) = &result.report {
        print_report(report);
    }

    let mut consistent = result.is_consistent();
    if let Some(limit) = cli.all_subsets {
        let points = document.points(config.decode_mode)?;
        let agreement = subsets_agree(&points, result.selected.len(), &config.target, limit)?;
        for (value, count) in &agreement.values {
            println!("{count} of {} subsets give {value}", agreement.subsets);
        }
        consistent &= agreement.agrees();
    }

    if !consistent {
        bail!("verification found inconsistencies");
    }
    Ok(())
}
