//! slurmcheck - classify a SLURM experiment array's job statuses from logs.

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use slurmcheck_classify::{classify_jobs, Manifest};
use slurmcheck_cli::Args;
use slurmcheck_config::{PathConfig, ResolvedPaths};
use slurmcheck_report::{extract_details, print_report, print_written};
use std::io::Write;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = PathConfig::load(&args.config).into_diagnostic()?;
    let paths = config.resolve();

    let mut stdout = std::io::stdout().lock();
    run(args.job, &paths, &mut stdout)
}

/// One read-classify-report cycle against the configured paths.
fn run<W: Write>(job: u64, paths: &ResolvedPaths, out: &mut W) -> Result<()> {
    let manifest = Manifest::load(&paths.manifest).into_diagnostic()?;
    let buckets = classify_jobs(&manifest, paths, job).into_diagnostic()?;

    print_report(out, &buckets).into_diagnostic()?;

    let outcome = extract_details(
        &buckets,
        &paths.metadata_table,
        &paths.failed_table,
        &paths.timeout_table,
    )
    .into_diagnostic()?;
    print_written(out, &outcome).into_diagnostic()?;

    Ok(())
}
