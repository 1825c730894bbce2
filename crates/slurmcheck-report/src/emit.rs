//! Console report.

use crate::extract::ExtractionOutcome;
use slurmcheck_core::{BucketSet, Stage};
use std::io::{self, Write};

/// Print one labeled section per stage with its ordered ID list.
///
/// The Unknown section only appears when something actually landed there;
/// the seven lifecycle stages are always printed, empty or not.
pub fn print_report<W: Write>(out: &mut W, buckets: &BucketSet) -> io::Result<()> {
    for (stage, ids) in buckets.iter() {
        if stage == Stage::Unknown && ids.is_empty() {
            continue;
        }
        writeln!(out, "{} ----------", stage.label())?;
        writeln!(out, "{ids:?}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print which detail tables were written, if any.
pub fn print_written<W: Write>(out: &mut W, outcome: &ExtractionOutcome) -> io::Result<()> {
    if let Some(path) = &outcome.failed_table {
        writeln!(out, "Saved failed experiment details in: {path}")?;
    }
    if let Some(path) = &outcome.timeout_table {
        writeln!(out, "Saved cancelled experiment details in: {path}")?;
    }
    Ok(())
}
