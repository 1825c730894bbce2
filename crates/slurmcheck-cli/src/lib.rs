//! CLI argument parsing for slurmcheck.

use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "slurmcheck")]
#[command(about = "Check the status of a SLURM experiment array from its logs")]
pub struct Args {
    /// SLURM job ID of the experiment array
    #[arg(
        short = 'j',
        long,
        value_name = "INT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub job: u64,

    /// Absolute path to the path config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Utf8PathBuf,
}
