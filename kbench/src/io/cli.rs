use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory containing the instance files (not searched recursively)
    #[arg(short, long, value_name = "DIR")]
    pub instance_dir: PathBuf,
    /// JSON object mapping instance file names to their optimal value.
    /// If omitted, the optimal values of the Pisinger large scale instances are used
    #[arg(short = 't', long, value_name = "FILE")]
    pub optimal_table: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
