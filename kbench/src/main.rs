use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use kbench::batch::BatchRunner;
use kbench::config::BenchConfig;
use kbench::io;
use kbench::io::cli::Cli;
use kbench::optimal::OptimalValueTable;
use kbench::report;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BenchConfig::default()
        }
        Some(config_file) => {
            io::read_json::<BenchConfig>(&config_file).context("incorrect config file format")?
        }
    };
    info!("[MAIN] Successfully parsed BenchConfig: {config:?}");

    let optimal_values = match args.optimal_table {
        None => {
            warn!(
                "[MAIN] No optimal value table provided, using the Pisinger large scale instances. Use --optimal-table to provide a custom table"
            );
            OptimalValueTable::pisinger_large_scale()
        }
        Some(table_file) => io::read_json::<OptimalValueTable>(&table_file)
            .context("incorrect optimal value table format")?,
    };
    info!("[MAIN] {} known optimal values", optimal_values.len());

    let runner = BatchRunner::new(config, optimal_values);
    let results = runner
        .run(&args.instance_dir)
        .with_context(|| format!("could not process {}", args.instance_dir.display()))?;

    print!("{}", report::render_table(&results));
    if config.summary && !results.is_empty() {
        println!();
        print!("{}", report::render_summary(&report::summarize(&results)));
    }

    Ok(())
}
