//! allocplot - charts allocator benchmark results

use allocplot::{check_config, missing_input_message, run};
use allocplot_common::{init_logging, AllocPlotError, LogFormat, LoggingConfig};
use allocplot_config::Config;
use allocplot_graphs::PngWriter;
use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Log line format: pretty or compact
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        level: args.log_level,
        format: args.log_format,
        ..LoggingConfig::default()
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = Config::default();
    check_config(&config)?;
    debug!(config = %serde_json::to_string(&config)?, "using configuration");

    match run(&config, PngWriter::new(config.chart.style.clone())) {
        Ok(_) => {
            println!();
            println!("All plots generated.");
            Ok(())
        }
        Err(AllocPlotError::MissingInput { path }) => {
            println!("{}", missing_input_message(&path));
            std::process::exit(1);
        }
        Err(e) => {
            error!("chart generation failed: {e}");
            Err(e.into())
        }
    }
}
