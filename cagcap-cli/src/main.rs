mod capture;
mod decode;

use std::path::PathBuf;

use anyhow::Result;
use cagcap_host_lib::{load_config, LoggingConfig};
use clap::{Parser, Subcommand};
use tokio_serial::available_ports;

use crate::capture::capture;
use crate::decode::decode;

#[derive(Parser)]
#[command(name = "CagCap")]
#[command(bin_name = "cagcap")]
struct Cli {
    /// error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List the serial ports of the host")]
    Detect,
    Capture(CaptureArgs),
    Decode(DecodeArgs),
}

#[derive(clap::Args)]
#[command(about = "Capture fixes from the GPS receiver until Ctrl-C")]
pub struct CaptureArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured serial port
    #[arg(long)]
    port: Option<String>,
    #[arg(long)]
    baud_rate: Option<u32>,
    /// Also write every fix to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print every decoded sentence as well
    #[arg(long, action)]
    raw: bool,
}

#[derive(clap::Args)]
#[command(about = "Decode a captured NMEA log")]
pub struct DecodeArgs {
    file: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// `--log-level` wins over the config file.
fn logging_config(level: Option<&str>, logging: &LoggingConfig) -> LoggingConfig {
    match level {
        Some(level) => LoggingConfig {
            level: level.into(),
        },
        None => logging.clone(),
    }
}

fn init_logger(level: Option<&str>, logging: &LoggingConfig) -> Result<()> {
    let logging = logging_config(level, logging);
    let _ = env_logger::builder()
        .filter_level(logging.level_filter()?)
        .parse_default_env()
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let log_level = args.log_level.as_deref();

    match args.command {
        Commands::Detect => {
            init_logger(log_level, &LoggingConfig::default())?;
            for port in available_ports()? {
                println!("{} {:?}", port.port_name, port.port_type);
            }
        }
        Commands::Capture(capture_args) => {
            let config = load_config(capture_args.config.as_deref())?;
            init_logger(log_level, &config.logging)?;
            capture(capture_args, config).await?;
        }
        Commands::Decode(decode_args) => {
            let config = load_config(decode_args.config.as_deref())?;
            init_logger(log_level, &config.logging)?;
            decode(decode_args)?;
        }
    }
    Ok(())
}
