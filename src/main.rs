use anyhow::{Context, Result};
use cfn_pull::aws::client::CfnClient;
use cfn_pull::config::Config;
use cfn_pull::pull;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

/// Pull CloudFormation stack details into a JSON file
#[derive(Parser, Debug)]
#[command(name = "cfn-pull", version, about, long_about = None)]
struct Args {
    /// Output JSON file
    output: PathBuf,

    /// AWS region to query
    #[arg(short, long)]
    region: Option<String>,

    /// Named AWS profile
    #[arg(short, long)]
    profile: Option<String>,

    /// CloudFormation endpoint override
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Append tracing output to the log file next to the config file
fn setup_logging(level: LogLevel) -> Result<Option<WorkerGuard>> {
    let filter = level.filter();
    if filter == LevelFilter::OFF {
        return Ok(None);
    }

    let log_path = Config::log_path().context("No config directory for the log file")?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("Logging to {} at {:?}", log_path.display(), level);
    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let path = pull::resolve_output_path(&args.output, &cwd);

    let config = Config::load();
    let options = config.client_options(args.region, args.profile, args.endpoint_url);
    tracing::info!("Using client options: {:?}", options);

    let client = CfnClient::new(&options).await;

    println!("Loading stacks.. This will take some time.. Standby..");
    let records = pull::collect_records(&client)
        .await
        .context("Failed to pull CloudFormation stacks")?;

    println!("Writing file '{}'", path.display());
    pull::write_report(&path, &records)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("'{}' written!", path.display());

    Ok(())
}
