use anyhow::Result;
use clap::Parser;
use readability_stats::{logger, App, Config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "readability-stats")]
#[command(about = "Readability and structural statistics for a folder of documents", version)]
struct Cli {
    /// Folder containing the documents
    folder: Option<PathBuf>,

    /// Destination CSV file
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip and log documents that fail instead of aborting
    #[arg(long)]
    skip_failed: bool,

    /// Keep filesystem order instead of sorting document names
    #[arg(long)]
    no_sort: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };
        let mut config = base.with_env_overrides()?;

        if let Some(folder) = self.folder {
            config.folder_path = folder.to_string_lossy().to_string();
        }
        if let Some(output) = self.output {
            config.output_csv_path = output.to_string_lossy().to_string();
        }
        config.skip_failed_documents |= self.skip_failed;
        config.sort_documents &= !self.no_sort;
        config.verbose_logging |= self.verbose;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Cli::parse().into_config()?;

    // Initialise logging
    logger::init(config.verbose_logging);

    // Initialise and run the application
    let report = App::initialize(config)?.run().await?;

    if !report.failures.is_empty() {
        tracing::warn!(
            "{} of {} documents were skipped",
            report.failures.len(),
            report.total
        );
    }

    Ok(())
}
