//! Entry point wiring the CLI to the summarization pipeline.

use std::process::ExitCode;

use briefly::{cli, logging, Cli, Settings};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();

    if let Err(e) = logging::init_tracing(&settings.log_path(), cli.verbose) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    info!("starting run");
    match cli::run(&cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
