use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nlp_hub::cli::{smoke_report, Cli, Command, DeviceArgs};
use nlp_hub::{server, Analyzer};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

async fn load_analyzer(device: &DeviceArgs) -> anyhow::Result<Arc<Analyzer>> {
    let request = device.request();
    info!(device = %request, "loading models");

    let analyzer = tokio::task::spawn_blocking(move || Analyzer::builder().device(request).build())
        .await
        .context("model loading task failed")?
        .context("failed to load models")?;

    info!("models ready");
    Ok(Arc::new(analyzer))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let analyzer = load_analyzer(&args.device).await?;
            let addr = args.addr();
            server::serve(analyzer, addr)
                .await
                .with_context(|| format!("server on {addr} failed"))?;
        }
        Command::Smoke(device) => {
            let analyzer = load_analyzer(&device).await?;
            let report = tokio::task::spawn_blocking(move || smoke_report(&analyzer))
                .await
                .context("smoke test task failed")?
                .context("smoke test failed")?;
            print!("{report}");
        }
    }

    Ok(())
}
