use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use f5_bigip_ltm_connector::{
    get_subscriber, init_subscriber, run, ActionRequest, AssetConfig, F5BigipLtmConnector,
    LocalHost, Metrics, RunnerConfig,
};
use std::{path::PathBuf, process::ExitCode};

/// Runs one F5 BIG-IP LTM connector action described by a request file.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// JSON file with `identifier`, `parameters` and optionally `config`
    input: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let cli = Cli::parse();
    let configuration = RunnerConfig::load()?;

    let subscriber = get_subscriber(
        "f5-bigip-ltm-connector".into(),
        configuration.log_level().into(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    tracing::info!(
        "Starting connector with configuration: {}{:#?}{}",
        "\n",
        &configuration,
        "\n"
    );

    let contents = std::fs::read(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let request: ActionRequest = serde_json::from_slice(&contents)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;

    let fallback = match &request.config {
        Some(_) => None,
        None => Some(AssetConfig::load()?),
    };

    let metrics = Metrics::new();
    let mut host = LocalHost::new(configuration.state_path());
    let report = run::<F5BigipLtmConnector, _>(request, fallback, &mut host, &metrics).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(rendered) = metrics.render() {
        tracing::info!("Metrics:\n{}", rendered);
    }

    Ok(if report.status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
