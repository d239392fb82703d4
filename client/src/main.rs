use clap::Parser;
use client::http::{ReqwestTransport, TokioTimer};
use client::image::media_type_for;
use client::view::{DISEASE_INFO, ResultPanel};
use client::{
    ClientConfig, ConfigError, PredictError, SelectedImage, SubmitOutcome, UploadPredictController,
    check_backend,
};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "lumpy-check", version, about = "Check a cow image for lumpy skin disease", long_about = None)]
struct Cli {
    /// Prediction endpoint (overrides PREDICT_ENDPOINT)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Query the backend status before predicting
    #[arg(long)]
    health: bool,

    /// Image to classify
    #[arg(required_unless_present = "health", value_hint = clap::ValueHint::FilePath)]
    image: Option<PathBuf>,
}

/// Anything that stops a run. `Display` is what gets printed.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Predict(#[from] PredictError),
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Submission did not settle")]
    Unsettled,
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.endpoint {
        Some(endpoint) => ClientConfig::new(endpoint)?,
        None => ClientConfig::from_env()?,
    };
    log::info!("Using prediction endpoint {}", config.endpoint());

    let transport = ReqwestTransport::new();
    let timer = TokioTimer;

    if cli.health {
        let health = check_backend(&config, &transport, &timer).await?;
        println!("{}: {}", health.status, health.message);
        if let Some(path) = &health.model_path {
            println!("model: {}", path);
        }
    }

    let Some(path) = cli.image else {
        return Ok(());
    };

    let bytes = tokio::fs::read(&path).await.map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = media_type_for(&name);

    let mut controller = UploadPredictController::new(config);
    controller.select_image(SelectedImage::new(name, media_type, bytes));

    match controller.submit(&transport, &timer).await {
        SubmitOutcome::Settled(Ok(_)) => {}
        SubmitOutcome::Settled(Err(err)) => return Err(err.into()),
        SubmitOutcome::Busy | SubmitOutcome::Discarded => return Err(CliError::Unsettled),
    }

    if let ResultPanel::Result(view) = ResultPanel::from_controller(&controller) {
        println!("{}", view.label);
        println!("Confidence: {}", view.confidence);
        println!();
        println!("{}", DISEASE_INFO);
        if !view.remediation.is_empty() {
            println!();
            println!("Recommended Actions:");
            for step in view.remediation {
                println!("  - {}", step);
            }
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
