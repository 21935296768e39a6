//! services/shell/src/bin/talentos.rs

use shell_lib::{
    adapters::load_catalog,
    config::Config,
    console::{run_console, state::AppState},
    error::AppError,
};
use std::sync::Arc;
use talentos_core::{ChatClassifier, RoadmapSource};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Starting console...");

    // --- 2. Load Roadmap Content ---
    let catalog = load_catalog(config.roadmaps_path.as_deref()).await?;
    info!("Roadmap content covers {} career paths.", catalog.career_paths().len());

    // --- 3. Build the Classifier ---
    let classifier = ChatClassifier::new(config.chat_match_mode)?;
    info!("Chat classifier using {:?} matching.", classifier.mode());

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        roadmaps: Arc::new(catalog),
        classifier: Arc::new(classifier),
    });

    // --- 5. Run Until stdin Closes ---
    let stdin = BufReader::new(tokio::io::stdin());
    run_console(app_state, stdin, tokio::io::stdout()).await?;

    Ok(())
}
