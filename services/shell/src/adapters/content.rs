//! services/shell/src/adapters/content.rs
//!
//! Provisions the roadmap catalog, the concrete `RoadmapSource` for the shell.
//! Content comes from a JSON file when one is configured, otherwise from the
//! tables bundled into the core crate.

use crate::error::AppError;
use std::path::Path;
use talentos_core::RoadmapCatalog;
use tracing::info;

/// Loads the catalog from `path`, or the bundled tables when `path` is `None`.
pub async fn load_catalog(path: Option<&Path>) -> Result<RoadmapCatalog, AppError> {
    let catalog = match path {
        Some(path) => {
            info!("Loading roadmap content from {}", path.display());
            let json = tokio::fs::read_to_string(path).await?;
            RoadmapCatalog::from_json(&json)?
        }
        None => {
            info!("Using the bundled roadmap content.");
            RoadmapCatalog::bundled()?
        }
    };
    Ok(catalog)
}
