//! crates/talentos_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The roadmap content is provisioned behind `RoadmapSource` so the session
//! logic never depends on where the course tables come from.

use crate::domain::Roadmap;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
///
/// Navigation and classification never produce one of these; they are total.
/// Errors only come from loading content or validating demo inputs.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid roadmap content: {0}")]
    InvalidContent(String),
    #[error("Roadmap content has no entry for the default career path 'Product Manager'")]
    MissingDefault,
    #[error("{0}")]
    Unauthorized(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Provides the immutable course/milestone table for each career path.
///
/// Implementations key their content by the canonical career path strings and
/// must always hold a `DEFAULT_CAREER_PATH` entry.
pub trait RoadmapSource: Send + Sync {
    /// Returns the roadmap for `career_path`, or the default entry when the
    /// key is unknown. Never fails.
    fn roadmap(&self, career_path: &str) -> &Roadmap;

    /// Every career path with content, in declaration order.
    fn career_paths(&self) -> Vec<&str>;

    fn contains(&self, career_path: &str) -> bool {
        self.career_paths().contains(&career_path)
    }

    /// The paths offered in the roadmap's "explore other careers" tab.
    fn other_career_paths(&self, current: &str) -> Vec<&str> {
        self.career_paths()
            .into_iter()
            .filter(|path| *path != current)
            .collect()
    }
}
