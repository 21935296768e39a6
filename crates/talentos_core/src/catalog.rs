//! crates/talentos_core/src/catalog.rs
//!
//! The in-memory roadmap catalog: one course table and milestone list per
//! career path, with a single lookup-with-default used by every consumer.

use crate::domain::{Roadmap, DEFAULT_CAREER_PATH};
use crate::ports::{PortError, PortResult, RoadmapSource};
use serde::Deserialize;
use tracing::{debug, info};

/// The course tables shipped with the binary.
const BUNDLED_ROADMAPS: &str = include_str!("../data/roadmaps.json");

#[derive(Deserialize)]
struct RoadmapDocument {
    roadmaps: Vec<Roadmap>,
}

/// Immutable catalog keyed by career path. Always holds the default entry.
#[derive(Debug, Clone)]
pub struct RoadmapCatalog {
    roadmaps: Vec<Roadmap>,
    default_index: usize,
}

impl RoadmapCatalog {
    /// Builds a catalog from already-parsed roadmaps.
    ///
    /// Fails when the default career path has no entry, since every lookup
    /// of an unknown key depends on it. Later duplicates of a career path
    /// are shadowed by the first declaration.
    pub fn new(roadmaps: Vec<Roadmap>) -> PortResult<Self> {
        let default_index = roadmaps
            .iter()
            .position(|r| r.career_path == DEFAULT_CAREER_PATH)
            .ok_or(PortError::MissingDefault)?;

        info!("Roadmap catalog ready with {} career paths.", roadmaps.len());
        Ok(Self {
            roadmaps,
            default_index,
        })
    }

    /// Parses a `{"roadmaps": [...]}` document.
    pub fn from_json(json: &str) -> PortResult<Self> {
        let document: RoadmapDocument = serde_json::from_str(json)
            .map_err(|e| PortError::InvalidContent(e.to_string()))?;
        Self::new(document.roadmaps)
    }

    /// The catalog embedded in the crate.
    pub fn bundled() -> PortResult<Self> {
        Self::from_json(BUNDLED_ROADMAPS)
    }

    pub fn default_roadmap(&self) -> &Roadmap {
        &self.roadmaps[self.default_index]
    }
}

impl RoadmapSource for RoadmapCatalog {
    fn roadmap(&self, career_path: &str) -> &Roadmap {
        match self.roadmaps.iter().find(|r| r.career_path == career_path) {
            Some(roadmap) => roadmap,
            None => {
                debug!(
                    "No roadmap for '{}', falling back to '{}'.",
                    career_path, DEFAULT_CAREER_PATH
                );
                self.default_roadmap()
            }
        }
    }

    fn career_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::with_capacity(self.roadmaps.len());
        for roadmap in &self.roadmaps {
            if !paths.contains(&roadmap.career_path.as_str()) {
                paths.push(&roadmap.career_path);
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseStatus, Tier, KNOWN_CAREER_PATHS};

    fn catalog() -> RoadmapCatalog {
        RoadmapCatalog::bundled().expect("bundled roadmaps parse")
    }

    #[test]
    fn bundled_catalog_covers_every_known_career_path() {
        let catalog = catalog();
        for path in KNOWN_CAREER_PATHS {
            assert!(catalog.contains(path), "missing {path}");
            assert_eq!(catalog.roadmap(path).career_path, path);
        }
        assert_eq!(catalog.career_paths().len(), KNOWN_CAREER_PATHS.len());
    }

    #[test]
    fn unknown_career_path_falls_back_to_the_same_default_entry() {
        let catalog = catalog();
        let first = catalog.roadmap("Data Engineer");
        let second = catalog.roadmap("Data Engineer");
        assert_eq!(first.career_path, "Product Manager");
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, catalog.roadmap("")));
        assert!(std::ptr::eq(first, catalog.roadmap("Product Manager")));
    }

    #[test]
    fn bundled_tables_have_three_tiers_and_four_milestones() {
        let catalog = catalog();
        let roadmap = catalog.roadmap("Software Engineer");
        assert_eq!(roadmap.tier(Tier::Beginner).len(), 4);
        assert_eq!(roadmap.tier(Tier::Intermediate).len(), 4);
        assert_eq!(roadmap.tier(Tier::Pro).len(), 3);
        assert_eq!(roadmap.milestones.len(), 4);
        assert_eq!(roadmap.tier(Tier::Beginner)[0].status, CourseStatus::Completed);
        assert_eq!(roadmap.tier(Tier::Beginner)[1].status, CourseStatus::InProgress);
    }

    #[test]
    fn progress_counts_completed_and_in_progress_courses() {
        let progress = catalog().roadmap("QA Engineer").progress();
        assert_eq!(progress.total, 11);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.overall_percent, 9);
    }

    #[test]
    fn other_career_paths_excludes_the_current_one() {
        let catalog = catalog();
        let others = catalog.other_career_paths("QA Engineer");
        assert_eq!(others.len(), 6);
        assert!(!others.contains(&"QA Engineer"));
        assert_eq!(others[0], "Software Engineer");
    }

    #[test]
    fn content_without_the_default_entry_is_rejected() {
        let json = r#"{"roadmaps":[{"career_path":"QA Engineer","courses":{"beginner":[],"intermediate":[],"pro":[]},"milestones":[]}]}"#;
        assert!(matches!(
            RoadmapCatalog::from_json(json),
            Err(PortError::MissingDefault)
        ));
    }

    #[test]
    fn malformed_content_is_rejected() {
        assert!(matches!(
            RoadmapCatalog::from_json("{\"roadmaps\": 3}"),
            Err(PortError::InvalidContent(_))
        ));
    }

    #[test]
    fn minimal_catalog_serves_its_default_for_everything_else() {
        let json = r#"{"roadmaps":[{"career_path":"Product Manager","courses":{"beginner":[],"intermediate":[],"pro":[]},"milestones":[]}]}"#;
        let catalog = RoadmapCatalog::from_json(json).unwrap();
        assert_eq!(catalog.roadmap("Software Engineer").career_path, "Product Manager");
        assert!(catalog.other_career_paths("Product Manager").is_empty());
    }
}
