//! crates/talentos_core/src/discovery.rs
//!
//! The career discovery catalogue: broad tracks a visitor can browse,
//! ranked by their declared interests and filtered by search text and
//! difficulty.

use crate::domain::{AI_ML_ENGINEER, PRODUCT_MANAGER, SOFTWARE_ENGINEER};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyFilter {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyFilter {
    fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Beginner => difficulty == Difficulty::Beginner,
            DifficultyFilter::Intermediate => difficulty == Difficulty::Intermediate,
            DifficultyFilter::Advanced => difficulty == Difficulty::Advanced,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryTrack {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub time_to_learn: &'static str,
    pub difficulty: Difficulty,
}

/// A track together with its interest score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTrack {
    #[serde(flatten)]
    pub track: DiscoveryTrack,
    pub relevance: u8,
}

pub static DISCOVERY_TRACKS: &[DiscoveryTrack] = &[
    DiscoveryTrack {
        id: "product",
        title: "Product Management",
        description: "Lead product strategy, define roadmaps, and drive product success",
        skills: &["Strategy", "User Research", "Analytics", "Communication"],
        time_to_learn: "6-9 months",
        difficulty: Difficulty::Intermediate,
    },
    DiscoveryTrack {
        id: "engineering",
        title: "Software Engineer",
        description: "Build scalable applications and systems with modern technologies",
        skills: &["Programming", "System Design", "Algorithms", "DevOps"],
        time_to_learn: "8-12 months",
        difficulty: Difficulty::Advanced,
    },
    DiscoveryTrack {
        id: "design",
        title: "Product Design",
        description: "Create beautiful, user-centered experiences and interfaces",
        skills: &["UI/UX", "Prototyping", "User Research", "Design Systems"],
        time_to_learn: "6-8 months",
        difficulty: Difficulty::Intermediate,
    },
    DiscoveryTrack {
        id: "data",
        title: "Data Science",
        description: "Analyze data, build ML models, and drive data-driven decisions",
        skills: &["Python", "Statistics", "Machine Learning", "SQL"],
        time_to_learn: "10-14 months",
        difficulty: Difficulty::Advanced,
    },
    DiscoveryTrack {
        id: "consulting",
        title: "Strategy Consulting",
        description: "Solve complex business problems and drive organizational growth",
        skills: &["Problem Solving", "Business Strategy", "Analysis", "Communication"],
        time_to_learn: "6-9 months",
        difficulty: Difficulty::Intermediate,
    },
    DiscoveryTrack {
        id: "hr",
        title: "Human Resources",
        description: "Build great teams, culture, and employee experiences",
        skills: &["People Management", "Recruiting", "Culture Building", "Analytics"],
        time_to_learn: "5-7 months",
        difficulty: Difficulty::Beginner,
    },
];

const RELEVANT: u8 = 10;

fn relevance(track_id: &str, interests: &str) -> u8 {
    let keywords: &[&str] = match track_id {
        "engineering" => &["code", "coding", "programming", "software", "development", "engineer"],
        "design" => &["design", "ui", "ux", "figma"],
        "product" => &["product", "management", "strategy"],
        "data" => &["data", "analytics", "ml", "machine learning"],
        _ => &[],
    };
    if keywords.iter().any(|kw| interests.contains(kw)) {
        RELEVANT
    } else {
        0
    }
}

/// Ranks every track by interest relevance. Ties keep catalogue order.
pub fn prioritize(interests: &[String]) -> Vec<RankedTrack> {
    let joined = interests
        .iter()
        .map(|i| i.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut ranked: Vec<RankedTrack> = DISCOVERY_TRACKS
        .iter()
        .map(|track| RankedTrack {
            track: track.clone(),
            relevance: relevance(track.id, &joined),
        })
        .collect();
    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked
}

/// Keeps tracks whose title or description contains `query`
/// (case-insensitive) and whose difficulty passes the filter.
pub fn filter(tracks: Vec<RankedTrack>, query: &str, difficulty: DifficultyFilter) -> Vec<RankedTrack> {
    let query = query.to_lowercase();
    tracks
        .into_iter()
        .filter(|ranked| {
            let t = &ranked.track;
            (t.title.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query))
                && difficulty.accepts(t.difficulty)
        })
        .collect()
}

/// The career path whose roadmap backs a discovery track. Several tracks
/// share the Product Manager tables; unknown ids do too.
pub fn career_path_for_track(track_id: &str) -> &'static str {
    match track_id {
        "product" => PRODUCT_MANAGER,
        "engineering" => SOFTWARE_ENGINEER,
        "design" => PRODUCT_MANAGER,
        "data" => AI_ML_ENGINEER,
        "consulting" => PRODUCT_MANAGER,
        "hr" => PRODUCT_MANAGER,
        _ => PRODUCT_MANAGER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tracks: &[RankedTrack]) -> Vec<&str> {
        tracks.iter().map(|t| t.track.id).collect()
    }

    #[test]
    fn no_interests_keeps_catalogue_order() {
        let ranked = prioritize(&[]);
        assert_eq!(ids(&ranked), ["product", "engineering", "design", "data", "consulting", "hr"]);
        assert!(ranked.iter().all(|t| t.relevance == 0));
    }

    #[test]
    fn matching_interests_float_to_the_top() {
        let ranked = prioritize(&["Figma".to_string(), "Analytics".to_string()]);
        assert_eq!(ids(&ranked), ["design", "data", "product", "engineering", "consulting", "hr"]);
        assert_eq!(ranked[0].relevance, 10);
        assert_eq!(ranked[2].relevance, 0);
    }

    #[test]
    fn filter_combines_query_and_difficulty() {
        let all = prioritize(&[]);
        let advanced = filter(all.clone(), "", DifficultyFilter::Advanced);
        assert_eq!(ids(&advanced), ["engineering", "data"]);

        let strategy = filter(all.clone(), "STRATEGY", DifficultyFilter::All);
        assert_eq!(ids(&strategy), ["product", "consulting"]);

        assert!(filter(all, "strategy", DifficultyFilter::Beginner).is_empty());
    }

    #[test]
    fn tracks_map_onto_roadmap_career_paths() {
        assert_eq!(career_path_for_track("engineering"), "Software Engineer");
        assert_eq!(career_path_for_track("data"), "AI/ML Engineer");
        assert_eq!(career_path_for_track("design"), "Product Manager");
        assert_eq!(career_path_for_track("unknown"), "Product Manager");
    }
}
