//! crates/talentos_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! Everything here is in-memory session data or static roadmap content;
//! nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//=========================================================================================
// Career Path Vocabulary
//=========================================================================================

pub const SOFTWARE_ENGINEER: &str = "Software Engineer";
pub const PRODUCT_MANAGER: &str = "Product Manager";
pub const QA_ENGINEER: &str = "QA Engineer";
pub const AI_ML_ENGINEER: &str = "AI/ML Engineer";
pub const GEMINI_AI_DEVELOPER: &str = "Gemini AI Developer";
pub const AI_ASSISTED_DEVELOPER: &str = "AI-Assisted Developer";
pub const CLOUD_RUN_DEVELOPER: &str = "Cloud Run & Serverless Developer";

/// The career path a fresh session starts on, and the entry every
/// course/milestone lookup falls back to.
pub const DEFAULT_CAREER_PATH: &str = PRODUCT_MANAGER;

/// Every canonical career path, in declaration order.
pub const KNOWN_CAREER_PATHS: [&str; 7] = [
    SOFTWARE_ENGINEER,
    PRODUCT_MANAGER,
    QA_ENGINEER,
    AI_ML_ENGINEER,
    GEMINI_AI_DEVELOPER,
    AI_ASSISTED_DEVELOPER,
    CLOUD_RUN_DEVELOPER,
];

pub fn is_known_career_path(career_path: &str) -> bool {
    KNOWN_CAREER_PATHS.contains(&career_path)
}

//=========================================================================================
// Pages
//=========================================================================================

/// The closed routing vocabulary of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Landing,
    Discovery,
    Chat,
    Roadmap,
    Mentor,
    Admin,
    Loading,
    EmployeeDashboard,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Landing,
        Page::Discovery,
        Page::Chat,
        Page::Roadmap,
        Page::Mentor,
        Page::Admin,
        Page::Loading,
        Page::EmployeeDashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Discovery => "discovery",
            Page::Chat => "chat",
            Page::Roadmap => "roadmap",
            Page::Mentor => "mentor",
            Page::Admin => "admin",
            Page::Loading => "loading",
            Page::EmployeeDashboard => "employee-dashboard",
        }
    }

    /// Lenient parse used by hosting shells: anything unrecognized renders
    /// the landing page.
    pub fn resolve(name: &str) -> Page {
        name.parse().unwrap_or(Page::Landing)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

//=========================================================================================
// User Profile
//=========================================================================================

/// The raw onboarding form as the visitor typed it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub name: String,
    pub education: String,
    pub experience: String,
    /// Comma separated free text.
    pub interests: String,
}

/// Represents the visitor - owned by the session controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: Option<String>,
    pub education: String,
    pub experience: String,
    pub interests: Vec<String>,
    pub career_goal: Option<String>,
    pub selected_career_path: Option<String>,
}

impl UserProfile {
    pub fn from_onboarding(form: &OnboardingForm) -> Self {
        let interests = form
            .interests
            .split(',')
            .map(|interest| interest.trim().to_string())
            .collect();

        Self {
            name: form.name.clone(),
            email: None,
            education: form.education.clone(),
            experience: form.experience.clone(),
            interests,
            career_goal: None,
            selected_career_path: None,
        }
    }
}

//=========================================================================================
// Navigation
//=========================================================================================

/// A transition parked behind the loading interstitial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNavigation {
    pub page: Page,
    pub career_path: Option<String>,
}

/// `pending_navigation` is `Some` exactly when `current_page` is `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_page: Page,
    pub selected_career_path: String,
    pub pending_navigation: Option<PendingNavigation>,
}

impl NavigationState {
    /// True when the staging invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.pending_navigation.is_some() == (self.current_page == Page::Loading)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_page: Page::Landing,
            selected_career_path: DEFAULT_CAREER_PATH.to_string(),
            pending_navigation: None,
        }
    }
}

//=========================================================================================
// Chat
//=========================================================================================

/// A selectable suggestion attached to an assistant reply. `track` is the
/// career path used for roadmap lookup and may differ from the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerOption {
    pub title: String,
    pub description: String,
    pub track: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message. Never mutated once appended to a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub career_options: Option<Vec<CareerOption>>,
}

impl Message {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
            career_options: None,
        }
    }

    pub fn with_options(mut self, options: Vec<CareerOption>) -> Self {
        self.career_options = Some(options);
        self
    }
}

//=========================================================================================
// Roadmap Content
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    Completed,
    InProgress,
    Available,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResources {
    pub videos: u32,
    pub articles: u32,
    pub projects: u32,
    pub quizzes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub status: CourseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<CourseResources>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Intermediate,
    Pro,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPathCourses {
    pub beginner: Vec<Course>,
    pub intermediate: Vec<Course>,
    pub pro: Vec<Course>,
}

/// The full learning roadmap filed under one career path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub career_path: String,
    pub courses: CareerPathCourses,
    pub milestones: Vec<Milestone>,
}

/// Aggregate counters shown in the roadmap header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapProgress {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overall_percent: u8,
}

impl Roadmap {
    pub fn tier(&self, tier: Tier) -> &[Course] {
        match tier {
            Tier::Beginner => &self.courses.beginner,
            Tier::Intermediate => &self.courses.intermediate,
            Tier::Pro => &self.courses.pro,
        }
    }

    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses
            .beginner
            .iter()
            .chain(&self.courses.intermediate)
            .chain(&self.courses.pro)
    }

    pub fn progress(&self) -> RoadmapProgress {
        let total = self.all_courses().count();
        let completed = self
            .all_courses()
            .filter(|c| c.status == CourseStatus::Completed)
            .count();
        let in_progress = self
            .all_courses()
            .filter(|c| c.status == CourseStatus::InProgress)
            .count();
        let overall_percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        RoadmapProgress {
            total,
            completed,
            in_progress,
            overall_percent,
        }
    }
}
