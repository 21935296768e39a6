//! services/shell/src/console/protocol.rs
//!
//! Defines the line-delimited JSON protocol between a front-end driver and the shell.
//! Every line on stdin is one `ClientMessage`; every line written to stdout is one
//! `ServerMessage`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use talentos_core::dashboard::{
    AdminOverview, Employee, MentorRating, MentorSession, MentorSessionStats, RosterMentor,
    TeamMember, TeamMetrics,
};
use talentos_core::discovery::{DifficultyFilter, RankedTrack};
use talentos_core::domain::RoadmapProgress;
use talentos_core::mentor::{BookedSession, Mentor, MentorKind};
use talentos_core::staff::StaffRole;
use talentos_core::{Message, NavigationState, Page, Roadmap, UserProfile};

//=========================================================================================
// Messages Sent FROM the Driver TO the Shell
//=========================================================================================

/// Represents the structured commands a driver can send to the shell.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Requests a page change. Unknown page names resolve to the landing page.
    Navigate {
        page: String,
        #[serde(default)]
        career_path: Option<String>,
        #[serde(default)]
        show_loading: bool,
    },

    /// Submits the onboarding form from the landing page.
    Onboard {
        name: String,
        #[serde(default)]
        education: String,
        #[serde(default)]
        experience: String,
        #[serde(default)]
        interests: String,
    },

    SelectCareerPath { career_path: String },

    /// Sends a free-text message to the career assistant.
    Chat { text: String },

    /// Picks one of the options attached to the latest assistant reply.
    ChooseOption { index: usize },

    /// Commits the chat's detected career path and stages the roadmap.
    GenerateRoadmap,

    /// Follows a discovery track through to its roadmap.
    Explore { track_id: String },

    Discover {
        #[serde(default)]
        query: String,
        #[serde(default)]
        difficulty: DifficultyFilter,
    },

    /// Lists the mentor directory, optionally only one kind.
    Mentors {
        #[serde(default)]
        kind: Option<MentorKind>,
    },

    /// Requests a mentoring session. `date` is `YYYY-MM-DD` and must be after today.
    BookMentor {
        mentor_id: String,
        date: NaiveDate,
        slot: String,
    },

    StaffLogin { username: String, password: String },

    /// Opens the dashboard for the signed-in staff role. Admins may narrow the
    /// employee table by name and department; managers search their team by
    /// name or role.
    Dashboard {
        #[serde(default)]
        query: String,
        #[serde(default)]
        department: Option<String>,
    },

    /// The mentor review for one employee on the signed-in staff's roster.
    EmployeeDetail { employee_id: String },

    Logout,

    /// Asks for a snapshot of the navigation state and profile.
    Status,
}

//=========================================================================================
// Messages Sent FROM the Shell TO the Driver
//=========================================================================================

/// Represents the structured events the shell reports back.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The visible page changed, either immediately or after the loading screen.
    PageChanged { page: Page, career_path: String },

    /// One step of the loading interstitial is now being shown.
    LoadingStep { index: usize, text: String },

    /// The loading interstitial finished and the staged page is now visible.
    LoadingComplete { page: Page },

    /// A new transcript entry, along with the chat's current detected path.
    ChatReply {
        message: Message,
        detected_career_path: String,
    },

    /// The roadmap for the active career path.
    Roadmap {
        roadmap: Roadmap,
        progress: RoadmapProgress,
        other_career_paths: Vec<String>,
    },

    /// The ranked and filtered discovery tracks.
    Discovery { tracks: Vec<RankedTrack> },

    Mentors {
        mentors: Vec<Mentor>,
        time_slots: Vec<String>,
    },

    BookingConfirmed { session: BookedSession },

    StaffAuthenticated { role: StaffRole },

    /// Company-wide figures plus the filtered employee table.
    AdminDashboard {
        overview: AdminOverview,
        employees: Vec<Employee>,
        mentors: Vec<RosterMentor>,
    },

    /// The manager's team figures plus the filtered member table.
    ManagerDashboard {
        metrics: TeamMetrics,
        team: Vec<TeamMember>,
        at_risk: Vec<TeamMember>,
    },

    EmployeeDetail {
        employee_id: String,
        name: String,
        role: String,
        progress: u32,
        sessions: Vec<MentorSession>,
        stats: MentorSessionStats,
        mentor_ratings: Vec<MentorRating>,
        low_rated_mentors: Vec<MentorRating>,
    },

    Status {
        state: NavigationState,
        profile: Option<UserProfile>,
        staff_role: Option<StaffRole>,
    },

    /// Reports a rejected or malformed command. The shell keeps running.
    Error { message: String },
}
