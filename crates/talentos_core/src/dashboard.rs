//! crates/talentos_core/src/dashboard.rs
//!
//! Read-only views behind the staff login: the company-wide admin overview,
//! the manager's team view and the mentor review attached to an employee.
//! All figures are computed from the mock rosters below.

use serde::Serialize;
use std::collections::HashSet;

//=========================================================================================
// Rosters
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub team: &'static str,
    pub role: &'static str,
    pub courses_completed: u32,
    pub courses_in_progress: u32,
    pub skill_level: &'static str,
    pub progress: u32,
    pub streak: u32,
    pub badges: u32,
    /// Relative, e.g. "2 hours ago".
    pub last_active: &'static str,
    pub learning_hours: u32,
    pub enrollment_date: &'static str,
}

/// A direct report, scored by their manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub courses_completed: u32,
    pub courses_in_progress: u32,
    pub skill_level: &'static str,
    pub progress: u32,
    pub streak: u32,
    pub badges: u32,
    pub last_active: &'static str,
    pub learning_hours: u32,
    pub enrollment_date: &'static str,
    pub performance_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    Offline,
}

/// A mentor as listed on the admin overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterMentor {
    pub id: &'static str,
    pub name: &'static str,
    pub expertise: &'static str,
    pub sessions: u32,
    pub rating: f32,
    pub availability: Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Completed,
    Scheduled,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentorSession {
    pub id: &'static str,
    pub mentor_id: &'static str,
    pub mentor_name: &'static str,
    pub mentor_expertise: &'static str,
    pub session_date: &'static str,
    pub duration_minutes: u32,
    pub topic: &'static str,
    pub status: SessionStatus,
    /// 1 to 5 stars. Only completed sessions are rated.
    pub rating: Option<u8>,
}

macro_rules! employee {
    ($id:expr, $name:expr, $dept:expr, $team:expr, $role:expr, $done:expr, $doing:expr, $level:expr,
     $progress:expr, $streak:expr, $badges:expr, $active:expr, $hours:expr, $enrolled:expr) => {
        Employee {
            id: $id,
            name: $name,
            department: $dept,
            team: $team,
            role: $role,
            courses_completed: $done,
            courses_in_progress: $doing,
            skill_level: $level,
            progress: $progress,
            streak: $streak,
            badges: $badges,
            last_active: $active,
            learning_hours: $hours,
            enrollment_date: $enrolled,
        }
    };
}

pub static EMPLOYEES: &[Employee] = &[
    employee!("1", "Alex Rivera", "Engineering", "Backend", "Software Engineer", 8, 2, "Advanced", 75, 12, 5, "2 hours ago", 45, "2024-01-15"),
    employee!("2", "Samantha Kim", "Product", "Core Product", "Product Manager", 12, 1, "Pro", 90, 20, 8, "1 hour ago", 68, "2024-01-10"),
    employee!("3", "Jordan Chen", "Design", "UX Research", "UX Designer", 6, 3, "Intermediate", 60, 7, 4, "5 hours ago", 32, "2024-02-01"),
    employee!("4", "Taylor Brown", "Engineering", "DevOps", "DevOps Engineer", 5, 2, "Intermediate", 55, 5, 3, "3 hours ago", 28, "2024-02-15"),
    employee!("5", "Morgan Lee", "Product", "Growth", "Product Designer", 10, 1, "Advanced", 85, 15, 6, "30 min ago", 52, "2024-01-20"),
    employee!("6", "Casey Martinez", "Engineering", "Frontend", "Frontend Developer", 7, 2, "Advanced", 70, 9, 4, "4 hours ago", 38, "2024-02-05"),
    employee!("7", "Riley Thompson", "Engineering", "QA", "QA Engineer", 4, 1, "Beginner", 40, 3, 2, "1 day ago", 18, "2024-03-01"),
    employee!("8", "Drew Wilson", "Product", "Analytics", "Data Analyst", 9, 2, "Advanced", 80, 14, 5, "2 hours ago", 48, "2024-01-25"),
];

pub static MENTOR_ROSTER: &[RosterMentor] = &[
    RosterMentor { id: "1", name: "Dr. Sarah Johnson", expertise: "AI/ML Engineering", sessions: 24, rating: 4.9, availability: Availability::Available },
    RosterMentor { id: "2", name: "Michael Chen", expertise: "Product Management", sessions: 31, rating: 4.8, availability: Availability::Busy },
    RosterMentor { id: "3", name: "Emily Rodriguez", expertise: "Cloud Architecture", sessions: 18, rating: 4.7, availability: Availability::Available },
    RosterMentor { id: "4", name: "David Kim", expertise: "Full Stack Development", sessions: 27, rating: 4.9, availability: Availability::Available },
    RosterMentor { id: "5", name: "Lisa Wang", expertise: "UX Design", sessions: 22, rating: 4.6, availability: Availability::Offline },
];

macro_rules! member {
    ($id:expr, $name:expr, $role:expr, $done:expr, $doing:expr, $level:expr, $progress:expr,
     $streak:expr, $badges:expr, $active:expr, $hours:expr, $enrolled:expr, $score:expr) => {
        TeamMember {
            id: $id,
            name: $name,
            role: $role,
            courses_completed: $done,
            courses_in_progress: $doing,
            skill_level: $level,
            progress: $progress,
            streak: $streak,
            badges: $badges,
            last_active: $active,
            learning_hours: $hours,
            enrollment_date: $enrolled,
            performance_score: $score,
        }
    };
}

/// The manager's direct reports.
pub static TEAM: &[TeamMember] = &[
    member!("1", "Alex Rivera", "Software Engineer", 8, 2, "Pro", 75, 12, 6, "2 hours ago", 42, "2024-01-15", 92),
    member!("2", "Jordan Lee", "Junior Developer", 5, 3, "Intermediate", 60, 8, 4, "5 hours ago", 28, "2024-02-10", 85),
    member!("3", "Morgan Chen", "Software Engineer", 12, 1, "Pro", 88, 20, 9, "1 hour ago", 56, "2023-11-05", 95),
    member!("4", "Taylor Kim", "QA Engineer", 4, 2, "Intermediate", 45, 5, 3, "1 day ago", 22, "2024-03-01", 78),
    member!("5", "Casey Park", "Software Engineer", 3, 1, "Beginner", 30, 2, 2, "3 days ago", 15, "2024-04-20", 68),
];

macro_rules! session {
    ($id:expr, $mentor_id:expr, $mentor:expr, $expertise:expr, $date:expr, $minutes:expr, $topic:expr,
     $status:ident, $rating:expr) => {
        MentorSession {
            id: $id,
            mentor_id: $mentor_id,
            mentor_name: $mentor,
            mentor_expertise: $expertise,
            session_date: $date,
            duration_minutes: $minutes,
            topic: $topic,
            status: SessionStatus::$status,
            rating: $rating,
        }
    };
}

/// The mentoring history shown on every employee's detail page, newest first.
pub static MENTOR_SESSIONS: &[MentorSession] = &[
    session!("10", "M4", "David Kim", "Full Stack Development", "2024-06-20", 60, "Backend Architecture Review", Scheduled, None),
    session!("11", "M1", "Dr. Sarah Johnson", "AI/ML Engineering", "2024-06-25", 60, "LLM Applications", Scheduled, None),
    session!("1", "M1", "Dr. Sarah Johnson", "AI/ML Engineering", "2024-06-01", 60, "Machine Learning Best Practices", Completed, Some(5)),
    session!("2", "M2", "Michael Chen", "Product Management", "2024-05-28", 45, "Career Transition Advice", Completed, Some(4)),
    session!("3", "M1", "Dr. Sarah Johnson", "AI/ML Engineering", "2024-05-20", 60, "Neural Networks Deep Dive", Completed, Some(5)),
    session!("8", "M5", "Lisa Wang", "UX Design", "2024-05-12", 60, "Design System Principles", Completed, Some(2)),
    session!("4", "M3", "Emily Rodriguez", "Cloud Architecture", "2024-05-08", 60, "AWS Infrastructure Design", Completed, Some(4)),
    session!("5", "M4", "David Kim", "Full Stack Development", "2024-04-25", 90, "React Advanced Patterns", Completed, Some(5)),
    session!("6", "M2", "Michael Chen", "Product Management", "2024-04-18", 45, "Technical Leadership", Completed, Some(3)),
    session!("7", "M1", "Dr. Sarah Johnson", "AI/ML Engineering", "2024-04-10", 60, "AI Ethics & Bias", Completed, Some(5)),
    session!("9", "M3", "Emily Rodriguez", "Cloud Architecture", "2024-03-28", 60, "Kubernetes Troubleshooting", Completed, Some(4)),
];

/// Mentors averaging below this are flagged for review.
pub const LOW_RATING_THRESHOLD: f64 = 3.5;

/// Anyone seen within this many hours counts as active this month.
const ACTIVE_WINDOW_HOURS: u32 = 720;

fn rounded_mean(values: impl ExactSizeIterator<Item = u32>) -> u32 {
    let count = values.len();
    if count == 0 {
        return 0;
    }
    (values.sum::<u32>() as f64 / count as f64).round() as u32
}

/// Hours since a relative timestamp such as "30 min ago" or "3 days ago".
/// Anything under an hour counts as zero; unreadable text yields `None`.
pub fn hours_since(last_active: &str) -> Option<u32> {
    let mut parts = last_active.split_whitespace();
    let amount: u32 = parts.next()?.parse().ok()?;
    let unit = parts.next()?;
    let hours = if unit.starts_with("min") {
        0
    } else if unit.starts_with("hour") {
        amount
    } else if unit.starts_with("day") {
        amount * 24
    } else if unit.starts_with("week") {
        amount * 24 * 7
    } else {
        return None;
    };
    Some(hours)
}

//=========================================================================================
// Admin Overview
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub total_employees: usize,
    pub avg_progress: u32,
    pub total_courses_completed: u32,
    pub active_users_last_month: usize,
    /// Mentors that are not offline.
    pub active_mentors: usize,
}

/// Company-wide figures. They always cover the whole roster, whatever the
/// table filter.
pub fn admin_overview(employees: &[Employee], mentors: &[RosterMentor]) -> AdminOverview {
    AdminOverview {
        total_employees: employees.len(),
        avg_progress: rounded_mean(employees.iter().map(|e| e.progress)),
        total_courses_completed: employees.iter().map(|e| e.courses_completed).sum(),
        active_users_last_month: employees
            .iter()
            .filter(|e| hours_since(e.last_active).is_some_and(|h| h < ACTIVE_WINDOW_HOURS))
            .count(),
        active_mentors: mentors
            .iter()
            .filter(|m| m.availability != Availability::Offline)
            .count(),
    }
}

/// Case-insensitive name search, optionally narrowed to one department.
/// `None` or "all" keeps every department.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    query: &str,
    department: Option<&str>,
) -> Vec<&'a Employee> {
    let query = query.to_lowercase();
    employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&query))
        .filter(|e| match department {
            None | Some("all") => true,
            Some(dept) => e.department == dept,
        })
        .collect()
}

//=========================================================================================
// Manager View
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMetrics {
    pub total_members: usize,
    pub avg_progress: u32,
    pub total_courses_completed: u32,
    pub avg_performance_score: u32,
    /// Members last seen within the day.
    pub active_members: usize,
    pub at_risk_members: usize,
}

impl TeamMember {
    /// Behind on learning or underperforming.
    pub fn is_at_risk(&self) -> bool {
        self.progress < 50 || self.performance_score < 75
    }
}

pub fn team_metrics(team: &[TeamMember]) -> TeamMetrics {
    TeamMetrics {
        total_members: team.len(),
        avg_progress: rounded_mean(team.iter().map(|m| m.progress)),
        total_courses_completed: team.iter().map(|m| m.courses_completed).sum(),
        avg_performance_score: rounded_mean(team.iter().map(|m| m.performance_score)),
        active_members: team.iter().filter(|m| !m.last_active.contains("day")).count(),
        at_risk_members: team.iter().filter(|m| m.is_at_risk()).count(),
    }
}

pub fn at_risk_members(team: &[TeamMember]) -> Vec<&TeamMember> {
    team.iter().filter(|m| m.is_at_risk()).collect()
}

/// Matches the search text against name or role, ignoring case.
pub fn filter_team<'a>(team: &'a [TeamMember], query: &str) -> Vec<&'a TeamMember> {
    let query = query.to_lowercase();
    team.iter()
        .filter(|m| m.name.to_lowercase().contains(&query) || m.role.to_lowercase().contains(&query))
        .collect()
}

//=========================================================================================
// Mentor Review
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorSessionStats {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub scheduled_sessions: usize,
    pub unique_mentors: usize,
    /// Mean over rated sessions, `0.0` when none are rated.
    pub average_rating: f64,
    /// Time spent in completed sessions.
    pub total_hours: f64,
}

pub fn mentor_session_stats(sessions: &[MentorSession]) -> MentorSessionStats {
    let completed = || sessions.iter().filter(|s| s.status == SessionStatus::Completed);
    let ratings: Vec<u8> = sessions.iter().filter_map(|s| s.rating).collect();
    MentorSessionStats {
        total_sessions: sessions.len(),
        completed_sessions: completed().count(),
        scheduled_sessions: sessions
            .iter()
            .filter(|s| s.status == SessionStatus::Scheduled)
            .count(),
        unique_mentors: sessions.iter().map(|s| s.mentor_id).collect::<HashSet<_>>().len(),
        average_rating: mean(&ratings),
        total_hours: completed().map(|s| s.duration_minutes).sum::<u32>() as f64 / 60.0,
    }
}

fn mean(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64
}

/// Every rating a mentor received, in session order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorRating {
    pub mentor_id: String,
    pub mentor_name: String,
    pub ratings: Vec<u8>,
    pub avg_rating: f64,
}

/// Groups rated sessions by mentor, in order of each mentor's first rated session.
pub fn mentor_ratings(sessions: &[MentorSession]) -> Vec<MentorRating> {
    let mut grouped: Vec<MentorRating> = Vec::new();
    for session in sessions {
        let Some(rating) = session.rating else {
            continue;
        };
        match grouped.iter_mut().find(|g| g.mentor_id == session.mentor_id) {
            Some(group) => group.ratings.push(rating),
            None => grouped.push(MentorRating {
                mentor_id: session.mentor_id.to_string(),
                mentor_name: session.mentor_name.to_string(),
                ratings: vec![rating],
                avg_rating: 0.0,
            }),
        }
    }
    for group in &mut grouped {
        group.avg_rating = mean(&group.ratings);
    }
    grouped
}

pub fn low_rated_mentors(ratings: &[MentorRating]) -> Vec<MentorRating> {
    ratings
        .iter()
        .filter(|r| r.avg_rating < LOW_RATING_THRESHOLD)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(people: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        people.into_iter().collect()
    }

    #[test]
    fn admin_overview_covers_the_whole_roster() {
        let overview = admin_overview(EMPLOYEES, MENTOR_ROSTER);
        assert_eq!(
            overview,
            AdminOverview {
                total_employees: 8,
                avg_progress: 69,
                total_courses_completed: 61,
                active_users_last_month: 8,
                active_mentors: 4,
            }
        );
    }

    #[test]
    fn empty_rosters_do_not_divide_by_zero() {
        let overview = admin_overview(&[], &[]);
        assert_eq!(overview.avg_progress, 0);
        assert_eq!(team_metrics(&[]).avg_performance_score, 0);
        assert_eq!(mentor_session_stats(&[]).average_rating, 0.0);
    }

    #[test]
    fn relative_timestamps_convert_to_hours() {
        assert_eq!(hours_since("30 min ago"), Some(0));
        assert_eq!(hours_since("5 hours ago"), Some(5));
        assert_eq!(hours_since("3 days ago"), Some(72));
        assert_eq!(hours_since("6 weeks ago"), Some(1008));
        assert_eq!(hours_since("yesterday"), None);
    }

    #[test]
    fn employee_filter_combines_search_and_department() {
        let engineering = filter_employees(EMPLOYEES, "", Some("Engineering"));
        assert_eq!(engineering.len(), 4);

        let found = filter_employees(EMPLOYEES, "KIM", None);
        assert_eq!(names(found.iter().map(|e| e.name)), ["Samantha Kim"]);

        assert_eq!(filter_employees(EMPLOYEES, "", Some("all")).len(), 8);
        assert!(filter_employees(EMPLOYEES, "kim", Some("Design")).is_empty());
    }

    #[test]
    fn team_metrics_flag_members_at_risk() {
        let metrics = team_metrics(TEAM);
        assert_eq!(metrics.total_members, 5);
        assert_eq!(metrics.avg_progress, 60);
        assert_eq!(metrics.total_courses_completed, 32);
        assert_eq!(metrics.avg_performance_score, 84);
        assert_eq!(metrics.active_members, 3);
        assert_eq!(metrics.at_risk_members, 2);

        let at_risk = at_risk_members(TEAM);
        assert_eq!(names(at_risk.iter().map(|m| m.name)), ["Taylor Kim", "Casey Park"]);
    }

    #[test]
    fn team_search_matches_name_or_role() {
        assert_eq!(filter_team(TEAM, "software").len(), 3);
        assert_eq!(names(filter_team(TEAM, "jordan").iter().map(|m| m.name)), ["Jordan Lee"]);
        assert_eq!(filter_team(TEAM, "").len(), 5);
    }

    #[test]
    fn session_stats_count_only_completed_time() {
        let stats = mentor_session_stats(MENTOR_SESSIONS);
        assert_eq!(stats.total_sessions, 11);
        assert_eq!(stats.completed_sessions, 9);
        assert_eq!(stats.scheduled_sessions, 2);
        assert_eq!(stats.unique_mentors, 5);
        assert!((stats.average_rating - 37.0 / 9.0).abs() < 1e-9);
        assert!((stats.total_hours - 9.0).abs() < 1e-9);
    }

    #[test]
    fn only_mentors_below_three_and_a_half_are_flagged() {
        let ratings = mentor_ratings(MENTOR_SESSIONS);
        let ids: Vec<&str> = ratings.iter().map(|r| r.mentor_id.as_str()).collect();
        assert_eq!(ids, ["M1", "M2", "M5", "M3", "M4"]);

        let chen = ratings.iter().find(|r| r.mentor_name == "Michael Chen").unwrap();
        assert_eq!(chen.ratings, [4, 3]);
        assert_eq!(chen.avg_rating, 3.5);

        let flagged = low_rated_mentors(&ratings);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].mentor_name, "Lisa Wang");
        assert_eq!(flagged[0].avg_rating, 2.0);
    }
}
