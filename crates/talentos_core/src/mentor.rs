//! crates/talentos_core/src/mentor.rs
//!
//! Mock mentor directory and session booking. Bookings are returned to the
//! caller as confirmations; nothing is stored or sent anywhere.

use crate::ports::{PortError, PortResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorKind {
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mentor {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub expertise: &'static [&'static str],
    pub rating: f32,
    pub reviews: u32,
    pub hourly_rate: u32,
    pub availability: &'static str,
    pub location: &'static str,
    pub kind: MentorKind,
    /// Where an external mentor publishes, e.g. "YouTube".
    pub platform: Option<&'static str>,
}

pub const TIME_SLOTS: [&str; 6] = ["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"];

pub static MENTORS: &[Mentor] = &[
    Mentor {
        id: "1",
        name: "Sarah Chen",
        title: "Senior Product Manager",
        company: "Google",
        expertise: &["Product Strategy", "User Research", "Analytics"],
        rating: 4.9,
        reviews: 127,
        hourly_rate: 150,
        availability: "Next available: Tomorrow",
        location: "Mountain View, CA",
        kind: MentorKind::Internal,
        platform: None,
    },
    Mentor {
        id: "2",
        name: "Marcus Johnson",
        title: "Engineering Director",
        company: "Google",
        expertise: &["Technical Leadership", "System Design", "Cloud Architecture"],
        rating: 5.0,
        reviews: 89,
        hourly_rate: 200,
        availability: "Next available: This week",
        location: "Sunnyvale, CA",
        kind: MentorKind::Internal,
        platform: None,
    },
    Mentor {
        id: "3",
        name: "Priya Sharma",
        title: "Lead UX Designer",
        company: "Google",
        expertise: &["UX Research", "Design Systems", "Prototyping"],
        rating: 4.8,
        reviews: 156,
        hourly_rate: 120,
        availability: "Next available: Today",
        location: "San Francisco, CA",
        kind: MentorKind::Internal,
        platform: None,
    },
    Mentor {
        id: "4",
        name: "David Park",
        title: "Staff ML Engineer",
        company: "Google",
        expertise: &["Machine Learning", "AI/ML", "Deep Learning"],
        rating: 4.9,
        reviews: 94,
        hourly_rate: 180,
        availability: "Next available: Next week",
        location: "Palo Alto, CA",
        kind: MentorKind::Internal,
        platform: None,
    },
    Mentor {
        id: "5",
        name: "Ali Abdaal",
        title: "YouTuber & Productivity Expert",
        company: "YouTube Creator",
        expertise: &["Productivity", "Content Creation", "Personal Development"],
        rating: 4.9,
        reviews: 2340,
        hourly_rate: 300,
        availability: "Limited slots available",
        location: "London, UK",
        kind: MentorKind::External,
        platform: Some("YouTube"),
    },
    Mentor {
        id: "6",
        name: "Clement Mihailescu",
        title: "Ex-Google & Ex-Facebook Engineer",
        company: "AlgoExpert",
        expertise: &["Algorithms", "System Design", "Interview Prep"],
        rating: 5.0,
        reviews: 1890,
        hourly_rate: 250,
        availability: "Next available: This month",
        location: "San Francisco, CA",
        kind: MentorKind::External,
        platform: Some("YouTube"),
    },
    Mentor {
        id: "7",
        name: "Emma Bostian",
        title: "Software Engineer & Educator",
        company: "Spotify",
        expertise: &["Frontend Development", "Career Growth", "Tech Leadership"],
        rating: 4.8,
        reviews: 567,
        hourly_rate: 200,
        availability: "Next available: Tomorrow",
        location: "Berlin, Germany",
        kind: MentorKind::External,
        platform: Some("LinkedIn Learning"),
    },
    Mentor {
        id: "8",
        name: "Traversy Media",
        title: "Full Stack Developer & Instructor",
        company: "YouTube Creator",
        expertise: &["Web Development", "JavaScript", "Full Stack"],
        rating: 4.9,
        reviews: 3450,
        hourly_rate: 180,
        availability: "Next available: This week",
        location: "Boston, MA",
        kind: MentorKind::External,
        platform: Some("YouTube"),
    },
];

pub fn mentors_of_kind(kind: MentorKind) -> impl Iterator<Item = &'static Mentor> {
    MENTORS.iter().filter(move |m| m.kind == kind)
}

pub fn find_mentor(mentor_id: &str) -> Option<&'static Mentor> {
    MENTORS.iter().find(|m| m.id == mentor_id)
}

/// A requested session, as shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookedSession {
    pub mentor: String,
    /// Long form, e.g. "Tuesday, October 15, 2024".
    pub date: String,
    pub time: String,
}

/// Books `slot` on `date`. The calendar greys out today and every earlier
/// day, so only dates after `today` are accepted.
pub fn book_session(
    mentor_id: &str,
    date: NaiveDate,
    slot: &str,
    today: NaiveDate,
) -> PortResult<BookedSession> {
    let mentor = find_mentor(mentor_id)
        .ok_or_else(|| PortError::NotFound(format!("mentor '{}'", mentor_id)))?;
    if date <= today {
        return Err(PortError::InvalidInput(format!(
            "{} is not a bookable date",
            date
        )));
    }
    if !TIME_SLOTS.contains(&slot) {
        return Err(PortError::InvalidInput(format!(
            "'{}' is not an offered time slot",
            slot
        )));
    }

    let booked = BookedSession {
        mentor: mentor.name.to_string(),
        date: date.format("%A, %B %-d, %Y").to_string(),
        time: slot.to_string(),
    };
    info!("Session requested with {} on {} at {}.", booked.mentor, booked.date, booked.time);
    Ok(booked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_splits_internal_and_external_mentors() {
        assert_eq!(mentors_of_kind(MentorKind::Internal).count(), 4);
        assert_eq!(mentors_of_kind(MentorKind::External).count(), 4);
        assert!(mentors_of_kind(MentorKind::External).all(|m| m.platform.is_some()));
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn booking_formats_a_long_date() {
        let booked = book_session("1", day(2024, 10, 15), "2:00 PM", day(2024, 10, 1)).unwrap();
        assert_eq!(booked.mentor, "Sarah Chen");
        assert_eq!(booked.date, "Tuesday, October 15, 2024");
        assert_eq!(booked.time, "2:00 PM");
    }

    #[test]
    fn booking_rejects_unknown_mentors_and_slots() {
        let (date, today) = (day(2024, 10, 5), day(2024, 10, 1));
        assert!(matches!(book_session("42", date, "9:00 AM", today), Err(PortError::NotFound(_))));
        assert!(matches!(
            book_session("2", date, "midnight", today),
            Err(PortError::InvalidInput(_))
        ));
        assert_eq!(
            book_session("2", date, "9:00 AM", today).unwrap().date,
            "Saturday, October 5, 2024"
        );
    }

    #[test]
    fn booking_rejects_today_and_past_dates() {
        let today = day(2024, 10, 15);
        for date in [day(2024, 10, 14), today, day(2023, 12, 31)] {
            assert!(matches!(
                book_session("3", date, "10:00 AM", today),
                Err(PortError::InvalidInput(_))
            ));
        }
        assert_eq!(
            book_session("3", day(2024, 10, 16), "10:00 AM", today).unwrap().date,
            "Wednesday, October 16, 2024"
        );
    }

    #[test]
    fn mentor_kind_reads_snake_case() {
        let kind: MentorKind = serde_json::from_str("\"external\"").unwrap();
        assert_eq!(kind, MentorKind::External);
    }
}
