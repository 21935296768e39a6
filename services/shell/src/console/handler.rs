//! services/shell/src/console/handler.rs
//!
//! This is the main control loop for a console session. It reads one command per line,
//! drives the session controller and writes the resulting events back, one per line.

use crate::{
    console::{
        loading::{loading_sequence, LoadingEvent},
        protocol::{ClientMessage, ServerMessage},
        state::{AppState, ConsoleState},
    },
    error::AppError,
};
use futures::{pin_mut, StreamExt};
use std::sync::Arc;
use talentos_core::dashboard::{
    admin_overview, at_risk_members, filter_employees, filter_team, low_rated_mentors,
    mentor_ratings, mentor_session_stats, team_metrics, EMPLOYEES, MENTOR_ROSTER,
    MENTOR_SESSIONS, TEAM,
};
use talentos_core::discovery::{filter, prioritize};
use talentos_core::mentor::{book_session, mentors_of_kind, MENTORS, TIME_SLOTS};
use talentos_core::staff::{mock_login, StaffRole};
use talentos_core::{OnboardingForm, Page, Transition};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Serializes one event and writes it as a single line.
async fn send<W>(writer: &mut W, message: &ServerMessage) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

async fn send_error<W>(writer: &mut W, message: impl Into<String>) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    send(writer, &ServerMessage::Error { message: message.into() }).await
}

const STAFF_ONLY: &str = "Sign in as admin or manager to view dashboards.";

/// Runs the console until the reader is exhausted.
///
/// Malformed lines are answered with an `error` event and the loop carries on;
/// only I/O failures end the session early.
pub async fn run_console<R, W>(app_state: Arc<AppState>, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Console session started.");
    let mut console = ConsoleState::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ClientMessage>(&line) {
            Ok(message) => {
                debug!("Received command: {:?}", message);
                handle_message(&app_state, &mut console, message, &mut writer).await?;
            }
            Err(e) => {
                warn!("Failed to parse command: {}", e);
                send_error(&mut writer, format!("Malformed command: {}", e)).await?;
            }
        }
    }

    info!("Input closed, ending console session.");
    Ok(())
}

/// Applies one command to the session and reports what changed.
pub async fn handle_message<W>(
    app_state: &AppState,
    console: &mut ConsoleState,
    message: ClientMessage,
    writer: &mut W,
) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    match message {
        ClientMessage::Navigate {
            page,
            career_path,
            show_loading,
        } => {
            let target = Page::resolve(&page);
            if target.as_str() != page {
                warn!("Unknown page '{}', showing '{}' instead.", page, target);
            }
            let previous = console.session.current_page();
            let transition = console
                .session
                .navigate(target, career_path.as_deref(), show_loading);
            if transition == Transition::Immediate(Page::Chat) && previous != Page::Chat {
                console.open_chat();
                announce_chat_greeting(console, writer).await?;
            }
            apply_transition(app_state, console, transition, writer).await?;
        }

        ClientMessage::Onboard {
            name,
            education,
            experience,
            interests,
        } => {
            let form = OnboardingForm {
                name,
                education,
                experience,
                interests,
            };
            let detected = console.session.submit_onboarding(&form);
            info!("Onboarding complete, roadmap staged for '{}'.", detected);
            settle_loading(app_state, console, writer).await?;
        }

        ClientMessage::SelectCareerPath { career_path } => {
            console.session.select_career_path(&career_path);
            send_status(console, writer).await?;
        }

        ClientMessage::Chat { text } => {
            let reply = console.chat_mut().send(&app_state.classifier, &text).cloned();
            match reply {
                Some(message) => send_chat_reply(console, message, writer).await?,
                None => send_error(writer, "Chat messages cannot be empty.").await?,
            }
        }

        ClientMessage::ChooseOption { index } => {
            let option = console
                .chat
                .as_ref()
                .and_then(|chat| chat.latest_options())
                .and_then(|options| options.get(index))
                .cloned();
            let confirmation = match (option, console.chat.as_mut()) {
                (Some(option), Some(chat)) => Some(chat.choose_option(&option).clone()),
                _ => None,
            };
            match confirmation {
                Some(message) => send_chat_reply(console, message, writer).await?,
                None => {
                    send_error(writer, format!("No career option at index {}.", index)).await?
                }
            }
        }

        ClientMessage::GenerateRoadmap => match console.chat.as_ref() {
            Some(chat) if chat.roadmap_ready() => {
                let transition = chat.generate_roadmap(&mut console.session);
                apply_transition(app_state, console, transition, writer).await?;
            }
            _ => {
                send_error(writer, "Chat with the mentor before generating a roadmap.").await?
            }
        },

        ClientMessage::Explore { track_id } => {
            let career_path = console.session.explore_career(&track_id);
            info!("Exploring track '{}' as '{}'.", track_id, career_path);
            settle_loading(app_state, console, writer).await?;
        }

        ClientMessage::Discover { query, difficulty } => {
            let interests = console
                .session
                .profile()
                .map(|p| p.interests.clone())
                .unwrap_or_default();
            let tracks = filter(prioritize(&interests), &query, difficulty);
            send(writer, &ServerMessage::Discovery { tracks }).await?;
        }

        ClientMessage::Mentors { kind } => {
            let mentors = match kind {
                Some(kind) => mentors_of_kind(kind).cloned().collect(),
                None => MENTORS.to_vec(),
            };
            let message = ServerMessage::Mentors {
                mentors,
                time_slots: TIME_SLOTS.iter().map(|slot| slot.to_string()).collect(),
            };
            send(writer, &message).await?;
        }

        ClientMessage::BookMentor {
            mentor_id,
            date,
            slot,
        } => match book_session(&mentor_id, date, &slot, chrono::Local::now().date_naive()) {
            Ok(session) => send(writer, &ServerMessage::BookingConfirmed { session }).await?,
            Err(e) => send_error(writer, e.to_string()).await?,
        },

        ClientMessage::StaffLogin { username, password } => {
            match mock_login(&username, &password) {
                Ok(role) => {
                    console.staff_role = Some(role);
                    send(writer, &ServerMessage::StaffAuthenticated { role }).await?;
                }
                Err(e) => send_error(writer, e.to_string()).await?,
            }
        }

        ClientMessage::Dashboard { query, department } => match console.staff_role {
            Some(StaffRole::Admin) => {
                let message = ServerMessage::AdminDashboard {
                    overview: admin_overview(EMPLOYEES, MENTOR_ROSTER),
                    employees: filter_employees(EMPLOYEES, &query, department.as_deref())
                        .into_iter()
                        .cloned()
                        .collect(),
                    mentors: MENTOR_ROSTER.to_vec(),
                };
                send(writer, &message).await?;
            }
            Some(StaffRole::Manager) => {
                let message = ServerMessage::ManagerDashboard {
                    metrics: team_metrics(TEAM),
                    team: filter_team(TEAM, &query).into_iter().cloned().collect(),
                    at_risk: at_risk_members(TEAM).into_iter().cloned().collect(),
                };
                send(writer, &message).await?;
            }
            None => send_error(writer, STAFF_ONLY).await?,
        },

        ClientMessage::EmployeeDetail { employee_id } => {
            let employee = match console.staff_role {
                Some(StaffRole::Admin) => EMPLOYEES
                    .iter()
                    .find(|e| e.id == employee_id)
                    .map(|e| (e.name, e.role, e.progress)),
                Some(StaffRole::Manager) => TEAM
                    .iter()
                    .find(|m| m.id == employee_id)
                    .map(|m| (m.name, m.role, m.progress)),
                None => {
                    send_error(writer, STAFF_ONLY).await?;
                    return Ok(());
                }
            };
            match employee {
                Some((name, role, progress)) => {
                    let ratings = mentor_ratings(MENTOR_SESSIONS);
                    let message = ServerMessage::EmployeeDetail {
                        employee_id,
                        name: name.to_string(),
                        role: role.to_string(),
                        progress,
                        sessions: MENTOR_SESSIONS.to_vec(),
                        stats: mentor_session_stats(MENTOR_SESSIONS),
                        low_rated_mentors: low_rated_mentors(&ratings),
                        mentor_ratings: ratings,
                    };
                    send(writer, &message).await?;
                }
                None => {
                    send_error(writer, format!("No employee '{}' on this roster.", employee_id))
                        .await?
                }
            }
        }

        ClientMessage::Logout => {
            console.reset();
            send_page_changed(console, Page::Landing, writer).await?;
        }

        ClientMessage::Status => send_status(console, writer).await?,
    }
    Ok(())
}

//=========================================================================================
// Transition Helpers
//=========================================================================================

async fn apply_transition<W>(
    app_state: &AppState,
    console: &mut ConsoleState,
    transition: Transition,
    writer: &mut W,
) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    match transition {
        Transition::Immediate(page) => {
            send_page_changed(console, page, writer).await?;
            if page == Page::Roadmap {
                send_roadmap(app_state, console, writer).await?;
            }
        }
        Transition::Staged(_) => settle_loading(app_state, console, writer).await?,
        Transition::Ignored => {
            send_error(writer, "The loading page cannot be opened directly.").await?
        }
    }
    Ok(())
}

/// Plays the loading interstitial for a staged navigation and resolves it.
/// Does nothing when no navigation is pending.
async fn settle_loading<W>(
    app_state: &AppState,
    console: &mut ConsoleState,
    writer: &mut W,
) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    if console.session.pending_navigation().is_none() {
        return Ok(());
    }
    send_page_changed(console, Page::Loading, writer).await?;

    let sequence = loading_sequence(app_state.config.loading_time_scale);
    pin_mut!(sequence);
    while let Some(event) = sequence.next().await {
        match event {
            LoadingEvent::Step { index, text } => {
                let step = ServerMessage::LoadingStep {
                    index,
                    text: text.to_string(),
                };
                send(writer, &step).await?;
            }
            LoadingEvent::Complete => {
                if let Some(page) = console.session.complete_loading() {
                    send(writer, &ServerMessage::LoadingComplete { page }).await?;
                    send_page_changed(console, page, writer).await?;
                    if page == Page::Roadmap {
                        send_roadmap(app_state, console, writer).await?;
                    }
                }
            }
        }
    }
    Ok(())
}

//=========================================================================================
// Outgoing Event Builders
//=========================================================================================

async fn send_page_changed<W>(console: &ConsoleState, page: Page, writer: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let message = ServerMessage::PageChanged {
        page,
        career_path: console.session.active_career_path().to_string(),
    };
    send(writer, &message).await
}

async fn send_roadmap<W>(app_state: &AppState, console: &ConsoleState, writer: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let active = console.session.active_career_path();
    let roadmap = app_state.roadmaps.roadmap(active);
    let message = ServerMessage::Roadmap {
        roadmap: roadmap.clone(),
        progress: roadmap.progress(),
        other_career_paths: app_state
            .roadmaps
            .other_career_paths(&roadmap.career_path)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    send(writer, &message).await
}

async fn send_chat_reply<W>(
    console: &ConsoleState,
    message: talentos_core::Message,
    writer: &mut W,
) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let detected_career_path = console
        .chat
        .as_ref()
        .map(|chat| chat.detected_career_path().to_string())
        .unwrap_or_default();
    let reply = ServerMessage::ChatReply {
        message,
        detected_career_path,
    };
    send(writer, &reply).await
}

async fn announce_chat_greeting<W>(console: &ConsoleState, writer: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    if let Some(greeting) = console.chat.as_ref().and_then(|chat| chat.messages().first()) {
        send_chat_reply(console, greeting.clone(), writer).await?;
    }
    Ok(())
}

async fn send_status<W>(console: &ConsoleState, writer: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let status = ServerMessage::Status {
        state: console.session.state().clone(),
        profile: console.session.profile().cloned(),
        staff_role: console.staff_role,
    };
    send(writer, &status).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::Value;
    use talentos_core::{ChatClassifier, RoadmapCatalog};

    fn app_state() -> Arc<AppState> {
        let config = Config {
            loading_time_scale: 0.0,
            ..Config::default()
        };
        Arc::new(AppState {
            config: Arc::new(config),
            roadmaps: Arc::new(RoadmapCatalog::bundled().unwrap()),
            classifier: Arc::new(ChatClassifier::default()),
        })
    }

    async fn run(input: &str) -> Vec<Value> {
        let mut output: Vec<u8> = Vec::new();
        run_console(app_state(), input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn types(events: &[Value]) -> Vec<&str> {
        events.iter().map(|e| e["type"].as_str().unwrap()).collect()
    }

    #[tokio::test]
    async fn malformed_lines_report_an_error_and_the_loop_continues() {
        let events = run("not json\n{\"type\":\"status\"}\n").await;
        assert_eq!(types(&events), vec!["error", "status"]);
        assert_eq!(events[1]["state"]["current_page"], "landing");
    }

    #[tokio::test]
    async fn onboarding_plays_the_loading_screen_then_shows_the_roadmap() {
        let events = run(
            r#"{"type":"onboard","name":"Kushal","interests":"testing, automation"}"#,
        )
        .await;
        assert_eq!(
            types(&events),
            vec![
                "page_changed",
                "loading_step",
                "loading_step",
                "loading_step",
                "loading_step",
                "loading_complete",
                "page_changed",
                "roadmap",
            ]
        );
        assert_eq!(events[0]["page"], "loading");
        assert_eq!(events[5]["page"], "roadmap");
        assert_eq!(events[7]["roadmap"]["career_path"], "QA Engineer");
        assert_eq!(events[7]["progress"]["overall_percent"], 9);
    }

    #[tokio::test]
    async fn direct_navigation_to_loading_is_refused() {
        let events = run("{\"type\":\"navigate\",\"page\":\"loading\"}\n{\"type\":\"status\"}\n").await;
        assert_eq!(types(&events), vec!["error", "status"]);
        assert_eq!(events[1]["state"]["current_page"], "landing");
        assert!(events[1]["state"]["pending_navigation"].is_null());
    }

    #[tokio::test]
    async fn unknown_pages_resolve_to_landing() {
        let events = run(r#"{"type":"navigate","page":"settings"}"#).await;
        assert_eq!(events[0]["type"], "page_changed");
        assert_eq!(events[0]["page"], "landing");
    }

    #[tokio::test]
    async fn chat_flow_reaches_the_chosen_track() {
        let input = [
            r#"{"type":"navigate","page":"chat"}"#,
            r#"{"type":"chat","text":"I want to build with FastAPI"}"#,
            r#"{"type":"choose_option","index":1}"#,
            r#"{"type":"generate_roadmap"}"#,
        ]
        .join("\n");
        let events = run(&input).await;

        let replies: Vec<&Value> = events.iter().filter(|e| e["type"] == "chat_reply").collect();
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[1]["message"]["career_options"].as_array().unwrap().len(), 4);
        assert_eq!(replies[2]["detected_career_path"], "AI/ML Engineer");

        let roadmap = events.iter().find(|e| e["type"] == "roadmap").unwrap();
        assert_eq!(roadmap["roadmap"]["career_path"], "AI/ML Engineer");
        assert!(!roadmap["other_career_paths"]
            .as_array()
            .unwrap()
            .iter()
            .any(|p| p == "AI/ML Engineer"));
    }

    #[tokio::test]
    async fn generate_roadmap_needs_a_chat_turn_first() {
        let events = run(r#"{"type":"generate_roadmap"}"#).await;
        assert_eq!(types(&events), vec!["error"]);
    }

    #[tokio::test]
    async fn out_of_range_option_is_an_error() {
        let input = [
            r#"{"type":"chat","text":"kubernetes"}"#,
            r#"{"type":"choose_option","index":9}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        assert_eq!(types(&events), vec!["chat_reply", "error"]);
    }

    #[tokio::test]
    async fn booking_and_staff_login_report_outcomes() {
        let input = [
            r#"{"type":"book_mentor","mentor_id":"1","date":"2099-10-13","slot":"9:00 AM"}"#,
            r#"{"type":"book_mentor","mentor_id":"99","date":"2099-10-13","slot":"9:00 AM"}"#,
            r#"{"type":"staff_login","username":"manager","password":"manager"}"#,
            r#"{"type":"staff_login","username":"admin","password":"nope"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        assert_eq!(
            types(&events),
            vec!["booking_confirmed", "error", "staff_authenticated", "error"]
        );
        assert_eq!(events[0]["session"]["date"], "Tuesday, October 13, 2099");
        assert_eq!(events[2]["role"], "manager");
        assert_eq!(
            events[3]["message"],
            "Invalid credentials. Please use admin/admin or manager/manager"
        );
    }

    #[tokio::test]
    async fn past_dates_cannot_be_booked() {
        let events =
            run(r#"{"type":"book_mentor","mentor_id":"1","date":"2020-01-06","slot":"9:00 AM"}"#)
                .await;
        assert_eq!(types(&events), vec!["error"]);
        assert_eq!(events[0]["message"], "Invalid input: 2020-01-06 is not a bookable date");
    }

    #[tokio::test]
    async fn mentor_directory_lists_by_kind() {
        let input = [
            r#"{"type":"mentors"}"#,
            r#"{"type":"mentors","kind":"external"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        assert_eq!(types(&events), vec!["mentors", "mentors"]);
        assert_eq!(events[0]["mentors"].as_array().unwrap().len(), 8);
        assert_eq!(events[0]["time_slots"].as_array().unwrap().len(), 6);

        let external = events[1]["mentors"].as_array().unwrap();
        assert_eq!(external.len(), 4);
        assert!(external.iter().all(|m| m["kind"] == "external"));
    }

    #[tokio::test]
    async fn dashboards_need_a_staff_login() {
        let input = [
            r#"{"type":"dashboard"}"#,
            r#"{"type":"employee_detail","employee_id":"1"}"#,
            r#"{"type":"status"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        assert_eq!(types(&events), vec!["error", "error", "status"]);
        assert_eq!(events[0]["message"], STAFF_ONLY);
        assert!(events[2]["staff_role"].is_null());
    }

    #[tokio::test]
    async fn admin_dashboard_filters_the_employee_table() {
        let input = [
            r#"{"type":"staff_login","username":"admin","password":"admin"}"#,
            r#"{"type":"status"}"#,
            r#"{"type":"dashboard","department":"Engineering"}"#,
            r#"{"type":"employee_detail","employee_id":"7"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        assert_eq!(
            types(&events),
            vec!["staff_authenticated", "status", "admin_dashboard", "employee_detail"]
        );
        assert_eq!(events[1]["staff_role"], "admin");

        let dashboard = &events[2];
        assert_eq!(dashboard["overview"]["total_employees"], 8);
        assert_eq!(dashboard["overview"]["avg_progress"], 69);
        assert_eq!(dashboard["overview"]["active_mentors"], 4);
        assert_eq!(dashboard["employees"].as_array().unwrap().len(), 4);

        let detail = &events[3];
        assert_eq!(detail["name"], "Riley Thompson");
        assert_eq!(detail["stats"]["completed_sessions"], 9);
        let flagged = detail["low_rated_mentors"].as_array().unwrap();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0]["mentor_name"], "Lisa Wang");
    }

    #[tokio::test]
    async fn manager_dashboard_lists_members_at_risk() {
        let input = [
            r#"{"type":"staff_login","username":"manager","password":"manager"}"#,
            r#"{"type":"dashboard","query":"engineer"}"#,
            r#"{"type":"employee_detail","employee_id":"8"}"#,
            r#"{"type":"logout"}"#,
            r#"{"type":"dashboard"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        assert_eq!(
            types(&events),
            vec!["staff_authenticated", "manager_dashboard", "error", "page_changed", "error"]
        );

        let dashboard = &events[1];
        assert_eq!(dashboard["metrics"]["at_risk_members"], 2);
        let at_risk: Vec<&str> = dashboard["at_risk"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(at_risk, vec!["Taylor Kim", "Casey Park"]);
        assert_eq!(dashboard["team"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn discovery_ranks_profile_interests_first() {
        let input = [
            r#"{"type":"onboard","name":"Ada","interests":"data, analytics"}"#,
            r#"{"type":"discover"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        let discovery = events.last().unwrap();
        assert_eq!(discovery["type"], "discovery");
        assert_eq!(discovery["tracks"][0]["id"], "data");
        assert_eq!(discovery["tracks"][0]["relevance"], 10);
    }

    #[tokio::test]
    async fn logout_returns_to_a_clean_landing_page() {
        let input = [
            r#"{"type":"onboard","name":"Kushal","interests":"cloud"}"#,
            r#"{"type":"logout"}"#,
            r#"{"type":"status"}"#,
        ]
        .join("\n");
        let events = run(&input).await;
        let status = events.last().unwrap();
        assert!(status["profile"].is_null());
        assert_eq!(status["state"]["current_page"], "landing");
        assert_eq!(status["state"]["selected_career_path"], "Product Manager");
    }
}
