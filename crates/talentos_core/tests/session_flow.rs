//! End-to-end walks through the visitor journey using only the public API.

use talentos_core::{
    classify_from_interests, classify_from_message, ChatClassifier, ChatSession, OnboardingForm,
    Page, PendingNavigation, RoadmapCatalog, RoadmapSource, SessionController, DEFAULT_CAREER_PATH,
};

fn form(interests: &str) -> OnboardingForm {
    OnboardingForm {
        name: "Kushal".into(),
        education: "Bachelor's".into(),
        experience: "Fresher".into(),
        interests: interests.into(),
    }
}

#[test]
fn onboarding_to_roadmap_uses_the_detected_table() {
    let catalog = RoadmapCatalog::bundled().unwrap();
    let mut session = SessionController::new();

    session.submit_onboarding(&form("cloud run, kubernetes"));
    assert_eq!(session.current_page(), Page::Loading);
    assert_eq!(session.complete_loading(), Some(Page::Roadmap));

    let roadmap = catalog.roadmap(session.active_career_path());
    assert_eq!(roadmap.career_path, "Cloud Run & Serverless Developer");
    assert_eq!(roadmap.milestones[0].id, "cloud-m1");
}

#[test]
fn figma_interests_land_on_product_manager() {
    let mut session = SessionController::new();
    session.submit_onboarding(&form("I love Figma and UX research"));
    assert_eq!(session.selected_career_path(), "Product Manager");
}

#[test]
fn unknown_paths_from_any_source_read_the_default_table() {
    let catalog = RoadmapCatalog::bundled().unwrap();
    let mut session = SessionController::new();

    session.navigate(Page::Chat, Some("Data Engineer"), true);
    assert_eq!(session.current_page(), Page::Chat);

    let roadmap = catalog.roadmap(session.active_career_path());
    assert_eq!(roadmap.career_path, DEFAULT_CAREER_PATH);
    assert!(std::ptr::eq(roadmap, catalog.roadmap("Data Engineer")));
}

#[test]
fn staged_navigation_exposes_the_pending_target() {
    let mut session = SessionController::new();
    session.navigate(Page::Roadmap, Some("AI/ML Engineer"), true);
    assert_eq!(
        session.pending_navigation(),
        Some(&PendingNavigation {
            page: Page::Roadmap,
            career_path: Some("AI/ML Engineer".to_string()),
        })
    );
    assert!(session.state().is_consistent());

    session.complete_loading();
    assert_eq!(session.current_page(), Page::Roadmap);
    assert!(session.pending_navigation().is_none());
    assert!(session.state().is_consistent());
}

#[test]
fn logout_from_anywhere_returns_to_a_clean_landing_page() {
    for page in Page::ALL {
        let mut session = SessionController::new();
        session.submit_onboarding(&form("testing"));
        session.navigate(page, Some("QA Engineer"), true);
        session.logout();

        assert!(session.profile().is_none());
        assert_eq!(session.selected_career_path(), "Product Manager");
        assert_eq!(session.current_page(), Page::Landing);
        assert!(session.state().is_consistent());
    }
}

#[test]
fn chat_journey_picks_an_option_and_reaches_its_track() {
    let catalog = RoadmapCatalog::bundled().unwrap();
    let classifier = ChatClassifier::default();
    let mut session = SessionController::new();
    session.submit_onboarding(&form("gardening"));
    session.complete_loading();
    session.navigate(Page::Chat, None, false);

    let mut chat = ChatSession::new(session.profile());
    chat.send(&classifier, "I want to build with FastAPI");
    let ml = chat
        .latest_options()
        .unwrap()
        .iter()
        .find(|o| o.title == "ML Engineer")
        .cloned()
        .unwrap();
    chat.choose_option(&ml);
    chat.generate_roadmap(&mut session);
    session.complete_loading();

    assert_eq!(session.current_page(), Page::Roadmap);
    assert_eq!(
        session.profile().unwrap().selected_career_path.as_deref(),
        Some("AI/ML Engineer")
    );
    assert_eq!(catalog.roadmap(session.active_career_path()).career_path, "AI/ML Engineer");
}

#[test]
fn gemini_always_takes_precedence_in_onboarding() {
    for text in ["gemini", "design with gemini", "qa, data, product, gemini, code"] {
        assert_eq!(classify_from_interests(text), "Gemini AI Developer");
    }
}

#[test]
fn container_chat_message_offers_four_tracked_options() {
    let result = classify_from_message("I want to work with kubernetes and docker");
    assert_eq!(result.career_path, "Software Engineer");
    assert_eq!(result.options.len(), 4);
    assert!(result.options.iter().all(|o| !o.track.is_empty()));
}
