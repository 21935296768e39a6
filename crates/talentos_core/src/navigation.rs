//! crates/talentos_core/src/navigation.rs
//!
//! The session controller: the single writer of the current page, the
//! visitor profile and the selected career path. Screens never mutate these
//! directly; they call the named operations below.

use crate::classifier::classify_from_interests;
use crate::discovery::career_path_for_track;
use crate::domain::{
    NavigationState, OnboardingForm, Page, PendingNavigation, UserProfile,
};
use tracing::{debug, info, warn};

/// What a `navigate` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The page changed right away.
    Immediate(Page),
    /// The target was parked behind the loading interstitial.
    Staged(PendingNavigation),
    /// `Loading` was requested directly; the page was left unchanged.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: NavigationState,
    profile: Option<UserProfile>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    //=====================================================================================
    // Accessors
    //=====================================================================================

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> Page {
        self.state.current_page
    }

    pub fn selected_career_path(&self) -> &str {
        &self.state.selected_career_path
    }

    pub fn pending_navigation(&self) -> Option<&PendingNavigation> {
        self.state.pending_navigation.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The path the roadmap screen shows: the profile's copy wins over the
    /// free-standing slot.
    pub fn active_career_path(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.selected_career_path.as_deref())
            .unwrap_or(self.state.selected_career_path.as_str())
    }

    //=====================================================================================
    // Operations
    //=====================================================================================

    /// Moves to `target`, optionally writing a new career path first.
    ///
    /// With `show_loading` set and a `Roadmap` target the move is staged
    /// behind `Loading` until `complete_loading` runs. An empty career path
    /// is treated as absent.
    pub fn navigate(
        &mut self,
        target: Page,
        career_path: Option<&str>,
        show_loading: bool,
    ) -> Transition {
        let career_path = career_path.filter(|p| !p.is_empty());
        if let Some(path) = career_path {
            self.write_career_path(path);
        }

        if target == Page::Loading {
            warn!(
                "Ignoring direct navigation to '{}'; it is only entered by staging.",
                Page::Loading
            );
            return Transition::Ignored;
        }

        if show_loading && target == Page::Roadmap {
            let pending = PendingNavigation {
                page: target,
                career_path: career_path.map(str::to_string),
            };
            info!("Staging navigation to '{}' behind the loading screen.", target);
            self.state.pending_navigation = Some(pending.clone());
            self.state.current_page = Page::Loading;
            return Transition::Staged(pending);
        }

        if self.state.pending_navigation.take().is_some() {
            debug!("Discarding staged navigation in favour of '{}'.", target);
        }
        info!("Navigating {} -> {}", self.state.current_page, target);
        self.state.current_page = target;
        Transition::Immediate(target)
    }

    /// Resolves a staged navigation. A no-op when nothing is pending.
    pub fn complete_loading(&mut self) -> Option<Page> {
        let pending = self.state.pending_navigation.take()?;
        info!("Loading complete, landing on '{}'.", pending.page);
        self.state.current_page = pending.page;
        Some(pending.page)
    }

    /// Assigns a career path without changing the page.
    pub fn select_career_path(&mut self, career_path: &str) {
        self.write_career_path(career_path);
    }

    /// Replaces the profile wholesale.
    pub fn set_profile(&mut self, profile: UserProfile) {
        info!("Profile set for '{}'.", profile.name);
        self.profile = Some(profile);
    }

    /// Drops the profile and returns to the landing page with the default
    /// career path. Anything staged is discarded.
    pub fn logout(&mut self) {
        info!("Logging out.");
        self.profile = None;
        self.state = NavigationState::default();
    }

    /// Handles the onboarding form: builds the profile, detects a career
    /// path from the interests and stages the roadmap.
    pub fn submit_onboarding(&mut self, form: &OnboardingForm) -> String {
        let detected = classify_from_interests(&form.interests);
        let mut profile = UserProfile::from_onboarding(form);
        profile.selected_career_path = Some(detected.to_string());
        info!("Onboarding detected career path '{}'.", detected);

        self.set_profile(profile);
        self.navigate(Page::Roadmap, Some(detected), true);
        detected.to_string()
    }

    /// The discovery screen's "explore" action for one of its tracks.
    pub fn explore_career(&mut self, track_id: &str) -> &'static str {
        let career_path = career_path_for_track(track_id);
        self.navigate(Page::Roadmap, Some(career_path), true);
        self.select_career_path(career_path);
        career_path
    }

    fn write_career_path(&mut self, career_path: &str) {
        debug!("Selected career path -> '{}'", career_path);
        self.state.selected_career_path = career_path.to_string();
        if let Some(profile) = self.profile.as_mut() {
            profile.selected_career_path = Some(career_path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> UserProfile {
        UserProfile::from_onboarding(&OnboardingForm {
            name: name.into(),
            education: "Master's".into(),
            experience: "2 years".into(),
            interests: "coding".into(),
        })
    }

    #[test]
    fn starts_on_landing_with_default_path() {
        let session = SessionController::new();
        assert_eq!(session.current_page(), Page::Landing);
        assert_eq!(session.selected_career_path(), "Product Manager");
        assert!(session.pending_navigation().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn loading_flag_only_stages_roadmap_targets() {
        let mut session = SessionController::new();
        let transition = session.navigate(Page::Chat, Some("Data Engineer"), true);
        assert_eq!(transition, Transition::Immediate(Page::Chat));
        assert_eq!(session.current_page(), Page::Chat);
        assert_eq!(session.selected_career_path(), "Data Engineer");
        assert!(session.pending_navigation().is_none());
    }

    #[test]
    fn staged_roadmap_resolves_on_complete_loading() {
        let mut session = SessionController::new();
        session.navigate(Page::Roadmap, Some("AI/ML Engineer"), true);
        assert_eq!(session.current_page(), Page::Loading);
        assert_eq!(
            session.pending_navigation(),
            Some(&PendingNavigation {
                page: Page::Roadmap,
                career_path: Some("AI/ML Engineer".into()),
            })
        );

        assert_eq!(session.complete_loading(), Some(Page::Roadmap));
        assert_eq!(session.current_page(), Page::Roadmap);
        assert!(session.pending_navigation().is_none());
    }

    #[test]
    fn complete_loading_without_pending_is_a_no_op() {
        let mut session = SessionController::new();
        session.navigate(Page::Mentor, None, false);
        assert_eq!(session.complete_loading(), None);
        assert_eq!(session.current_page(), Page::Mentor);
    }

    #[test]
    fn roadmap_without_loading_flag_is_immediate() {
        let mut session = SessionController::new();
        assert_eq!(
            session.navigate(Page::Roadmap, None, false),
            Transition::Immediate(Page::Roadmap)
        );
        assert_eq!(session.selected_career_path(), "Product Manager");
    }

    #[test]
    fn direct_loading_target_is_ignored_but_path_is_written() {
        let mut session = SessionController::new();
        session.navigate(Page::Discovery, None, false);
        assert_eq!(
            session.navigate(Page::Loading, Some("QA Engineer"), true),
            Transition::Ignored
        );
        assert_eq!(session.current_page(), Page::Discovery);
        assert_eq!(session.selected_career_path(), "QA Engineer");
        assert!(session.state().is_consistent());
    }

    #[test]
    fn later_navigation_overwrites_a_staged_one() {
        let mut session = SessionController::new();
        session.navigate(Page::Roadmap, Some("QA Engineer"), true);
        session.navigate(Page::Mentor, None, false);
        assert_eq!(session.current_page(), Page::Mentor);
        assert!(session.pending_navigation().is_none());
        assert_eq!(session.complete_loading(), None);
    }

    #[test]
    fn career_path_writes_both_slots_when_a_profile_exists() {
        let mut session = SessionController::new();
        session.set_profile(profile("Kushal"));
        session.navigate(Page::Roadmap, Some("QA Engineer"), false);
        assert_eq!(session.selected_career_path(), "QA Engineer");
        assert_eq!(
            session.profile().unwrap().selected_career_path.as_deref(),
            Some("QA Engineer")
        );

        session.select_career_path("Gemini AI Developer");
        assert_eq!(
            session.profile().unwrap().selected_career_path.as_deref(),
            Some("Gemini AI Developer")
        );
        assert_eq!(session.current_page(), Page::Roadmap);
    }

    #[test]
    fn select_career_path_without_profile_updates_free_slot() {
        let mut session = SessionController::new();
        session.select_career_path("QA Engineer");
        assert_eq!(session.selected_career_path(), "QA Engineer");
        assert_eq!(session.active_career_path(), "QA Engineer");
        assert!(session.profile().is_none());
    }

    #[test]
    fn empty_career_path_does_not_overwrite() {
        let mut session = SessionController::new();
        session.select_career_path("QA Engineer");
        session.navigate(Page::Chat, Some(""), false);
        assert_eq!(session.selected_career_path(), "QA Engineer");
    }

    #[test]
    fn logout_resets_everything() {
        let mut session = SessionController::new();
        session.set_profile(profile("Kushal"));
        session.navigate(Page::Roadmap, Some("QA Engineer"), true);
        session.logout();
        assert!(session.profile().is_none());
        assert_eq!(session.selected_career_path(), "Product Manager");
        assert_eq!(session.current_page(), Page::Landing);
        assert!(session.pending_navigation().is_none());
    }

    #[test]
    fn onboarding_classifies_and_stages_the_roadmap() {
        let mut session = SessionController::new();
        let detected = session.submit_onboarding(&OnboardingForm {
            name: "Kushal".into(),
            education: "Bachelor's".into(),
            experience: "Student".into(),
            interests: "I love Figma and UX research".into(),
        });
        assert_eq!(detected, "Product Manager");
        assert_eq!(session.selected_career_path(), "Product Manager");
        assert_eq!(session.current_page(), Page::Loading);
        let profile = session.profile().unwrap();
        assert_eq!(profile.selected_career_path.as_deref(), Some("Product Manager"));
        assert_eq!(profile.interests, vec!["I love Figma and UX research"]);

        session.complete_loading();
        assert_eq!(session.current_page(), Page::Roadmap);
    }

    #[test]
    fn explore_maps_discovery_tracks_to_career_paths() {
        let mut session = SessionController::new();
        assert_eq!(session.explore_career("data"), "AI/ML Engineer");
        assert_eq!(session.current_page(), Page::Loading);
        assert_eq!(session.selected_career_path(), "AI/ML Engineer");

        assert_eq!(session.explore_career("astronaut"), "Product Manager");
    }

    #[test]
    fn active_path_prefers_the_profile_copy() {
        let mut session = SessionController::new();
        session.select_career_path("QA Engineer");
        let mut p = profile("Kushal");
        p.selected_career_path = Some("Software Engineer".into());
        session.set_profile(p);
        assert_eq!(session.selected_career_path(), "QA Engineer");
        assert_eq!(session.active_career_path(), "Software Engineer");
    }
}
