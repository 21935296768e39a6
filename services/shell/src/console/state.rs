//! services/shell/src/console/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use std::sync::Arc;
use talentos_core::staff::StaffRole;
use talentos_core::{ChatClassifier, ChatSession, RoadmapSource, SessionController};

//=========================================================================================
// AppState (Shared, Read-Only)
//=========================================================================================

/// The shared application state, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub roadmaps: Arc<dyn RoadmapSource>,
    pub classifier: Arc<ChatClassifier>,
}

//=========================================================================================
// ConsoleState (One Visitor's Session)
//=========================================================================================

/// Everything mutable for the visitor driving this console.
#[derive(Default)]
pub struct ConsoleState {
    pub session: SessionController,
    /// The open chat transcript. A new one starts each time the chat page is entered.
    pub chat: Option<ChatSession>,
    pub staff_role: Option<StaffRole>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh transcript greeting the current profile.
    pub fn open_chat(&mut self) -> &mut ChatSession {
        self.chat.insert(ChatSession::new(self.session.profile()))
    }

    /// The open transcript, starting one if none exists yet.
    pub fn chat_mut(&mut self) -> &mut ChatSession {
        let profile = self.session.profile();
        self.chat.get_or_insert_with(|| ChatSession::new(profile))
    }

    /// Forgets the visitor entirely.
    pub fn reset(&mut self) {
        self.session.logout();
        self.chat = None;
        self.staff_role = None;
    }
}
