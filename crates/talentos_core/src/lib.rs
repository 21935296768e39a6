pub mod catalog;
pub mod chat;
pub mod chat_rules;
pub mod classifier;
pub mod dashboard;
pub mod discovery;
pub mod domain;
pub mod mentor;
pub mod navigation;
pub mod ports;
pub mod staff;

pub use catalog::RoadmapCatalog;
pub use chat::ChatSession;
pub use classifier::{
    classify_from_interests, classify_from_message, ChatClassification, ChatClassifier, MatchMode,
};
pub use domain::{
    CareerOption, Message, NavigationState, OnboardingForm, Page, PendingNavigation, Roadmap,
    Sender, UserProfile, DEFAULT_CAREER_PATH,
};
pub use navigation::{SessionController, Transition};
pub use ports::{PortError, PortResult, RoadmapSource};
