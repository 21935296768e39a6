//! crates/talentos_core/src/chat.rs
//!
//! The career mentor chat transcript. Each user turn is classified on its
//! own; the transcript only records what was said.

use crate::classifier::ChatClassifier;
use crate::domain::{CareerOption, Message, Page, Sender, UserProfile, DEFAULT_CAREER_PATH};
use crate::navigation::{SessionController, Transition};
use tracing::info;

pub struct ChatSession {
    messages: Vec<Message>,
    detected_career_path: String,
    selected_option: Option<String>,
    roadmap_ready: bool,
}

fn greeting(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "Hi {}! 👋 I'm your AI Career Mentor. I see you're interested in {}. I'm here to help you discover the perfect career path. What aspects of work are you most passionate about?",
            p.name,
            p.interests.join(", ")
        ),
        None => "Hi! 👋 I'm your AI Career Mentor. I'm here to help you discover the perfect career path based on your interests and goals. Tell me about yourself - what are you passionate about?".to_string(),
    }
}

fn confirmation(option: &CareerOption) -> String {
    format!(
        "Excellent choice! 🎉 {title} is a fantastic path. {description}.\n\n\
         I'll create a personalized learning roadmap tailored to help you become a {title}. \
         Your roadmap will include:\n\n\
         ✅ Beginner courses to build foundational skills\n\
         ✅ Intermediate courses to deepen your expertise\n\
         ✅ Pro-level courses for advanced mastery\n\
         ✅ Hands-on projects and real-world resources\n\n\
         Ready to start your journey? Click \"Generate My Roadmap\" below!",
        title = option.title,
        description = option.description
    )
}

impl ChatSession {
    pub fn new(profile: Option<&UserProfile>) -> Self {
        Self {
            messages: vec![Message::new(Sender::Assistant, greeting(profile))],
            detected_career_path: DEFAULT_CAREER_PATH.to_string(),
            selected_option: None,
            roadmap_ready: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn detected_career_path(&self) -> &str {
        &self.detected_career_path
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub fn roadmap_ready(&self) -> bool {
        self.roadmap_ready
    }

    /// The options offered by the most recent assistant reply, if any.
    pub fn latest_options(&self) -> Option<&[CareerOption]> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Assistant)
            .and_then(|m| m.career_options.as_deref())
    }

    /// Appends the user's message and the classified reply. Blank input is
    /// dropped and returns `None`.
    pub fn send(&mut self, classifier: &ChatClassifier, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::new(Sender::User, text));

        let classification = classifier.classify(text);
        info!(
            "Chat turn classified as '{}' (matched: {}).",
            classification.career_path, classification.matched
        );
        self.detected_career_path = classification.career_path;
        self.roadmap_ready = true;

        self.messages.push(
            Message::new(Sender::Assistant, classification.response)
                .with_options(classification.options),
        );
        self.messages.last()
    }

    /// Records the user's pick of a suggested option. The option's track,
    /// not its title, becomes the detected career path.
    pub fn choose_option(&mut self, option: &CareerOption) -> &Message {
        self.messages.push(Message::new(
            Sender::User,
            format!("I want to become a {}", option.title),
        ));
        self.selected_option = Some(option.title.clone());
        self.detected_career_path = option.track.clone();
        self.roadmap_ready = true;

        let reply = Message::new(Sender::Assistant, confirmation(option));
        self.messages.push(reply);
        &self.messages[self.messages.len() - 1]
    }

    /// Stages the roadmap for the detected career path.
    pub fn generate_roadmap(&self, session: &mut SessionController) -> Transition {
        let transition = session.navigate(Page::Roadmap, Some(&self.detected_career_path), true);
        session.select_career_path(&self.detected_career_path);
        transition
    }
}
