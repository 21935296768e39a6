//! crates/talentos_core/src/classifier.rs
//!
//! Deterministic keyword classification of free text into a canonical
//! career path. Two entry points exist: a coarse one for the onboarding
//! interests field, and a richer one for chat messages that also returns
//! selectable career options.
//!
//! Both are pure functions of the input text and the static rule tables.

use crate::chat_rules::{ChatRule, OptionEntry, CHAT_RULES, DEFAULT_OPTIONS, DEFAULT_RESPONSE};
use crate::domain::{
    CareerOption, AI_ASSISTED_DEVELOPER, AI_ML_ENGINEER, CLOUD_RUN_DEVELOPER,
    GEMINI_AI_DEVELOPER, PRODUCT_MANAGER, QA_ENGINEER, SOFTWARE_ENGINEER,
};
use crate::ports::{PortError, PortResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

//=========================================================================================
// Onboarding Classification
//=========================================================================================

/// What onboarding classification returns when no keyword group matches.
pub const FALLBACK_CAREER_PATH: &str = SOFTWARE_ENGINEER;

struct InterestRule {
    keywords: &'static [&'static str],
    career_path: &'static str,
}

// First match wins. "ai" is deliberately shadowed by the Gemini and
// AI-assisted groups above it.
const INTEREST_RULES: &[InterestRule] = &[
    InterestRule {
        keywords: &["gemini", "llm", "vertex", "google ai"],
        career_path: GEMINI_AI_DEVELOPER,
    },
    InterestRule {
        keywords: &["vibe", "cursor", "copilot", "ai coding", "ai-assisted"],
        career_path: AI_ASSISTED_DEVELOPER,
    },
    InterestRule {
        keywords: &["cloud", "serverless", "devops", "cloud run"],
        career_path: CLOUD_RUN_DEVELOPER,
    },
    InterestRule {
        keywords: &["code", "coding", "programming", "software", "development", "engineer"],
        career_path: SOFTWARE_ENGINEER,
    },
    InterestRule {
        keywords: &["design", "ui", "ux", "figma"],
        career_path: PRODUCT_MANAGER,
    },
    InterestRule {
        keywords: &["product", "management", "strategy"],
        career_path: PRODUCT_MANAGER,
    },
    InterestRule {
        keywords: &["data", "analytics", "machine learning", "ml", "ai", "artificial intelligence"],
        career_path: AI_ML_ENGINEER,
    },
    InterestRule {
        keywords: &["test", "qa", "quality", "testing"],
        career_path: QA_ENGINEER,
    },
];

/// Maps the onboarding interests text to exactly one career path.
pub fn classify_from_interests(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    INTEREST_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|rule| rule.career_path)
        .unwrap_or(FALLBACK_CAREER_PATH)
}

//=========================================================================================
// Chat Classification
//=========================================================================================

/// How chat keywords are located in a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Raw substring containment: "ai" also matches inside "mountain".
    #[default]
    Substring,
    /// Keywords must sit on word boundaries.
    WholeWord,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "whole_word" | "whole-word" => Ok(MatchMode::WholeWord),
            other => Err(format!("'{}' is not a valid match mode", other)),
        }
    }
}

/// The result of classifying one chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatClassification {
    pub career_path: String,
    pub response: String,
    pub options: Vec<CareerOption>,
    /// False when the default reply was used.
    pub matched: bool,
}

fn to_options(entries: &[OptionEntry]) -> Vec<CareerOption> {
    entries
        .iter()
        .map(|(title, description, track)| CareerOption {
            title: title.to_string(),
            description: description.to_string(),
            track: track.to_string(),
        })
        .collect()
}

/// Classifies chat messages against the ordered rule table.
#[derive(Debug, Clone)]
pub struct ChatClassifier {
    mode: MatchMode,
    /// One boundary-anchored pattern per rule, only in `WholeWord` mode.
    patterns: Vec<Regex>,
}

impl Default for ChatClassifier {
    fn default() -> Self {
        Self::substring()
    }
}

impl ChatClassifier {
    pub fn new(mode: MatchMode) -> PortResult<Self> {
        let patterns = match mode {
            MatchMode::Substring => Vec::new(),
            MatchMode::WholeWord => CHAT_RULES
                .iter()
                .map(|rule| {
                    let alternatives: Vec<String> =
                        rule.keywords.iter().map(|kw| regex::escape(kw)).collect();
                    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
                        .map_err(|e| PortError::Unexpected(e.to_string()))
                })
                .collect::<PortResult<Vec<_>>>()?,
        };
        Ok(Self { mode, patterns })
    }

    pub fn substring() -> Self {
        Self {
            mode: MatchMode::Substring,
            patterns: Vec::new(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    fn rule_matches(&self, index: usize, rule: &ChatRule, lowered: &str) -> bool {
        match self.mode {
            MatchMode::Substring => rule.keywords.iter().any(|kw| lowered.contains(kw)),
            MatchMode::WholeWord => self
                .patterns
                .get(index)
                .is_some_and(|pattern| pattern.is_match(lowered)),
        }
    }

    /// Classifies a single message. Never fails: unmatched text gets the
    /// default reply with four generic options.
    pub fn classify(&self, text: &str) -> ChatClassification {
        let lowered = text.to_lowercase();

        let hit = CHAT_RULES
            .iter()
            .enumerate()
            .find(|(index, rule)| self.rule_matches(*index, rule, &lowered));

        match hit {
            Some((index, rule)) => {
                debug!("Chat rule {} matched -> {}", index, rule.career_path);
                ChatClassification {
                    career_path: rule.career_path.to_string(),
                    response: rule.response.to_string(),
                    options: to_options(&rule.options),
                    matched: true,
                }
            }
            None => {
                debug!("No chat rule matched, using the default reply.");
                ChatClassification {
                    career_path: SOFTWARE_ENGINEER.to_string(),
                    response: DEFAULT_RESPONSE.to_string(),
                    options: to_options(&DEFAULT_OPTIONS),
                    matched: false,
                }
            }
        }
    }
}

/// Substring-mode chat classification.
pub fn classify_from_message(text: &str) -> ChatClassification {
    ChatClassifier::substring().classify(text)
}
