//! services/shell/src/console/loading.rs
//!
//! The timed loading interstitial shown between a staged navigation and its target page.

use async_stream::stream;
use futures::Stream;
use std::time::Duration;

/// The messages cycled through while loading, with how long each stays on screen.
pub const LOADING_STEPS: [(&str, u64); 4] = [
    ("Analyzing your interests...", 800),
    ("Identifying career paths...", 900),
    ("Curating personalized courses...", 850),
    ("Crafting your roadmap...", 950),
];

/// Milliseconds from the start of the interstitial until it completes.
pub const LOADING_TOTAL_MS: u64 = 3500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingEvent {
    Step { index: usize, text: &'static str },
    Complete,
}

fn scaled(ms: u64, scale: f64) -> Duration {
    Duration::from_millis((ms as f64 * scale).round() as u64)
}

/// Yields the first step at once, then each later step when the running total
/// of durations up to and including its own has elapsed. `Complete` follows once
/// the total duration is over. Every delay is multiplied by `scale`.
pub fn loading_sequence(scale: f64) -> impl Stream<Item = LoadingEvent> {
    stream! {
        let mut elapsed = Duration::ZERO;
        let mut cumulative_ms = 0;
        for (index, (text, duration_ms)) in LOADING_STEPS.iter().enumerate() {
            cumulative_ms += duration_ms;
            // The first timer re-selects step 0, which is already showing.
            if index > 0 {
                let due = scaled(cumulative_ms, scale);
                if due > elapsed {
                    tokio::time::sleep(due - elapsed).await;
                    elapsed = due;
                }
            }
            yield LoadingEvent::Step { index, text: *text };
        }

        let total = scaled(LOADING_TOTAL_MS, scale);
        if total > elapsed {
            tokio::time::sleep(total - elapsed).await;
        }
        yield LoadingEvent::Complete;
    }
}
