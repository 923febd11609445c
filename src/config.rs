use std::env;

/// Engine limits. The defaults reproduce the reference behavior; the env
/// overrides exist for hosts that want a different repeat window without
/// recompiling.
#[derive(Clone, Copy, Debug)]
pub struct QuizConfig {
    /// Rolling question-history window, newest first.
    pub history_limit: usize,
    /// How far back pool-mode looks when avoiding a recently served question.
    pub recent_repeat_window: usize,
    /// Attempts at drawing a non-repeated question before accepting a repeat.
    pub regenerate_attempt_limit: usize,
    /// Attempts at finding distinct distractors before giving up.
    pub distractor_attempt_limit: usize,
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self {
            history_limit: env::var("MATHQUEST_HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            recent_repeat_window: env::var("MATHQUEST_RECENT_REPEAT_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            regenerate_attempt_limit: env::var("MATHQUEST_REGENERATE_ATTEMPT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            distractor_attempt_limit: env::var("MATHQUEST_DISTRACTOR_ATTEMPT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self::default()
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            history_limit: 20,
            recent_repeat_window: 5,
            regenerate_attempt_limit: 50,
            distractor_attempt_limit: 1000,
        }
    }
}
