use std::collections::VecDeque;

use super::question::Question;

/// What the tracker remembers about a served question. Enough to match
/// generated questions by text and pool questions by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
}

/// Bounded rolling window of recently served questions, newest first. Used
/// only for repeat-avoidance.
#[derive(Clone, Debug)]
pub struct QuestionHistory {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl QuestionHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Prepend the question and truncate to the window size.
    pub fn record(&mut self, question: &Question) {
        self.entries.push_front(HistoryEntry {
            id: question.id.clone(),
            text: question.text.clone(),
        });
        self.entries.truncate(self.limit);
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.entries.iter().any(|entry| entry.text == text)
    }

    /// Whether the id appears within the newest `window` entries.
    pub fn seen_recently(&self, id: &str, window: usize) -> bool {
        self.entries.iter().take(window).any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
