use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student on the roster, identified by roll number. Progress counters
/// accumulate across quiz sessions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Student {
    pub fn new(name: &str, roll_number: &str, class_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            roll_number: roll_number.to_string(),
            class_name: class_name.to_string(),
            score: 0,
            total_questions: 0,
            correct_answers: 0,
            created_at: Some(Utc::now()),
        }
    }

    /// Update progress counters for one answered question. Wrong answers
    /// still count toward the attempt total.
    pub fn record_answer(&mut self, correct: bool) {
        self.total_questions += 1;
        if correct {
            self.score += 1;
            self.correct_answers += 1;
        }
    }

    /// Fraction of attempted questions answered correctly; 0.0 before any
    /// attempt.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.correct_answers) / f64::from(self.total_questions)
    }
}
