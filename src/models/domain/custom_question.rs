use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::question::{Difficulty, Operation, Question};

/// A teacher-authored question. Unlike generated questions these persist
/// (externally) and are served repeatedly, so the stored record keeps the
/// wrong options separate from the correct answer; the shuffled option list
/// is assembled fresh on every serve.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomQuestion {
    pub id: String,
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: i32,
    /// 1 to 3 entries; 2 to 4 options in total once the answer is included.
    pub wrong_options: Vec<i32>,
    pub operation: Operation,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CustomQuestion {
    pub fn new(
        text: &str,
        correct_answer: i32,
        wrong_options: Vec<i32>,
        operation: Operation,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            correct_answer,
            wrong_options,
            operation,
            difficulty,
            created_at: Some(Utc::now()),
        }
    }

    /// All option values, correct answer first, unshuffled.
    pub fn option_values(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.wrong_options.len() + 1);
        values.push(self.correct_answer);
        values.extend_from_slice(&self.wrong_options);
        values
    }

    /// Build the servable question. The caller shuffles `options`.
    pub fn to_question(&self) -> Question {
        Question {
            id: self.id.clone(),
            text: self.text.clone(),
            options: self.option_values(),
            answer: self.correct_answer,
            operation: self.operation,
            difficulty: self.difficulty,
        }
    }

    pub fn matches(&self, operation: Operation, difficulty: Difficulty) -> bool {
        self.operation == operation && self.difficulty == difficulty
    }
}
