use serde::Serialize;

use crate::models::domain::{Difficulty, Operation, Question, Student};

/// Question as sent to a student-facing surface: the correct answer is
/// withheld so a transport layer cannot leak it before the check.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: String,
    pub question: String,
    pub options: Vec<i32>,
    pub operation: Operation,
    pub difficulty: Difficulty,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            id: question.id.clone(),
            question: question.text.clone(),
            options: question.options.clone(),
            operation: question.operation,
            difficulty: question.difficulty,
        }
    }
}

/// One leaderboard row. Accuracy is a rounded percentage, matching what the
/// board displays.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub roll_number: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub accuracy_percent: u32,
}

impl LeaderboardEntry {
    pub fn from_ranked(rank: usize, student: &Student) -> Self {
        LeaderboardEntry {
            rank,
            name: student.name.clone(),
            roll_number: student.roll_number.clone(),
            class_name: student.class_name.clone(),
            score: student.score,
            total_questions: student.total_questions,
            accuracy_percent: (student.accuracy() * 100.0).round() as u32,
        }
    }
}
