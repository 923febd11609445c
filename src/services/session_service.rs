use uuid::Uuid;

use crate::config::QuizConfig;
use crate::errors::{QuizError, QuizResult};
use crate::models::domain::{CustomQuestion, Difficulty, Operation, Question, QuestionHistory};
use crate::services::question_service::QuestionService;

/// Outcome of checking one answer against the active question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerCheck {
    pub correct: bool,
    pub correct_answer: i32,
    pub score: u32,
}

/// One student's quiz run: the active question, the running score and the
/// repeat-avoidance history, all owned by the session. Answering never
/// advances the question; callers re-enter through `start_question` when the
/// student moves on.
pub struct QuizSession {
    id: Uuid,
    operation: Operation,
    difficulty: Difficulty,
    score: u32,
    current_question: Option<Question>,
    history: QuestionHistory,
    questions: QuestionService,
}

impl QuizSession {
    pub fn new(operation: Operation, difficulty: Difficulty, config: QuizConfig) -> Self {
        Self::with_service(operation, difficulty, config, QuestionService::new(config))
    }

    /// Construct with an explicit question service, e.g. one with a pinned
    /// randomness source.
    pub fn with_service(
        operation: Operation,
        difficulty: Difficulty,
        config: QuizConfig,
        questions: QuestionService,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation,
            difficulty,
            score: 0,
            current_question: None,
            history: QuestionHistory::new(config.history_limit),
            questions,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current_question.is_some()
    }

    pub fn history(&self) -> &QuestionHistory {
        &self.history
    }

    /// Serve the next question: teacher content when the pool covers the
    /// session's pair, generated otherwise.
    pub fn start_question(&mut self, pool: &[CustomQuestion]) -> QuizResult<&Question> {
        let question = self.questions.next_question(
            pool,
            self.operation,
            self.difficulty,
            &mut self.history,
        )?;
        Ok(self.current_question.insert(question))
    }

    /// Serve a generated question regardless of pool contents.
    pub fn start_generated(&mut self) -> QuizResult<&Question> {
        let question =
            self.questions
                .next_generated(self.operation, self.difficulty, &mut self.history)?;
        Ok(self.current_question.insert(question))
    }

    /// Serve strictly from the pool; `EmptyPool` when the teacher has not
    /// covered the session's pair.
    pub fn start_from_pool(&mut self, pool: &[CustomQuestion]) -> QuizResult<&Question> {
        let question = self.questions.next_from_pool(
            pool,
            self.operation,
            self.difficulty,
            &mut self.history,
        )?;
        Ok(self.current_question.insert(question))
    }

    /// Compare against the active question; the score moves only on a
    /// correct answer and the question stays active.
    pub fn check_answer(&mut self, selected: i32) -> QuizResult<AnswerCheck> {
        let question = self
            .current_question
            .as_ref()
            .ok_or(QuizError::NoActiveQuestion)?;

        let correct = selected == question.answer;
        if correct {
            self.score += 1;
        }

        Ok(AnswerCheck {
            correct,
            correct_answer: question.answer,
            score: self.score,
        })
    }

    /// Zero the score, forget the history, serve a fresh question.
    pub fn reset(&mut self, pool: &[CustomQuestion]) -> QuizResult<&Question> {
        self.score = 0;
        self.history.clear();
        self.current_question = None;
        self.start_question(pool)
    }

    /// Switching operation serves a fresh question for the new pair.
    pub fn set_operation(
        &mut self,
        operation: Operation,
        pool: &[CustomQuestion],
    ) -> QuizResult<&Question> {
        self.operation = operation;
        self.start_question(pool)
    }

    /// Switching difficulty serves a fresh question for the new pair.
    pub fn set_difficulty(
        &mut self,
        difficulty: Difficulty,
        pool: &[CustomQuestion],
    ) -> QuizResult<&Question> {
        self.difficulty = difficulty;
        self.start_question(pool)
    }
}
