use crate::errors::{QuizError, QuizResult};
use crate::models::domain::{CustomQuestion, Difficulty, Operation};

#[cfg(test)]
use mockall::automock;

/// Store of teacher-authored questions. Durable persistence lives outside
/// the core; the in-memory implementation backs tests and single-process
/// deployments.
#[cfg_attr(test, automock)]
pub trait QuestionBankRepository {
    fn add(&mut self, question: CustomQuestion) -> QuizResult<CustomQuestion>;
    fn remove(&mut self, id: &str) -> QuizResult<()>;
    fn list(&self) -> Vec<CustomQuestion>;
    fn find_for(&self, operation: Operation, difficulty: Difficulty) -> Vec<CustomQuestion>;
    /// Operations represented in the bank, in insertion order.
    fn available_operations(&self) -> Vec<Operation>;
    /// Difficulties represented in the bank, in insertion order.
    fn available_difficulties(&self) -> Vec<Difficulty>;
}

#[derive(Debug, Default)]
pub struct InMemoryQuestionBank {
    questions: Vec<CustomQuestion>,
}

impl InMemoryQuestionBank {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionBankRepository for InMemoryQuestionBank {
    fn add(&mut self, question: CustomQuestion) -> QuizResult<CustomQuestion> {
        if self.questions.iter().any(|q| q.id == question.id) {
            return Err(QuizError::AlreadyExists(format!(
                "question '{}'",
                question.id
            )));
        }

        log::info!(
            "added custom question '{}' for {}/{}",
            question.id,
            question.operation,
            question.difficulty
        );
        self.questions.push(question.clone());
        Ok(question)
    }

    fn remove(&mut self, id: &str) -> QuizResult<()> {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);

        if self.questions.len() == before {
            return Err(QuizError::NotFound(format!("question '{id}'")));
        }
        Ok(())
    }

    fn list(&self) -> Vec<CustomQuestion> {
        self.questions.clone()
    }

    fn find_for(&self, operation: Operation, difficulty: Difficulty) -> Vec<CustomQuestion> {
        self.questions
            .iter()
            .filter(|q| q.matches(operation, difficulty))
            .cloned()
            .collect()
    }

    fn available_operations(&self) -> Vec<Operation> {
        let mut operations = Vec::new();
        for question in &self.questions {
            if !operations.contains(&question.operation) {
                operations.push(question.operation);
            }
        }
        operations
    }

    fn available_difficulties(&self) -> Vec<Difficulty> {
        let mut difficulties = Vec::new();
        for question in &self.questions {
            if !difficulties.contains(&question.difficulty) {
                difficulties.push(question.difficulty);
            }
        }
        difficulties
    }
}
