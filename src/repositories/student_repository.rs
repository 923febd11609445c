use crate::errors::{QuizError, QuizResult};
use crate::models::domain::Student;

#[cfg(test)]
use mockall::automock;

/// Roster of students keyed by roll number. Roll numbers compare
/// case-insensitively, matching how the sign-in form treats them.
#[cfg_attr(test, automock)]
pub trait StudentRepository {
    /// Register a student, or return the existing record when the roll
    /// number is already on the roster.
    fn save_student(&mut self, student: Student) -> QuizResult<Student>;
    fn find_by_roll_number(&self, roll_number: &str) -> Option<Student>;
    /// Apply one answered question to the student's progress counters.
    fn record_answer(&mut self, roll_number: &str, correct: bool) -> QuizResult<Student>;
    fn list_all(&self) -> Vec<Student>;
}

#[derive(Debug, Default)]
pub struct InMemoryStudentRoster {
    students: Vec<Student>,
}

impl InMemoryStudentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, roll_number: &str) -> Option<usize> {
        self.students
            .iter()
            .position(|s| s.roll_number.eq_ignore_ascii_case(roll_number))
    }
}

impl StudentRepository for InMemoryStudentRoster {
    fn save_student(&mut self, student: Student) -> QuizResult<Student> {
        if let Some(index) = self.position(&student.roll_number) {
            return Ok(self.students[index].clone());
        }

        log::info!(
            "registered student '{}' (roll {})",
            student.name,
            student.roll_number
        );
        self.students.push(student.clone());
        Ok(student)
    }

    fn find_by_roll_number(&self, roll_number: &str) -> Option<Student> {
        self.position(roll_number)
            .map(|index| self.students[index].clone())
    }

    fn record_answer(&mut self, roll_number: &str, correct: bool) -> QuizResult<Student> {
        let index = self
            .position(roll_number)
            .ok_or_else(|| QuizError::NotFound(format!("student with roll '{roll_number}'")))?;

        self.students[index].record_answer(correct);
        Ok(self.students[index].clone())
    }

    fn list_all(&self) -> Vec<Student> {
        self.students.clone()
    }
}
