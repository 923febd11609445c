pub mod question_bank_repository;
pub mod student_repository;

pub use question_bank_repository::{InMemoryQuestionBank, QuestionBankRepository};
pub use student_repository::{InMemoryStudentRoster, StudentRepository};
