pub mod custom_question;
pub mod history;
pub mod question;
pub mod ranges;
pub mod student;

pub use custom_question::CustomQuestion;
pub use history::QuestionHistory;
pub use question::{Difficulty, Operation, Question};
pub use ranges::{operand_ranges, OperandRanges};
pub use student::Student;
