pub mod request;
pub mod response;

pub use request::{CustomQuestionRequest, RegisterStudentRequest};
pub use response::{LeaderboardEntry, QuestionDto};
