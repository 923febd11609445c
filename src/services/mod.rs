pub mod leaderboard_service;
pub mod question_service;
pub mod registry_service;
pub mod session_service;

pub use leaderboard_service::LeaderboardService;
pub use question_service::QuestionService;
pub use registry_service::SessionRegistry;
pub use session_service::{AnswerCheck, QuizSession};
