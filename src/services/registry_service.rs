use std::collections::HashMap;

use uuid::Uuid;

use crate::config::QuizConfig;
use crate::errors::{QuizError, QuizResult};
use crate::models::domain::{Difficulty, Operation};
use crate::services::session_service::QuizSession;

/// Server-side generalization of the single in-browser session: one isolated
/// `QuizSession` per session id. A request/response cycle touches exactly
/// one entry, so no locking is involved.
pub struct SessionRegistry {
    config: QuizConfig,
    sessions: HashMap<Uuid, QuizSession>,
}

impl SessionRegistry {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    pub fn open_session(&mut self, operation: Operation, difficulty: Difficulty) -> Uuid {
        let session = QuizSession::new(operation, difficulty, self.config);
        let id = session.id();
        log::info!("opened quiz session {id} for {operation}/{difficulty}");
        self.sessions.insert(id, session);
        id
    }

    pub fn session(&self, id: Uuid) -> QuizResult<&QuizSession> {
        self.sessions
            .get(&id)
            .ok_or_else(|| QuizError::NotFound(format!("session '{id}'")))
    }

    pub fn session_mut(&mut self, id: Uuid) -> QuizResult<&mut QuizSession> {
        self.sessions
            .get_mut(&id)
            .ok_or_else(|| QuizError::NotFound(format!("session '{id}'")))
    }

    /// Remove and return the session, e.g. when the student leaves.
    pub fn close_session(&mut self, id: Uuid) -> QuizResult<QuizSession> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or_else(|| QuizError::NotFound(format!("session '{id}'")))?;
        log::info!("closed quiz session {id} with score {}", session.score());
        Ok(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
