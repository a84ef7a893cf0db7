//! Per-user session isolation.
//!
//! Every session gets its own ledger and position; the only thing sessions
//! share is the read-only `Assessment`.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::AssessmentError;
use crate::model::Assessment;
use crate::session::{AssessmentSession, SessionPolicy};

pub struct SessionRegistry {
    assessment: Arc<Assessment>,
    policy: SessionPolicy,
    sessions: HashMap<Uuid, AssessmentSession>,
}

impl SessionRegistry {
    pub fn new(assessment: Arc<Assessment>, policy: SessionPolicy) -> Self {
        Self {
            assessment,
            policy,
            sessions: HashMap::new(),
        }
    }

    /// Open a fresh session and return its id.
    pub fn start(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, self.fresh_session());
        tracing::debug!(%id, "session started");
        id
    }

    pub fn get(&self, id: Uuid) -> Result<&AssessmentSession, AssessmentError> {
        self.sessions
            .get(&id)
            .ok_or(AssessmentError::UnknownSession(id))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut AssessmentSession, AssessmentError> {
        self.sessions
            .get_mut(&id)
            .ok_or(AssessmentError::UnknownSession(id))
    }

    /// Retake: discard the session's progress and start over under the same id.
    pub fn restart(&mut self, id: Uuid) -> Result<&mut AssessmentSession, AssessmentError> {
        let fresh = self.fresh_session();
        let slot = self
            .sessions
            .get_mut(&id)
            .ok_or(AssessmentError::UnknownSession(id))?;
        *slot = fresh;
        tracing::debug!(%id, "session restarted");
        Ok(slot)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<AssessmentSession> {
        self.sessions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn fresh_session(&self) -> AssessmentSession {
        AssessmentSession::with_policy(Arc::clone(&self.assessment), self.policy)
    }
}
