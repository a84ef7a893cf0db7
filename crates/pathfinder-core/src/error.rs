//! Assessment error types.
//!
//! Every error here is recoverable: the caller reports it and the session
//! it was raised against is left exactly as it was before the call.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the assessment engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The option index is outside `[0, option_count)` for the question.
    #[error("option {option} is out of range for question {position} ({option_count} options)")]
    InvalidOption {
        position: usize,
        option: usize,
        option_count: usize,
    },

    /// The question position is outside `[0, question_count)`.
    #[error("question {position} is out of range ({question_count} questions)")]
    InvalidPosition {
        position: usize,
        question_count: usize,
    },

    /// `advance` was called on a question that has no recorded answer.
    #[error("question {position} must be answered before advancing")]
    AnswerRequired { position: usize },

    /// A trait key outside analytical, creative, social, practical.
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    /// The session is terminal and accepts no further navigation or answers.
    #[error("session is already completed")]
    SessionCompleted,

    /// A result was requested from a session that has not completed.
    #[error("session has not completed yet")]
    NotCompleted,

    /// No session is registered under this id.
    #[error("unknown session: {0}")]
    UnknownSession(Uuid),

    /// The question bank violates a construction rule.
    #[error("invalid question bank: {0}")]
    InvalidQuestionBank(String),
}

impl AssessmentError {
    /// Returns `true` for errors caused by navigation or answer input, as
    /// opposed to malformed reference data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AssessmentError::InvalidOption { .. }
                | AssessmentError::InvalidPosition { .. }
                | AssessmentError::AnswerRequired { .. }
                | AssessmentError::SessionCompleted
        )
    }
}
