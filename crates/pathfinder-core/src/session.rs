//! Progression controller: one user's run through a question bank.
//!
//! A session moves through `InProgress(position)` states and ends in
//! `Completed`. Rejected calls never mutate the session.

use std::sync::Arc;

use crate::error::AssessmentError;
use crate::ledger::AnswerLedger;
use crate::model::{Assessment, Question};
use crate::scoring::{self, AssessmentOutcome, TraitTally};

/// Engine-level rules a session enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    /// Reject `advance` on an unanswered question.
    pub require_answer: bool,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            require_answer: true,
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress { position: usize },
    Completed,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at `position`.
    Moved { position: usize },
    /// The last question was passed; the session is now terminal.
    Completed(AssessmentOutcome),
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    assessment: Arc<Assessment>,
    policy: SessionPolicy,
    position: usize,
    ledger: AnswerLedger,
    outcome: Option<AssessmentOutcome>,
}

impl AssessmentSession {
    /// Start at the first question with an empty ledger.
    pub fn new(assessment: Arc<Assessment>) -> Self {
        Self::with_policy(assessment, SessionPolicy::default())
    }

    pub fn with_policy(assessment: Arc<Assessment>, policy: SessionPolicy) -> Self {
        Self {
            assessment,
            policy,
            position: 0,
            ledger: AnswerLedger::new(),
            outcome: None,
        }
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn policy(&self) -> SessionPolicy {
        self.policy
    }

    /// Current 0-based question position. Stays on the last question once
    /// the session completes.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::Completed
        } else {
            Phase::InProgress {
                position: self.position,
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        self.outcome.is_some()
    }

    /// The question at the current position.
    pub fn current_question(&self) -> &Question {
        &self.assessment.bank.questions()[self.position]
    }

    pub fn question_count(&self) -> usize {
        self.assessment.bank.len()
    }

    /// Record the option chosen for `position`, replacing any earlier
    /// choice. Does not move the session.
    pub fn record_answer(&mut self, position: usize, option: usize) -> Result<(), AssessmentError> {
        if self.is_completed() {
            return Err(AssessmentError::SessionCompleted);
        }
        let question =
            self.assessment
                .bank
                .get(position)
                .ok_or(AssessmentError::InvalidPosition {
                    position,
                    question_count: self.question_count(),
                })?;
        if option >= question.option_count() {
            return Err(AssessmentError::InvalidOption {
                position,
                option,
                option_count: question.option_count(),
            });
        }

        if let Some(previous) = self.ledger.record(position, option) {
            tracing::debug!(position, previous, option, "answer replaced");
        } else {
            tracing::debug!(position, option, "answer recorded");
        }
        Ok(())
    }

    /// Record an answer for the current question.
    pub fn answer_current(&mut self, option: usize) -> Result<(), AssessmentError> {
        self.record_answer(self.position, option)
    }

    /// Move to the next question, or complete the session from the last one.
    pub fn advance(&mut self) -> Result<Advance, AssessmentError> {
        if self.is_completed() {
            return Err(AssessmentError::SessionCompleted);
        }
        if self.policy.require_answer && !self.ledger.is_answered(self.position) {
            return Err(AssessmentError::AnswerRequired {
                position: self.position,
            });
        }

        if self.position < self.assessment.bank.last_position() {
            self.position += 1;
            tracing::debug!(position = self.position, "advanced");
            return Ok(Advance::Moved {
                position: self.position,
            });
        }

        let outcome = self.assessment.evaluate(&self.ledger);
        tracing::info!(
            bank = self.assessment.bank.id(),
            answered = self.ledger.len(),
            dominant = %outcome.dominant,
            "assessment completed"
        );
        self.outcome = Some(outcome.clone());
        Ok(Advance::Completed(outcome))
    }

    /// Step back one question. A no-op on the first question. The answer
    /// at the position left behind is kept.
    pub fn retreat(&mut self) -> Result<usize, AssessmentError> {
        if self.is_completed() {
            return Err(AssessmentError::SessionCompleted);
        }
        if self.position > 0 {
            self.position -= 1;
            tracing::debug!(position = self.position, "retreated");
        }
        Ok(self.position)
    }

    /// `(position + 1) / question_count`, always in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.position + 1) as f64 / self.question_count() as f64
    }

    /// Progress rounded to a whole percent, for display.
    pub fn progress_percent(&self) -> u32 {
        (self.progress_fraction() * 100.0).round() as u32
    }

    /// Tally of the answers recorded so far. Depends only on the ledger.
    pub fn score(&self) -> TraitTally {
        scoring::score(&self.ledger)
    }

    /// The result, once completed.
    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        self.outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::model::TraitKind;

    fn session() -> AssessmentSession {
        AssessmentSession::new(Arc::new(builtin::career_aptitude()))
    }

    fn lenient() -> AssessmentSession {
        AssessmentSession::with_policy(
            Arc::new(builtin::career_aptitude()),
            SessionPolicy {
                require_answer: false,
            },
        )
    }

    fn answer_all(session: &mut AssessmentSession, options: &[usize]) -> AssessmentOutcome {
        for &option in options {
            session.answer_current(option).unwrap();
            if let Advance::Completed(outcome) = session.advance().unwrap() {
                return outcome;
            }
        }
        panic!("session did not complete");
    }

    #[test]
    fn starts_at_first_question() {
        let s = session();
        assert_eq!(s.position(), 0);
        assert_eq!(s.phase(), Phase::InProgress { position: 0 });
        assert!(s.ledger().is_empty());
        assert!(!s.is_completed());
        assert_eq!(s.current_question().id, 1);
    }

    #[test]
    fn record_does_not_advance() {
        let mut s = session();
        s.record_answer(0, 2).unwrap();
        s.record_answer(0, 1).unwrap();
        assert_eq!(s.position(), 0);
        assert_eq!(s.ledger().get(0), Some(1));
    }

    #[test]
    fn out_of_range_option_leaves_ledger_unchanged() {
        let mut s = session();
        s.record_answer(0, 3).unwrap();
        let err = s.record_answer(0, 4).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidOption {
                position: 0,
                option: 4,
                option_count: 4,
            }
        );
        assert_eq!(s.ledger().get(0), Some(3));
        assert_eq!(s.ledger().len(), 1);
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let mut s = session();
        let err = s.record_answer(5, 0).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidPosition {
                position: 5,
                question_count: 5,
            }
        );
        assert!(s.ledger().is_empty());
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut s = session();
        assert_eq!(
            s.advance(),
            Err(AssessmentError::AnswerRequired { position: 0 })
        );
        assert_eq!(s.position(), 0);

        s.answer_current(0).unwrap();
        assert_eq!(s.advance(), Ok(Advance::Moved { position: 1 }));
    }

    #[test]
    fn retreat_at_start_is_idempotent() {
        let mut s = session();
        s.answer_current(2).unwrap();
        for _ in 0..3 {
            assert_eq!(s.retreat(), Ok(0));
        }
        assert_eq!(s.position(), 0);
        assert_eq!(s.ledger().get(0), Some(2));
    }

    #[test]
    fn retreat_keeps_answers() {
        let mut s = session();
        s.answer_current(1).unwrap();
        s.advance().unwrap();
        s.answer_current(3).unwrap();
        assert_eq!(s.retreat(), Ok(0));
        assert_eq!(s.ledger().get(1), Some(3));
        assert_eq!(s.current_question().id, 1);
    }

    #[test]
    fn progress_is_monotonic_across_advances() {
        let mut s = session();
        let mut last = s.progress_fraction();
        assert!((last - 0.2).abs() < 1e-9);
        for _ in 0..4 {
            s.answer_current(0).unwrap();
            s.advance().unwrap();
            let now = s.progress_fraction();
            assert!(now >= last);
            assert!(now > 0.0 && now <= 1.0);
            last = now;
        }
        assert_eq!(s.progress_percent(), 100);
        s.retreat().unwrap();
        assert_eq!(s.progress_percent(), 80);
    }

    #[test]
    fn completes_exactly_once() {
        let mut s = session();
        let outcome = answer_all(&mut s, &[0, 1, 2, 3, 0]);
        assert!(s.is_completed());
        assert_eq!(s.phase(), Phase::Completed);
        assert_eq!(s.position(), 4);
        assert_eq!(s.progress_fraction(), 1.0);
        assert_eq!(outcome.dominant, TraitKind::Analytical);
        assert_eq!(
            outcome.careers,
            vec![
                "Software Engineer",
                "Data Scientist",
                "Financial Analyst",
                "Research Scientist"
            ]
        );
        assert_eq!(s.outcome(), Some(&outcome));

        assert_eq!(s.advance(), Err(AssessmentError::SessionCompleted));
        assert_eq!(s.retreat(), Err(AssessmentError::SessionCompleted));
        assert_eq!(s.answer_current(1), Err(AssessmentError::SessionCompleted));
        assert_eq!(s.ledger().get(4), Some(0));
    }

    #[test]
    fn score_before_and_after_completion_matches() {
        let mut s = session();
        for &option in &[3, 3, 1, 3] {
            s.answer_current(option).unwrap();
            s.advance().unwrap();
        }
        s.answer_current(2).unwrap();
        let before = s.score();
        let outcome = match s.advance().unwrap() {
            Advance::Completed(outcome) => outcome,
            other => panic!("expected completion, got {other:?}"),
        };
        assert_eq!(before, outcome.tally);
        assert_eq!(s.score(), outcome.tally);
        assert_eq!(outcome.dominant, TraitKind::Practical);
        assert_eq!(outcome.careers[0], "Mechanical Engineer");
    }

    #[test]
    fn lenient_policy_allows_empty_completion() {
        let mut s = lenient();
        let mut outcome = None;
        for _ in 0..5 {
            if let Advance::Completed(o) = s.advance().unwrap() {
                outcome = Some(o);
            }
        }
        let outcome = outcome.expect("completed");
        assert_eq!(outcome.tally, TraitTally::default());
        assert_eq!(outcome.dominant, TraitKind::Analytical);
        assert_eq!(outcome.careers.len(), 4);
    }
}
