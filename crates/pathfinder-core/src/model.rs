//! Core data model types for pathfinder.
//!
//! Questions, the question bank they live in, the closed set of traits
//! that answers are scored against, and the `Assessment` bundle that every
//! session is constructed from.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::careers::CareerMap;
use crate::error::AssessmentError;
use crate::ledger::AnswerLedger;
use crate::scoring::{self, AssessmentOutcome};

/// One of the four traits an answer can contribute to.
///
/// The declaration order is the enumeration order used for dominant-trait
/// tie-breaks and for positional option mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKind {
    Analytical,
    Creative,
    Social,
    Practical,
}

impl TraitKind {
    /// All traits in enumeration order.
    pub const ALL: [TraitKind; 4] = [
        TraitKind::Analytical,
        TraitKind::Creative,
        TraitKind::Social,
        TraitKind::Practical,
    ];

    /// Trait selected by choosing option `index` on any question.
    ///
    /// The mapping is positional and ignores the question's category tag.
    pub fn from_option_index(index: usize) -> Option<TraitKind> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraitKind::Analytical => "analytical",
            TraitKind::Creative => "creative",
            TraitKind::Social => "social",
            TraitKind::Practical => "practical",
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitKind {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analytical" => Ok(TraitKind::Analytical),
            "creative" => Ok(TraitKind::Creative),
            "social" => Ok(TraitKind::Social),
            "practical" => Ok(TraitKind::Practical),
            _ => Err(AssessmentError::UnknownTrait(s.to_string())),
        }
    }
}

/// Every question offers exactly one option per trait.
pub const OPTIONS_PER_QUESTION: usize = TraitKind::ALL.len();

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable ordinal identifier, unique within a bank.
    pub id: u32,
    /// The question text shown to the user.
    pub prompt: String,
    /// Option labels in display order.
    pub options: Vec<String>,
    /// Informational category tag. Not consulted by scoring.
    #[serde(default)]
    pub category: String,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// An ordered, validated, read-only sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    id: String,
    name: String,
    description: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting anything a session could not run against.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, AssessmentError> {
        let id = id.into();
        if questions.is_empty() {
            return Err(AssessmentError::InvalidQuestionBank(format!(
                "bank '{id}' has no questions"
            )));
        }

        let mut seen_ids = HashSet::new();
        for question in &questions {
            if !seen_ids.insert(question.id) {
                return Err(AssessmentError::InvalidQuestionBank(format!(
                    "duplicate question id: {}",
                    question.id
                )));
            }
            if question.prompt.trim().is_empty() {
                return Err(AssessmentError::InvalidQuestionBank(format!(
                    "question {} has an empty prompt",
                    question.id
                )));
            }
            if question.option_count() != OPTIONS_PER_QUESTION {
                return Err(AssessmentError::InvalidQuestionBank(format!(
                    "question {} has {} options, expected {OPTIONS_PER_QUESTION}",
                    question.id,
                    question.option_count()
                )));
            }
            if question.options.iter().any(|o| o.trim().is_empty()) {
                return Err(AssessmentError::InvalidQuestionBank(format!(
                    "question {} has an empty option label",
                    question.id
                )));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            questions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at a 0-based position.
    pub fn get(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    /// Never zero for a constructed bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Position of the final question.
    pub fn last_position(&self) -> usize {
        self.questions.len() - 1
    }
}

/// Read-only reference data a session runs against: the questions and the
/// career table used once the session completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub bank: QuestionBank,
    pub careers: CareerMap,
}

impl Assessment {
    pub fn new(bank: QuestionBank, careers: CareerMap) -> Self {
        Self { bank, careers }
    }

    /// Score a ledger and resolve its dominant trait and careers.
    pub fn evaluate(&self, ledger: &AnswerLedger) -> AssessmentOutcome {
        let tally = scoring::score(ledger);
        let dominant = tally.dominant();
        let careers = self.careers.recommend(dominant).to_vec();
        AssessmentOutcome {
            tally,
            dominant,
            careers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, options: usize) -> Question {
        Question {
            id,
            prompt: format!("Question {id}?"),
            options: (0..options).map(|i| format!("Option {i}")).collect(),
            category: "general".into(),
        }
    }

    #[test]
    fn trait_display_and_parse() {
        assert_eq!(TraitKind::Analytical.to_string(), "analytical");
        assert_eq!("Creative".parse::<TraitKind>().unwrap(), TraitKind::Creative);
        assert_eq!(" social ".parse::<TraitKind>().unwrap(), TraitKind::Social);
        assert_eq!(
            "curious".parse::<TraitKind>(),
            Err(AssessmentError::UnknownTrait("curious".into()))
        );
    }

    #[test]
    fn option_index_maps_positionally() {
        assert_eq!(TraitKind::from_option_index(0), Some(TraitKind::Analytical));
        assert_eq!(TraitKind::from_option_index(1), Some(TraitKind::Creative));
        assert_eq!(TraitKind::from_option_index(2), Some(TraitKind::Social));
        assert_eq!(TraitKind::from_option_index(3), Some(TraitKind::Practical));
        assert_eq!(TraitKind::from_option_index(4), None);
    }

    #[test]
    fn trait_serializes_lowercase() {
        let json = serde_json::to_string(&TraitKind::Practical).unwrap();
        assert_eq!(json, "\"practical\"");
    }

    #[test]
    fn bank_accepts_valid_questions() {
        let bank =
            QuestionBank::new("b", "Bank", "", vec![question(1, 4), question(2, 4)]).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.last_position(), 1);
        assert_eq!(bank.get(1).map(|q| q.id), Some(2));
        assert!(bank.get(2).is_none());
    }

    #[test]
    fn bank_rejects_empty() {
        let err = QuestionBank::new("b", "Bank", "", vec![]).unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidQuestionBank(_)));
    }

    #[test]
    fn bank_rejects_wrong_option_count() {
        let err = QuestionBank::new("b", "Bank", "", vec![question(1, 3)]).unwrap_err();
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn bank_rejects_duplicate_ids() {
        let err = QuestionBank::new("b", "Bank", "", vec![question(7, 4), question(7, 4)])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate question id: 7"));
    }

    #[test]
    fn bank_rejects_blank_labels() {
        let mut q = question(1, 4);
        q.options[2] = "   ".into();
        assert!(QuestionBank::new("b", "Bank", "", vec![q]).is_err());

        let mut q = question(1, 4);
        q.prompt = String::new();
        assert!(QuestionBank::new("b", "Bank", "", vec![q]).is_err());
    }
}
