//! Assessment reports with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AssessmentError;
use crate::ledger::AnswerLedger;
use crate::model::TraitKind;
use crate::scoring::{TraitShare, TraitTally};
use crate::session::AssessmentSession;

/// The record of one completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the question bank.
    pub bank: BankSummary,
    /// The answers given.
    pub answers: AnswerLedger,
    pub tally: TraitTally,
    pub dominant: TraitKind,
    pub careers: Vec<String>,
    /// Per-trait share of all questions.
    pub profile: Vec<TraitShare>,
}

/// Summary of a question bank (without the questions themselves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Build a report from a completed session.
    pub fn from_session(session: &AssessmentSession) -> Result<Self, AssessmentError> {
        let outcome = session.outcome().ok_or(AssessmentError::NotCompleted)?;
        let bank = &session.assessment().bank;

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id().to_string(),
                name: bank.name().to_string(),
                question_count: bank.len(),
            },
            answers: session.ledger().clone(),
            tally: outcome.tally,
            dominant: outcome.dominant,
            careers: outcome.careers.clone(),
            profile: outcome.tally.profile(bank.len()),
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// File name used when saving into an output directory.
    pub fn file_name(&self) -> String {
        format!("{}-{}.json", self.bank.id, self.id)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {} results\n\n", self.bank.name));
        md.push_str(&format!(
            "**Dominant trait:** {} ({} of {} answers)\n\n",
            self.dominant,
            self.tally.get(self.dominant),
            self.answers.len()
        ));

        md.push_str("### Strengths profile\n\n");
        md.push_str("| Trait | Score | Share |\n");
        md.push_str("|-------|-------|-------|\n");
        for row in &self.profile {
            md.push_str(&format!(
                "| {} | {}/{} | {:.0}% |\n",
                row.kind,
                row.count,
                self.bank.question_count,
                row.share * 100.0
            ));
        }
        md.push('\n');

        md.push_str("### Recommended careers\n\n");
        for career in &self.careers {
            md.push_str(&format!("- {career}\n"));
        }

        md
    }
}
