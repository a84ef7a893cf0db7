//! Trait scoring and dominant-trait resolution.

use serde::{Deserialize, Serialize};

use crate::ledger::AnswerLedger;
use crate::model::TraitKind;

/// Answer counts per trait. All four traits are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitTally {
    pub analytical: u32,
    pub creative: u32,
    pub social: u32,
    pub practical: u32,
}

impl TraitTally {
    pub fn get(&self, kind: TraitKind) -> u32 {
        match kind {
            TraitKind::Analytical => self.analytical,
            TraitKind::Creative => self.creative,
            TraitKind::Social => self.social,
            TraitKind::Practical => self.practical,
        }
    }

    fn increment(&mut self, kind: TraitKind) {
        let slot = match kind {
            TraitKind::Analytical => &mut self.analytical,
            TraitKind::Creative => &mut self.creative,
            TraitKind::Social => &mut self.social,
            TraitKind::Practical => &mut self.practical,
        };
        *slot += 1;
    }

    /// `(trait, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKind, u32)> + '_ {
        TraitKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Sum of all four counts.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, count)| count).sum()
    }

    /// The trait with the highest count.
    ///
    /// Ties go to the earliest trait in enumeration order
    /// (analytical, creative, social, practical), so an all-zero tally
    /// resolves to analytical.
    pub fn dominant(&self) -> TraitKind {
        let mut best = TraitKind::Analytical;
        for (kind, count) in self.iter() {
            if count > self.get(best) {
                best = kind;
            }
        }
        best
    }

    /// Share of `question_count` questions that went to `kind`, in `[0, 1]`.
    pub fn share(&self, kind: TraitKind, question_count: usize) -> f64 {
        if question_count == 0 {
            return 0.0;
        }
        f64::from(self.get(kind)) / question_count as f64
    }

    /// Per-trait shares in enumeration order.
    pub fn profile(&self, question_count: usize) -> Vec<TraitShare> {
        self.iter()
            .map(|(kind, count)| TraitShare {
                kind,
                count,
                share: self.share(kind, question_count),
            })
            .collect()
    }
}

/// One row of a strengths profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitShare {
    #[serde(rename = "trait")]
    pub kind: TraitKind,
    pub count: u32,
    pub share: f64,
}

/// What a completed session produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub tally: TraitTally,
    pub dominant: TraitKind,
    pub careers: Vec<String>,
}

/// Tally a ledger. Pure: the same ledger always yields the same tally.
///
/// Each answer counts toward the trait at its option position. Option
/// indices past the last trait contribute nothing.
pub fn score(ledger: &AnswerLedger) -> TraitTally {
    let mut tally = TraitTally::default();
    for (_, option) in ledger.iter() {
        if let Some(kind) = TraitKind::from_option_index(option) {
            tally.increment(kind);
        }
    }
    tally
}
