//! The answer ledger: which option was chosen for each answered question.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from 0-based question position to 0-based option index.
///
/// An entry exists only for questions the user has answered. Sessions own
/// their ledger and are the only writers; scoring reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerLedger {
    entries: BTreeMap<usize, usize>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The option chosen for `position`, if any.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.entries.get(&position).copied()
    }

    pub fn is_answered(&self, position: usize) -> bool {
        self.entries.contains_key(&position)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(position, option)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().map(|(&p, &o)| (p, o))
    }

    /// Overwrite the answer for `position`. Bounds are checked by the caller.
    pub(crate) fn record(&mut self, position: usize, option: usize) -> Option<usize> {
        self.entries.insert(position, option)
    }
}

impl FromIterator<(usize, usize)> for AnswerLedger {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
