//! Career recommendation table.
//!
//! Maps each trait to an ordered list of suggested career titles.

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::TraitKind;

/// Career titles per trait. Covers exactly the four traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMap {
    analytical: Vec<String>,
    creative: Vec<String>,
    social: Vec<String>,
    practical: Vec<String>,
}

impl Default for CareerMap {
    fn default() -> Self {
        fn titles(list: &[&str]) -> Vec<String> {
            list.iter().map(|t| (*t).to_string()).collect()
        }

        Self {
            analytical: titles(&[
                "Software Engineer",
                "Data Scientist",
                "Financial Analyst",
                "Research Scientist",
            ]),
            creative: titles(&[
                "Graphic Designer",
                "Content Writer",
                "Marketing Specialist",
                "Architect",
            ]),
            social: titles(&["Teacher", "Counselor", "Human Resources", "Social Worker"]),
            practical: titles(&[
                "Mechanical Engineer",
                "Chef",
                "Technician",
                "Project Manager",
            ]),
        }
    }
}

impl CareerMap {
    /// Careers for a trait, in recommendation order.
    pub fn recommend(&self, kind: TraitKind) -> &[String] {
        match kind {
            TraitKind::Analytical => &self.analytical,
            TraitKind::Creative => &self.creative,
            TraitKind::Social => &self.social,
            TraitKind::Practical => &self.practical,
        }
    }

    /// Strict lookup by trait name.
    pub fn lookup(&self, key: &str) -> Result<&[String], AssessmentError> {
        let kind: TraitKind = key.parse()?;
        Ok(self.recommend(kind))
    }

    /// Lookup by trait name that fails closed: unknown names yield no careers.
    pub fn recommend_key(&self, key: &str) -> &[String] {
        match self.lookup(key) {
            Ok(careers) => careers,
            Err(e) => {
                tracing::warn!("no careers for trait lookup: {e}");
                &[]
            }
        }
    }

    /// Replace the list for one trait.
    pub fn set(&mut self, kind: TraitKind, titles: Vec<String>) {
        let slot = match kind {
            TraitKind::Analytical => &mut self.analytical,
            TraitKind::Creative => &mut self.creative,
            TraitKind::Social => &mut self.social,
            TraitKind::Practical => &mut self.practical,
        };
        *slot = titles;
    }

    /// `(trait, careers)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKind, &[String])> + '_ {
        TraitKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.recommend(kind)))
    }
}
