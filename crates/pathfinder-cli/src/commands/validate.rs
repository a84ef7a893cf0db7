//! The `pathfinder validate` command.

use std::path::PathBuf;

use anyhow::Result;

use pathfinder_core::careers::CareerMap;
use pathfinder_core::model::{Assessment, TraitKind};
use pathfinder_core::parser::{self, ValidationWarning};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let assessments = if bank_path.is_dir() {
        parser::load_assessment_directory(&bank_path)?
    } else {
        vec![parser::parse_assessment(&bank_path)?]
    };

    let mut total_warnings = 0;
    for assessment in &assessments {
        let warnings = parser::validate_assessment(assessment);
        print_bank(assessment, &warnings);
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

/// Traits whose career list differs from the built-in table.
fn career_overrides(careers: &CareerMap) -> Vec<TraitKind> {
    let defaults = CareerMap::default();
    TraitKind::ALL
        .into_iter()
        .filter(|&kind| careers.recommend(kind) != defaults.recommend(kind))
        .collect()
}

fn print_bank(assessment: &Assessment, warnings: &[ValidationWarning]) {
    let bank = &assessment.bank;
    println!("Question bank: {} ({} questions)", bank.name(), bank.len());
    println!("  id: {}", bank.id());

    let overrides = career_overrides(&assessment.careers);
    if overrides.is_empty() {
        println!("  careers: default table");
    } else {
        let names: Vec<&str> = overrides.iter().map(|k| k.as_str()).collect();
        println!("  careers: overrides {}", names.join(", "));
    }

    for w in warnings {
        match w.question_id {
            Some(id) => println!("  [question {id}] WARNING: {}", w.message),
            None => println!("  WARNING: {}", w.message),
        }
    }
}
