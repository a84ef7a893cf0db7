pub mod careers;
pub mod init;
pub mod score;
pub mod take;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pathfinder_core::config::{load_config_from, PathfinderConfig};
use pathfinder_core::model::Assessment;
use pathfinder_core::report::AssessmentReport;

/// Resolve config and question bank from command-line overrides.
pub fn load_context(
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
    allow_skip: bool,
) -> Result<(PathfinderConfig, Arc<Assessment>)> {
    let mut config = load_config_from(config_path.as_deref())?;
    if bank.is_some() {
        config.question_bank = bank;
    }
    if allow_skip {
        config.require_answer = false;
    }
    tracing::debug!(
        question_bank = ?config.question_bank,
        output_dir = %config.output_dir.display(),
        require_answer = config.require_answer,
        "resolved configuration"
    );
    let assessment = config.load_assessment()?;
    Ok((config, assessment))
}

pub fn print_report(report: &AssessmentReport) {
    let mut table = Table::new();
    table.set_header(vec!["Trait", "Score", "Share"]);

    for row in &report.profile {
        table.add_row(vec![
            Cell::new(row.kind),
            Cell::new(format!("{}/{}", row.count, report.bank.question_count)),
            Cell::new(format!("{:.0}%", row.share * 100.0)),
        ]);
    }

    println!("Assessment complete: {}", report.bank.name);
    println!("{table}");
    println!("Dominant trait: {}", report.dominant);
    println!("Recommended careers:");
    for (i, career) in report.careers.iter().enumerate() {
        println!("  {}. {career}", i + 1);
    }
}
