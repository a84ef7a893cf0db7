//! The `pathfinder score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use pathfinder_core::report::AssessmentReport;
use pathfinder_core::session::AssessmentSession;

/// Parse "0,1,-,3" into per-question options; `-` or an empty slot is unanswered.
fn parse_answers(list: &str) -> Result<Vec<Option<usize>>> {
    list.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, token)| match token {
            "" | "-" => Ok(None),
            _ => token
                .parse::<usize>()
                .map(Some)
                .with_context(|| format!("answer {} is not an option index: {token}", i + 1)),
        })
        .collect()
}

pub fn execute(
    answers: String,
    bank: Option<PathBuf>,
    allow_skip: bool,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let answers = parse_answers(&answers)?;
    let (config, assessment) = super::load_context(bank, config_path, allow_skip)?;
    let mut session = AssessmentSession::with_policy(assessment, config.policy());

    if answers.len() > session.question_count() {
        anyhow::bail!(
            "{} answers given but the bank has {} questions",
            answers.len(),
            session.question_count()
        );
    }

    for position in 0..session.question_count() {
        if let Some(Some(option)) = answers.get(position) {
            session.record_answer(position, *option)?;
        }
        session.advance()?;
    }

    let report = AssessmentReport::from_session(&session)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" | "md" => println!("{}", report.to_markdown()),
        _ => super::print_report(&report),
    }

    Ok(())
}
