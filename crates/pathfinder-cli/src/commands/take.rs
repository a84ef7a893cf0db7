//! The `pathfinder take` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use pathfinder_core::report::AssessmentReport;
use pathfinder_core::session::{Advance, AssessmentSession};
use pathfinder_core::AssessmentError;

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// 0-based option index.
    Select(usize),
    Next,
    Back,
    Quit,
    Unknown(String),
}

/// Render an engine error with the 1-based numbering the prompt uses.
fn describe(err: &AssessmentError) -> String {
    match err {
        AssessmentError::InvalidOption {
            position,
            option,
            option_count,
        } => format!(
            "Option {} is not available for question {} (choose 1-{option_count})",
            option + 1,
            position + 1
        ),
        AssessmentError::InvalidPosition {
            position,
            question_count,
        } => format!(
            "Question {} does not exist ({question_count} questions)",
            position + 1
        ),
        AssessmentError::AnswerRequired { position } => {
            format!("Question {} must be answered before moving on", position + 1)
        }
        other => other.to_string(),
    }
}

/// Print an input error and keep prompting; anything else ends the session.
fn report_input_error(err: AssessmentError) -> Result<()> {
    if err.is_input_error() {
        println!("{}", describe(&err));
        Ok(())
    } else {
        Err(err.into())
    }
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "n" | "next" => Input::Next,
        "b" | "back" => Input::Back,
        "q" | "quit" => Input::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Input::Select(n - 1),
            _ => Input::Unknown(line.to_string()),
        },
    }
}

pub fn execute(
    bank: Option<PathBuf>,
    allow_skip: bool,
    save: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, assessment) = super::load_context(bank, config_path, allow_skip)?;
    let mut session = AssessmentSession::with_policy(assessment, config.policy());

    println!(
        "{} ({} questions)",
        session.assessment().bank.name(),
        session.question_count()
    );
    println!("Enter an option number, n for next, b for back, q to quit.");
    print_question(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("input ended before the assessment was completed");
        };
        let line = line.context("failed to read input")?;

        match parse_input(&line) {
            Input::Select(option) => match session.answer_current(option) {
                Ok(()) => {
                    let label = &session.current_question().options[option];
                    println!("Selected: {label}");
                }
                Err(e) => report_input_error(e)?,
            },
            Input::Next => match session.advance() {
                Ok(Advance::Moved { .. }) => print_question(&session),
                Ok(Advance::Completed(_)) => break,
                Err(e) => report_input_error(e)?,
            },
            Input::Back => match session.retreat() {
                Ok(_) => print_question(&session),
                Err(e) => report_input_error(e)?,
            },
            Input::Quit => {
                println!("Assessment abandoned.");
                return Ok(());
            }
            Input::Unknown(text) => {
                println!("Unrecognized input: {text}. Use an option number, n, b, or q.");
            }
        }
    }

    let report = AssessmentReport::from_session(&session)?;
    println!();
    super::print_report(&report);

    if save || output.is_some() {
        let dir = output.unwrap_or(config.output_dir);
        let path = dir.join(report.file_name());
        report.save_json(&path)?;
        tracing::info!(report = %report.id, "saved report to {}", path.display());
        println!("\nReport saved to {}", path.display());
    }

    Ok(())
}

fn print_question(session: &AssessmentSession) {
    let question = session.current_question();
    println!();
    println!(
        "Question {} of {} ({}% complete)",
        session.position() + 1,
        session.question_count(),
        session.progress_percent()
    );
    println!("{}", question.prompt);
    let chosen = session.ledger().get(session.position());
    for (i, option) in question.options.iter().enumerate() {
        let marker = if chosen == Some(i) { "*" } else { " " };
        println!(" {marker} {}. {option}", i + 1);
    }
}
