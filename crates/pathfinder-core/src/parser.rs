//! TOML question bank parser.
//!
//! Loads assessments from TOML files and directories, and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::careers::CareerMap;
use crate::model::{Assessment, Question, QuestionBank, TraitKind};

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    careers: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    prompt: String,
    #[serde(default)]
    category: String,
    options: Vec<String>,
}

/// Parse a single TOML file into an `Assessment`.
pub fn parse_assessment(path: &Path) -> Result<Assessment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_assessment_str(&content, path)
}

/// Parse a TOML string into an `Assessment` (useful for testing).
pub fn parse_assessment_str(content: &str, source_path: &Path) -> Result<Assessment> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            prompt: q.prompt,
            options: q.options,
            category: q.category,
        })
        .collect();

    let bank = QuestionBank::new(
        parsed.bank.id,
        parsed.bank.name,
        parsed.bank.description,
        questions,
    )
    .with_context(|| format!("invalid question bank: {}", source_path.display()))?;

    let mut careers = CareerMap::default();
    for (key, titles) in parsed.careers {
        let kind: TraitKind = key
            .parse()
            .with_context(|| format!("invalid [careers] table: {}", source_path.display()))?;
        careers.set(kind, titles);
    }

    Ok(Assessment::new(bank, careers))
}

/// Recursively load all `.toml` question bank files from a directory.
pub fn load_assessment_directory(dir: &Path) -> Result<Vec<Assessment>> {
    let mut assessments = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            assessments.extend(load_assessment_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_assessment(&path) {
                Ok(assessment) => assessments.push(assessment),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(assessments)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Check an assessment for issues that do not stop a session from running.
pub fn validate_assessment(assessment: &Assessment) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let bank = &assessment.bank;

    if bank.len() < TraitKind::ALL.len() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "only {} question(s); some traits can never lead the profile on their own",
                bank.len()
            ),
        });
    }

    for question in bank.questions() {
        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.trim().to_lowercase()) {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id),
                    message: format!("duplicate option label: {option}"),
                });
            }
        }

        if question.category.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: "category is empty".into(),
            });
        }
    }

    for (kind, careers) in assessment.careers.iter() {
        if careers.is_empty() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("no careers listed for {kind}"),
            });
        } else if careers.len() != 4 {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("{kind} lists {} careers, expected 4", careers.len()),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
id = "mini"
name = "Mini Aptitude"
description = "Two quick questions"

[[questions]]
id = 1
prompt = "Pick a weekend plan:"
category = "interests"
options = ["Puzzle marathon", "Sketching", "Volunteering", "Fixing a bike"]

[[questions]]
id = 2
prompt = "Pick a school club:"
category = "academics"
options = ["Chess", "Drama", "Debate", "Robotics"]

[careers]
creative = ["Illustrator", "Animator", "Copywriter", "Game Designer"]
"#;

    #[test]
    fn parse_valid_toml() {
        let a = parse_assessment_str(VALID_TOML, &PathBuf::from("mini.toml")).unwrap();
        assert_eq!(a.bank.id(), "mini");
        assert_eq!(a.bank.name(), "Mini Aptitude");
        assert_eq!(a.bank.len(), 2);
        assert_eq!(a.bank.questions()[1].options[3], "Robotics");
        assert_eq!(a.careers.recommend(TraitKind::Creative)[0], "Illustrator");
        assert_eq!(
            a.careers.recommend(TraitKind::Analytical)[0],
            "Software Engineer"
        );
    }

    #[test]
    fn parse_rejects_wrong_option_count() {
        let toml = r#"
[bank]
id = "bad"
name = "Bad"

[[questions]]
id = 1
prompt = "Too few options"
options = ["A", "B", "C"]
"#;
        let err = parse_assessment_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("expected 4"));
    }

    #[test]
    fn parse_rejects_unknown_trait_in_careers() {
        let toml = r#"
[bank]
id = "bad"
name = "Bad"

[[questions]]
id = 1
prompt = "Q"
options = ["A", "B", "C", "D"]

[careers]
curious = ["Explorer"]
"#;
        let err = parse_assessment_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown trait: curious"));
    }

    #[test]
    fn parse_rejects_empty_bank() {
        let toml = r#"
[bank]
id = "empty"
name = "Empty"
"#;
        assert!(parse_assessment_str(toml, &PathBuf::from("empty.toml")).is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_assessment_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_flags_small_banks_and_short_career_lists() {
        let a = parse_assessment_str(VALID_TOML, &PathBuf::from("mini.toml")).unwrap();
        let warnings = validate_assessment(&a);
        assert!(warnings.iter().any(|w| w.message.contains("only 2 question")));

        let toml = VALID_TOML.replace(
            r#"creative = ["Illustrator", "Animator", "Copywriter", "Game Designer"]"#,
            r#"creative = ["Illustrator"]"#,
        );
        let a = parse_assessment_str(&toml, &PathBuf::from("mini.toml")).unwrap();
        let warnings = validate_assessment(&a);
        assert!(warnings
            .iter()
            .any(|w| w.message == "creative lists 1 careers, expected 4"));
    }

    #[test]
    fn validate_flags_duplicate_options_and_missing_category() {
        let toml = r#"
[bank]
id = "dupes"
name = "Dupes"

[[questions]]
id = 9
prompt = "Q"
options = ["Same", "same", "Other", "Last"]
"#;
        let a = parse_assessment_str(toml, &PathBuf::from("dupes.toml")).unwrap();
        let warnings = validate_assessment(&a);
        assert!(warnings
            .iter()
            .any(|w| w.question_id == Some(9) && w.message.contains("duplicate option")));
        assert!(warnings
            .iter()
            .any(|w| w.question_id == Some(9) && w.message == "category is empty"));
    }

    #[test]
    fn builtin_bank_validates_cleanly() {
        let warnings = validate_assessment(&crate::builtin::career_aptitude());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mini.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "[bank]\nid = ").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(
            nested.join("other.toml"),
            VALID_TOML.replace("id = \"mini\"", "id = \"other\""),
        )
        .unwrap();

        let assessments = load_assessment_directory(dir.path()).unwrap();
        let ids: Vec<_> = assessments.iter().map(|a| a.bank.id().to_string()).collect();
        assert_eq!(ids, vec!["mini", "other"]);
    }

    #[test]
    fn load_directory_rejects_files() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(load_assessment_directory(file.path()).is_err());
    }
}
