//! pathfinder configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::model::Assessment;
use crate::parser;
use crate::session::SessionPolicy;

/// Top-level pathfinder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfinderConfig {
    /// Question bank TOML to use instead of the built-in assessment.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Directory completed reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Require an answer before moving to the next question.
    #[serde(default = "default_true")]
    pub require_answer: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./pathfinder-results")
}

fn default_true() -> bool {
    true
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            question_bank: None,
            output_dir: default_output_dir(),
            require_answer: true,
        }
    }
}

impl PathfinderConfig {
    pub fn policy(&self) -> SessionPolicy {
        SessionPolicy {
            require_answer: self.require_answer,
        }
    }

    /// Load the configured question bank, or the built-in one.
    pub fn load_assessment(&self) -> Result<Arc<Assessment>> {
        let assessment = match &self.question_bank {
            Some(path) => parser::parse_assessment(path)?,
            None => builtin::career_aptitude(),
        };
        tracing::debug!(
            bank = assessment.bank.id(),
            questions = assessment.bank.len(),
            "question bank loaded"
        );
        Ok(Arc::new(assessment))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through verbatim and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `pathfinder.toml` in the current directory
/// 2. `~/.config/pathfinder/config.toml`
///
/// Environment variable override: `PATHFINDER_QUESTION_BANK`.
pub fn load_config() -> Result<PathfinderConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PathfinderConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pathfinder.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let mut config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            // A relative bank path in a config file is relative to that file.
            if let Some(base) = path.parent() {
                config.question_bank = config
                    .question_bank
                    .as_deref()
                    .map(resolve_path)
                    .map(|bank| if bank.is_relative() { base.join(bank) } else { bank });
            }
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => PathfinderConfig::default(),
    };

    if let Ok(bank) = std::env::var("PATHFINDER_QUESTION_BANK") {
        if !bank.is_empty() {
            config.question_bank = Some(resolve_path(Path::new(&bank)));
        }
    }

    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn parse_config_str(content: &str) -> Result<PathfinderConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pathfinder"))
}
