use crate::error::{QuizError, Result};
use crate::types::model::OptionId;
use serde::Deserialize;
use std::path::Path;

/// Ordered list of answer submissions replayed against a page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionPlan {
    #[serde(default)]
    pub submission: Vec<Submission>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub quiz: String,
    /// Replacement selection; when absent the quiz's current selection
    /// (inputs checked in the markup) is submitted.
    pub selected: Option<Vec<OptionId>>,
}

pub fn load_submissions(path: &Path) -> Result<SubmissionPlan> {
    if !path.exists() {
        return Err(QuizError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| QuizError::SubmissionsParse(format!("{}: {}", path.display(), e)))
}
