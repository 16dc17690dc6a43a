use crate::error::QuizError;
use serde::Deserialize;

pub const DEFAULT_POINTS: u32 = 1;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    pub scoring: Option<ScoringConfig>,
    pub feedback: Option<FeedbackConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub default_points: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackConfig {
    pub correct_class: Option<String>,
    pub wrong_class: Option<String>,
    pub hidden_class: Option<String>,
    pub answered_marker: Option<String>,
}

/// Class names and marker attribute the scorer toggles on the page model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackClasses {
    pub correct: String,
    pub wrong: String,
    pub hidden: String,
    pub answered_marker: String,
}

impl Default for FeedbackClasses {
    fn default() -> Self {
        Self {
            correct: "correct".to_string(),
            wrong: "wrong".to_string(),
            hidden: "hidden".to_string(),
            answered_marker: "data-answered-correctly".to_string(),
        }
    }
}

impl QuizConfig {
    pub fn default_points(&self) -> u32 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.default_points)
            .unwrap_or(DEFAULT_POINTS)
    }

    pub fn feedback_classes(&self) -> FeedbackClasses {
        let defaults = FeedbackClasses::default();
        match &self.feedback {
            Some(feedback) => FeedbackClasses {
                correct: feedback.correct_class.clone().unwrap_or(defaults.correct),
                wrong: feedback.wrong_class.clone().unwrap_or(defaults.wrong),
                hidden: feedback.hidden_class.clone().unwrap_or(defaults.hidden),
                answered_marker: feedback
                    .answered_marker
                    .clone()
                    .unwrap_or(defaults.answered_marker),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        let classes = self.feedback_classes();
        let named = [
            ("feedback.correct_class", &classes.correct),
            ("feedback.wrong_class", &classes.wrong),
            ("feedback.hidden_class", &classes.hidden),
            ("feedback.answered_marker", &classes.answered_marker),
        ];
        for (key, value) in named {
            if value.trim().is_empty() {
                return Err(QuizError::ConfigParse(format!("{key} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(QuizError::ConfigParse(format!(
                    "{key} must be a single token (found {value:?})"
                )));
            }
        }

        if classes.correct == classes.wrong
            || classes.correct == classes.hidden
            || classes.wrong == classes.hidden
        {
            return Err(QuizError::ConfigParse(
                "feedback classes must be distinct".to_string(),
            ));
        }

        Ok(())
    }
}
