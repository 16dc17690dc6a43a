use crate::scoring::Verdict;
use crate::types::model::OptionId;
use crate::types::scoring::{Points, QuizState};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub generated_at: String,
    pub page: String,
    pub total_achieved: Points,
    pub total_possible: Points,
    pub aggregate_display: DisplayReport,
    pub quizzes: Vec<QuizReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submissions: Vec<SubmissionRecord>,
}

/// Text shown by a pair of score elements; `None` where an element is absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayReport {
    pub achieved: Option<String>,
    pub possible: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub id: String,
    pub question: Option<String>,
    pub kind: &'static str,
    pub wired: bool,
    pub state: QuizState,
    pub achieved: Points,
    pub possible: Points,
    pub score_display: Option<DisplayReport>,
    pub answered_marker: bool,
    pub content_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub options: Vec<OptionReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionReport {
    pub id: OptionId,
    pub element_id: Option<String>,
    pub label: String,
    pub selected: bool,
    pub correct: bool,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub quiz: String,
    pub selected: Vec<OptionId>,
    /// `None` when the quiz was already answered and the submission ignored.
    pub verdict: Option<Verdict>,
    pub awarded: Points,
}
