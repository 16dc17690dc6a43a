pub mod json;
pub mod md;

use crate::error::QuizError;
use crate::page::PageController;
use crate::types::report::{DisplayReport, OptionReport, PageReport, QuizReport, SubmissionRecord};
use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &PageReport, format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

/// Renders several page reports: a JSON array, or Markdown sections in order.
pub fn render_all(reports: &[PageReport], format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json_all(reports).map_err(QuizError::Json),
        OutputFormat::Md => Ok(reports
            .iter()
            .map(md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Snapshot of the controller's current display state.
pub fn build_report(controller: &PageController, submissions: Vec<SubmissionRecord>) -> PageReport {
    let model = controller.model();
    let hidden = &controller.feedback().hidden;

    let quizzes = controller
        .quizzes()
        .map(|(quiz, score)| QuizReport {
            id: quiz.id.clone(),
            question: quiz.question.clone(),
            kind: quiz.kind.as_str(),
            wired: quiz.wired,
            state: score.state,
            achieved: score.achieved,
            possible: score.possible,
            score_display: quiz.score_display.as_ref().map(|display| DisplayReport {
                achieved: display.current.clone(),
                possible: display.total.clone(),
            }),
            answered_marker: quiz.answered_marker,
            content_visible: quiz.content.as_ref().map(|content| content.is_visible(hidden)),
            explanation: quiz
                .content
                .as_ref()
                .filter(|content| content.is_visible(hidden) && !content.html.is_empty())
                .map(|content| content.html.clone()),
            options: quiz
                .options
                .iter()
                .map(|option| OptionReport {
                    id: option.id.clone(),
                    element_id: option.element_id.clone(),
                    label: option.label.clone(),
                    selected: option.selected,
                    correct: option.correct,
                    classes: option.wrapper_classes.iter().cloned().collect(),
                })
                .collect(),
        })
        .collect();

    PageReport {
        generated_at: Utc::now().to_rfc3339(),
        page: model.label.clone(),
        total_achieved: controller.context().total_achieved(),
        total_possible: controller.context().total_possible(),
        aggregate_display: DisplayReport {
            achieved: model.aggregate.achieved.clone(),
            possible: model.aggregate.possible.clone(),
        },
        quizzes,
        submissions,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::scoring::verdict::{IncorrectReason, Verdict};
    use crate::types::report::{
        DisplayReport, OptionReport, PageReport, QuizReport, SubmissionRecord,
    };
    use crate::types::scoring::QuizState;

    pub fn sample_report() -> PageReport {
        PageReport {
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            page: "guide/index.html".to_string(),
            total_achieved: 1,
            total_possible: 2,
            aggregate_display: DisplayReport {
                achieved: Some("1".to_string()),
                possible: Some("2".to_string()),
            },
            quizzes: vec![
                QuizReport {
                    id: "0".to_string(),
                    question: Some("Which are even?".to_string()),
                    kind: "radio",
                    wired: true,
                    state: QuizState::AnsweredCorrectly,
                    achieved: 1,
                    possible: 1,
                    score_display: Some(DisplayReport {
                        achieved: Some("1".to_string()),
                        possible: Some("1".to_string()),
                    }),
                    answered_marker: true,
                    content_visible: Some(true),
                    explanation: Some("<p>Two is even.</p>".to_string()),
                    options: vec![
                        OptionReport {
                            id: "0".to_string(),
                            element_id: Some("quiz-0-0".to_string()),
                            label: "One".to_string(),
                            selected: false,
                            correct: false,
                            classes: vec![],
                        },
                        OptionReport {
                            id: "1".to_string(),
                            element_id: Some("quiz-0-1".to_string()),
                            label: "Two".to_string(),
                            selected: true,
                            correct: true,
                            classes: vec!["correct".to_string()],
                        },
                    ],
                },
                QuizReport {
                    id: "1".to_string(),
                    question: None,
                    kind: "checkbox",
                    wired: true,
                    state: QuizState::Unanswered,
                    achieved: 0,
                    possible: 1,
                    score_display: None,
                    answered_marker: false,
                    content_visible: None,
                    explanation: None,
                    options: vec![],
                },
            ],
            submissions: vec![
                SubmissionRecord {
                    quiz: "1".to_string(),
                    selected: vec![],
                    verdict: Some(Verdict::Incorrect(IncorrectReason::Unmatched)),
                    awarded: 0,
                },
                SubmissionRecord {
                    quiz: "0".to_string(),
                    selected: vec!["1".to_string()],
                    verdict: Some(Verdict::Correct),
                    awarded: 1,
                },
                SubmissionRecord {
                    quiz: "0".to_string(),
                    selected: vec!["0".to_string()],
                    verdict: None,
                    awarded: 0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::html::scan_html;
    use crate::types::config::{FeedbackClasses, QuizConfig};

    #[test]
    fn build_report_reflects_controller_state() {
        let html = r#"
<div class="quiz" data-quiz-id="0"><h3>Pick</h3><form><fieldset>
<div><input type="radio" name="answer-0" value="0"><label>A</label></div>
<div><input type="radio" name="answer-0" value="1" correct><label>B</label></div>
</fieldset><div class="quiz-score-display"><span class="quiz-current-score"></span> / <span class="quiz-total-possible">1</span></div></form>
<section class="content hidden">Because</section></div>
<span id="total-quiz-score-possible"></span>"#;
        let model = scan_html(html, "page.html", &FeedbackClasses::default())
            .expect("page should scan");
        let mut controller = PageController::initialize(model, &QuizConfig::default());
        controller
            .submit_selection("0", &["0".to_string()])
            .expect("submission should apply");

        let report = build_report(&controller, vec![]);
        assert_eq!(report.page, "page.html");
        assert_eq!(report.total_possible, 1);
        assert_eq!(report.total_achieved, 0);
        assert_eq!(report.aggregate_display.possible.as_deref(), Some("1"));
        assert_eq!(report.aggregate_display.achieved, None);

        let quiz = &report.quizzes[0];
        assert_eq!(quiz.state, crate::types::scoring::QuizState::Unanswered);
        assert_eq!(quiz.content_visible, Some(false));
        assert_eq!(quiz.explanation, None);
        assert_eq!(quiz.kind, "radio");
        assert_eq!(
            quiz.score_display.as_ref().and_then(|d| d.achieved.as_deref()),
            Some("0")
        );
        assert_eq!(quiz.options[0].classes, vec!["wrong"]);
        assert_eq!(quiz.options[1].classes, vec!["correct"]);
        assert_eq!(quiz.options[1].label, "B");
    }
}
