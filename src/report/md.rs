use crate::scoring::Verdict;
use crate::types::report::{DisplayReport, PageReport};
use crate::types::scoring::QuizState;

pub fn to_markdown(report: &PageReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Quiz Report: {}\n\n", report.page));
    output.push_str(&format!(
        "Total score: {} / {}\n\n",
        report.total_achieved, report.total_possible
    ));
    output.push_str(&format!(
        "Summary display: {}\n\n",
        display_text(&report.aggregate_display)
    ));

    output.push_str("## Quizzes\n\n");
    if report.quizzes.is_empty() {
        output.push_str("- none\n\n");
    }
    for quiz in &report.quizzes {
        let state = match quiz.state {
            QuizState::Unanswered => "unanswered",
            QuizState::AnsweredCorrectly => "answered correctly",
        };
        output.push_str(&format!(
            "### Quiz {}: {}\n\n",
            quiz.id,
            quiz.question.as_deref().unwrap_or("(no question)")
        ));
        if !quiz.wired {
            output.push_str("- not wired: missing identifier, form or fieldset\n");
        }
        output.push_str(&format!(
            "- state: {} ({} / {})\n",
            state, quiz.achieved, quiz.possible
        ));
        if let Some(display) = &quiz.score_display {
            output.push_str(&format!("- score display: {}\n", display_text(display)));
        }
        if let Some(visible) = quiz.content_visible {
            output.push_str(&format!(
                "- explanation: {}\n",
                if visible { "shown" } else { "hidden" }
            ));
        }
        if let Some(explanation) = &quiz.explanation {
            output.push_str(&format!("  > {}\n", explanation.replace('\n', " ")));
        }
        for option in &quiz.options {
            output.push_str(&format!(
                "- [{}] {}{}{}\n",
                if option.selected { "x" } else { " " },
                option.label,
                if option.correct { " (correct)" } else { "" },
                if option.classes.is_empty() {
                    String::new()
                } else {
                    format!(" `{}`", option.classes.join(" "))
                }
            ));
        }
        output.push('\n');
    }

    if !report.submissions.is_empty() {
        output.push_str("## Submissions\n\n");
        for (index, submission) in report.submissions.iter().enumerate() {
            let outcome = match submission.verdict {
                None => "ignored (already answered)".to_string(),
                Some(Verdict::Correct) => format!("correct, +{}", submission.awarded),
                Some(Verdict::Incorrect(reason)) => format!("incorrect ({reason:?})"),
            };
            output.push_str(&format!(
                "{}. quiz {} [{}]: {}\n",
                index + 1,
                submission.quiz,
                submission.selected.join(", "),
                outcome
            ));
        }
    }

    output
}

fn display_text(display: &DisplayReport) -> String {
    format!(
        "{} / {}",
        display.achieved.as_deref().unwrap_or("-"),
        display.possible.as_deref().unwrap_or("-")
    )
}
