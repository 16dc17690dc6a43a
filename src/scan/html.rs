use crate::error::{QuizError, Result};
use crate::types::config::FeedbackClasses;
use crate::types::model::{
    AggregateDisplay, ContentRegion, InputKind, OptionInput, PageModel, QuizInstance, ScoreDisplay,
};
use scraper::{ElementRef, Html, Selector};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

pub const QUIZ_SELECTOR: &str = ".quiz";
pub const QUIZ_ID_ATTR: &str = "data-quiz-id";
pub const SCORE_DISPLAY_SELECTOR: &str = ".quiz-score-display";
pub const CURRENT_SCORE_SELECTOR: &str = ".quiz-current-score";
pub const TOTAL_POSSIBLE_SELECTOR: &str = ".quiz-total-possible";
pub const CONTENT_SELECTOR: &str = "section.content";
pub const AGGREGATE_ACHIEVED_SELECTOR: &str = "#total-quiz-score-achieved";
pub const AGGREGATE_POSSIBLE_SELECTOR: &str = "#total-quiz-score-possible";
pub const CORRECT_ATTR: &str = "correct";

struct Selectors {
    quiz: Selector,
    form: Selector,
    fieldset: Selector,
    input: Selector,
    question: Selector,
    score_display: Selector,
    current_score: Selector,
    total_possible: Selector,
    content: Selector,
    aggregate_achieved: Selector,
    aggregate_possible: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            quiz: selector(QUIZ_SELECTOR)?,
            form: selector("form")?,
            fieldset: selector("fieldset")?,
            input: selector("input")?,
            question: selector("h3")?,
            score_display: selector(SCORE_DISPLAY_SELECTOR)?,
            current_score: selector(CURRENT_SCORE_SELECTOR)?,
            total_possible: selector(TOTAL_POSSIBLE_SELECTOR)?,
            content: selector(CONTENT_SELECTOR)?,
            aggregate_achieved: selector(AGGREGATE_ACHIEVED_SELECTOR)?,
            aggregate_possible: selector(AGGREGATE_POSSIBLE_SELECTOR)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| QuizError::Selector(format!("{css}: {e}")))
}

/// Builds the page model from rendered quiz markup.
pub fn scan_html(html: &str, label: &str, feedback: &FeedbackClasses) -> Result<PageModel> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let quizzes = document
        .select(&selectors.quiz)
        .enumerate()
        .map(|(index, element)| scan_quiz(element, index, &selectors, feedback))
        .inspect(|quiz| {
            if !seen.insert(quiz.id.clone()) {
                warn!(page = label, quiz = %quiz.id, "duplicate quiz identifier");
            }
        })
        .collect::<Vec<_>>();

    let root = document.root_element();
    let aggregate = AggregateDisplay {
        achieved: first_text(root, &selectors.aggregate_achieved),
        possible: first_text(root, &selectors.aggregate_possible),
    };

    debug!(page = label, quizzes = quizzes.len(), "page scanned");
    Ok(PageModel {
        label: label.to_string(),
        quizzes,
        aggregate,
    })
}

fn scan_quiz(
    element: ElementRef<'_>,
    index: usize,
    selectors: &Selectors,
    feedback: &FeedbackClasses,
) -> QuizInstance {
    let quiz_id = element.value().attr(QUIZ_ID_ATTR).map(str::to_string);
    let id = quiz_id.clone().unwrap_or_else(|| format!("#{index}"));
    let form = element.select(&selectors.form).next();
    let fieldset = form.and_then(|form| form.select(&selectors.fieldset).next());

    let wired = quiz_id.is_some() && fieldset.is_some();
    if !wired {
        warn!(quiz = %id, "quiz lacks an identifier, form or fieldset; submissions disabled");
    }

    let inputs = match (&quiz_id, form) {
        (Some(quiz_id), Some(form)) => answer_inputs(form, quiz_id, selectors),
        _ => Vec::new(),
    };
    let kind = inputs
        .first()
        .map(|input| InputKind::from_attr(input.value().attr("type")))
        .unwrap_or(InputKind::Checkbox);
    let options = quiz_id
        .as_deref()
        .map(|quiz_id| scan_options(&inputs, quiz_id))
        .unwrap_or_default();

    let score_display = form
        .and_then(|form| form.select(&selectors.score_display).next())
        .map(|display| ScoreDisplay {
            current: first_text(display, &selectors.current_score),
            total: first_text(display, &selectors.total_possible),
        });

    let content = element
        .select(&selectors.content)
        .next()
        .map(|section| ContentRegion {
            html: section.inner_html().trim().to_string(),
            classes: classes_of(section),
        });

    QuizInstance {
        id,
        question: first_text(element, &selectors.question),
        kind,
        wired,
        options,
        score_display,
        content,
        answered_marker: fieldset
            .map(|fieldset| fieldset.value().attr(&feedback.answered_marker).is_some())
            .unwrap_or(false),
    }
}

/// Inputs named `answer-<quiz id>`; other inputs in the form are not options.
fn answer_inputs<'a>(
    form: ElementRef<'a>,
    quiz_id: &str,
    selectors: &Selectors,
) -> Vec<ElementRef<'a>> {
    let name = format!("answer-{quiz_id}");
    form.select(&selectors.input)
        .filter(|input| input.value().attr("name") == Some(name.as_str()))
        .collect()
}

fn scan_options(inputs: &[ElementRef<'_>], quiz_id: &str) -> Vec<OptionInput> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .copied()
        .enumerate()
        .map(|(position, input)| {
            let wrapper = input.parent().and_then(ElementRef::wrap);
            let id = input
                .value()
                .attr("value")
                .map(str::to_string)
                .unwrap_or_else(|| position.to_string());
            if !seen.insert(id.clone()) {
                warn!(quiz = quiz_id, option = %id, "duplicate option value");
            }
            OptionInput {
                id,
                element_id: input.value().attr("id").map(str::to_string),
                label: wrapper.map(collapsed_text).unwrap_or_default(),
                correct: input.value().attr(CORRECT_ATTR).is_some(),
                selected: input.value().attr("checked").is_some(),
                wrapper_classes: wrapper.map(classes_of).unwrap_or_default(),
            }
        })
        .collect()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(collapsed_text)
}

fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn classes_of(element: ElementRef<'_>) -> BTreeSet<String> {
    element.value().classes().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<div class="quiz" data-quiz-id="0">
  <h4>Question 1</h4>
  <h3>Which are even?</h3>
  <form>
    <fieldset>
      <div><input type="checkbox" name="answer-0" value="0" id="quiz-0-0"><label for="quiz-0-0">One</label></div>
      <div><input type="checkbox" name="answer-0" value="1" id="quiz-0-1" correct><label for="quiz-0-1">Two</label></div>
      <div class="correct"><input type="checkbox" name="answer-0" value="2" id="quiz-0-2" correct checked><label for="quiz-0-2">Four</label></div>
      <div><input type="checkbox" name="answer-1" value="9"><label>Stray</label></div>
    </fieldset>
    <button type="submit" class="quiz-button">Check Answer</button>
    <div class="quiz-score-display">Score: <span class="quiz-current-score">0</span> / <span class="quiz-total-possible"> 2 </span></div>
  </form>
  <section class="content hidden"><p>Two and four.</p></section>
</div>
<div class="quiz" data-quiz-id="1">
  <h3>Pick one</h3>
  <form><fieldset data-answered-correctly="true">
    <div><input type="radio" name="answer-1" value="0" correct><label>Yes</label></div>
  </fieldset></form>
</div>
<div class="quiz"><h3>Broken</h3></div>
<p><span id="total-quiz-score-achieved">0</span> / <span id="total-quiz-score-possible">0</span></p>
</body></html>"#;

    fn scan(html: &str) -> PageModel {
        scan_html(html, "page.html", &FeedbackClasses::default()).expect("page should scan")
    }

    #[test]
    fn scan_reads_quiz_structure() {
        let model = scan(PAGE);
        assert_eq!(model.label, "page.html");
        assert_eq!(model.quizzes.len(), 3);

        let first = &model.quizzes[0];
        assert_eq!(first.id, "0");
        assert!(first.wired);
        assert_eq!(first.kind, InputKind::Checkbox);
        assert_eq!(first.question.as_deref(), Some("Which are even?"));
        assert_eq!(first.options.len(), 3);
        assert_eq!(first.options[1].label, "Two");
        assert_eq!(first.options[1].element_id.as_deref(), Some("quiz-0-1"));
        assert_eq!(
            first.correct_ids().into_iter().collect::<Vec<_>>(),
            vec!["1", "2"]
        );
        assert!(first.options[2].selected);
        assert!(first.options[2].wrapper_classes.contains("correct"));
        assert_eq!(first.declared_total(), Some("2"));
        assert_eq!(
            first.score_display.as_ref().and_then(|d| d.current.as_deref()),
            Some("0")
        );

        let content = first.content.as_ref().expect("content should exist");
        assert_eq!(content.html, "<p>Two and four.</p>");
        assert!(!content.is_visible("hidden"));
    }

    #[test]
    fn scan_reads_radio_quiz_and_marker() {
        let model = scan(PAGE);
        let second = &model.quizzes[1];
        assert_eq!(second.kind, InputKind::Radio);
        assert!(second.answered_marker);
        assert!(second.score_display.is_none());
        assert!(second.content.is_none());
    }

    #[test]
    fn scan_keeps_unwired_quiz_with_positional_id() {
        let model = scan(PAGE);
        let broken = &model.quizzes[2];
        assert_eq!(broken.id, "#2");
        assert!(!broken.wired);
        assert!(broken.options.is_empty());
    }

    #[test]
    fn scan_takes_kind_from_answer_inputs_only() {
        let model = scan(
            r#"<div class="quiz" data-quiz-id="k"><form><fieldset>
<input type="text" name="note">
<div><input type="radio" name="answer-k" value="a" correct><label>A</label></div>
<div><input type="radio" name="answer-k" value="b"><label>B</label></div>
</fieldset></form></div>"#,
        );
        let quiz = &model.quizzes[0];
        assert_eq!(quiz.kind, InputKind::Radio);
        assert_eq!(quiz.options.len(), 2);
    }

    #[test]
    fn scan_ignores_score_display_outside_form() {
        let model = scan(
            r#"<div class="quiz" data-quiz-id="s"><form><fieldset>
<div><input type="radio" name="answer-s" value="a" correct><label>A</label></div>
</fieldset></form>
<div class="quiz-score-display"><span class="quiz-current-score">0</span> / <span class="quiz-total-possible">4</span></div>
</div>"#,
        );
        assert!(model.quizzes[0].score_display.is_none());
        assert_eq!(model.quizzes[0].declared_total(), None);
    }

    #[test]
    fn scan_reads_aggregate_elements() {
        let model = scan(PAGE);
        assert_eq!(model.aggregate.achieved.as_deref(), Some("0"));
        assert_eq!(model.aggregate.possible.as_deref(), Some("0"));

        let bare = scan("<p>No quizzes here</p>");
        assert!(bare.quizzes.is_empty());
        assert_eq!(bare.aggregate, AggregateDisplay::default());
    }
}
