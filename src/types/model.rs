//! In-memory page model populated once from quiz markup.
//!
//! The scorer reads and annotates this model instead of a live document:
//! wrapper classes, the answered marker and display text are the only fields
//! it writes.

use std::collections::BTreeSet;

/// Value attribute of an option input, unique within its quiz.
pub type OptionId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Radio,
    Checkbox,
}

impl InputKind {
    pub fn from_attr(kind: Option<&str>) -> Self {
        match kind {
            Some(kind) if kind.eq_ignore_ascii_case("radio") => Self::Radio,
            _ => Self::Checkbox,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionInput {
    pub id: OptionId,
    pub element_id: Option<String>,
    pub label: String,
    pub correct: bool,
    pub selected: bool,
    /// Classes on the element wrapping the input.
    pub wrapper_classes: BTreeSet<String>,
}

/// Text content of a score display, `None` when the element is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDisplay {
    pub current: Option<String>,
    pub total: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContentRegion {
    pub html: String,
    pub classes: BTreeSet<String>,
}

impl ContentRegion {
    pub fn is_visible(&self, hidden_class: &str) -> bool {
        !self.classes.contains(hidden_class)
    }
}

#[derive(Debug, Clone)]
pub struct QuizInstance {
    pub id: String,
    pub question: Option<String>,
    pub kind: InputKind,
    /// False when the markup lacks a form or an identifier; such a quiz
    /// still counts towards the aggregate but cannot be submitted.
    pub wired: bool,
    pub options: Vec<OptionInput>,
    pub score_display: Option<ScoreDisplay>,
    pub content: Option<ContentRegion>,
    pub answered_marker: bool,
}

impl QuizInstance {
    pub fn option(&self, id: &str) -> Option<&OptionInput> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn correct_ids(&self) -> BTreeSet<OptionId> {
        self.options
            .iter()
            .filter(|option| option.correct)
            .map(|option| option.id.clone())
            .collect()
    }

    pub fn selected_ids(&self) -> BTreeSet<OptionId> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.id.clone())
            .collect()
    }

    /// Raw text of the declared total-possible element, if present.
    pub fn declared_total(&self) -> Option<&str> {
        self.score_display
            .as_ref()
            .and_then(|display| display.total.as_deref())
    }
}

/// Page-level aggregate display elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateDisplay {
    pub achieved: Option<String>,
    pub possible: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub label: String,
    pub quizzes: Vec<QuizInstance>,
    pub aggregate: AggregateDisplay,
}

impl PageModel {
    pub fn quiz_index(&self, id: &str) -> Option<usize> {
        self.quizzes.iter().position(|quiz| quiz.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, correct: bool, selected: bool) -> OptionInput {
        OptionInput {
            id: id.to_string(),
            element_id: None,
            label: id.to_uppercase(),
            correct,
            selected,
            wrapper_classes: BTreeSet::new(),
        }
    }

    #[test]
    fn quiz_collects_correct_and_selected_sets() {
        let quiz = QuizInstance {
            id: "q1".to_string(),
            question: None,
            kind: InputKind::Checkbox,
            wired: true,
            options: vec![
                option("a", false, true),
                option("b", true, true),
                option("c", true, false),
            ],
            score_display: None,
            content: None,
            answered_marker: false,
        };

        assert_eq!(
            quiz.correct_ids().into_iter().collect::<Vec<_>>(),
            vec!["b", "c"]
        );
        assert_eq!(
            quiz.selected_ids().into_iter().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert!(quiz.option("c").is_some());
        assert!(quiz.option("d").is_none());
        assert_eq!(quiz.declared_total(), None);
    }

    #[test]
    fn input_kind_defaults_to_checkbox() {
        assert_eq!(InputKind::from_attr(Some("RADIO")), InputKind::Radio);
        assert_eq!(InputKind::from_attr(Some("checkbox")), InputKind::Checkbox);
        assert_eq!(InputKind::from_attr(None), InputKind::Checkbox);
    }
}
