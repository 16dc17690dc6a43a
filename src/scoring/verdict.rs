use crate::types::model::OptionId;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncorrectReason {
    /// Same number of selections as correct options, but a selected one is
    /// not marked correct.
    WrongSelection,
    /// Nothing is marked correct, yet something was selected.
    NoCorrectOptions,
    /// Correct options exist and the selection count differs.
    CountMismatch,
    /// Nothing selected and nothing marked correct. No rule matches; scored
    /// incorrect.
    Unmatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result", content = "reason")]
pub enum Verdict {
    Correct,
    Incorrect(IncorrectReason),
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Compares a selection against the correct-marked options.
///
/// Rules apply in order: equal non-zero sizes compare membership; then an
/// answerless quiz with a selection; then a count mismatch. Anything left
/// over is incorrect.
pub fn evaluate(selected: &BTreeSet<OptionId>, correct: &BTreeSet<OptionId>) -> Verdict {
    if selected.len() == correct.len() && !correct.is_empty() {
        if selected.iter().all(|id| correct.contains(id)) {
            Verdict::Correct
        } else {
            Verdict::Incorrect(IncorrectReason::WrongSelection)
        }
    } else if correct.is_empty() && !selected.is_empty() {
        Verdict::Incorrect(IncorrectReason::NoCorrectOptions)
    } else if !correct.is_empty() && selected.len() != correct.len() {
        Verdict::Incorrect(IncorrectReason::CountMismatch)
    } else {
        Verdict::Incorrect(IncorrectReason::Unmatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<OptionId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn exact_match_is_correct() {
        assert_eq!(evaluate(&set(&["b", "c"]), &set(&["b", "c"])), Verdict::Correct);
        assert_eq!(evaluate(&set(&["a"]), &set(&["a"])), Verdict::Correct);
    }

    #[test]
    fn subset_and_superset_are_count_mismatches() {
        let correct = set(&["b", "c"]);
        assert_eq!(
            evaluate(&set(&["b"]), &correct),
            Verdict::Incorrect(IncorrectReason::CountMismatch)
        );
        assert_eq!(
            evaluate(&set(&["a", "b", "c"]), &correct),
            Verdict::Incorrect(IncorrectReason::CountMismatch)
        );
    }

    #[test]
    fn same_size_with_wrong_member_is_incorrect() {
        assert_eq!(
            evaluate(&set(&["a", "b"]), &set(&["b", "c"])),
            Verdict::Incorrect(IncorrectReason::WrongSelection)
        );
        assert_eq!(
            evaluate(&set(&["a"]), &set(&["c"])),
            Verdict::Incorrect(IncorrectReason::WrongSelection)
        );
    }

    #[test]
    fn quiz_without_correct_options_rejects_any_selection() {
        assert_eq!(
            evaluate(&set(&["a"]), &set(&[])),
            Verdict::Incorrect(IncorrectReason::NoCorrectOptions)
        );
    }

    #[test]
    fn empty_selection_is_incorrect() {
        assert_eq!(
            evaluate(&set(&[]), &set(&["a"])),
            Verdict::Incorrect(IncorrectReason::CountMismatch)
        );
        assert_eq!(
            evaluate(&set(&[]), &set(&[])),
            Verdict::Incorrect(IncorrectReason::Unmatched)
        );
    }
}
