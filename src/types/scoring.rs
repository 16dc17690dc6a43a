use serde::Serialize;

pub type Points = u32;

/// Points added to a quiz and to the page total on its first correct answer.
pub const POINTS_PER_CORRECT_ANSWER: Points = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizState {
    Unanswered,
    AnsweredCorrectly,
}

/// Per-quiz counters. `possible` is fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub achieved: Points,
    pub possible: Points,
    pub state: QuizState,
}

impl ScoreState {
    pub fn new(possible: Points) -> Self {
        Self {
            achieved: 0,
            possible,
            state: QuizState::Unanswered,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.state, QuizState::AnsweredCorrectly)
    }

    /// Awards [`POINTS_PER_CORRECT_ANSWER`] on the first call and returns the
    /// points awarded; later calls award nothing.
    pub fn mark_answered(&mut self) -> Points {
        if self.is_answered() {
            return 0;
        }
        self.achieved += POINTS_PER_CORRECT_ANSWER;
        self.state = QuizState::AnsweredCorrectly;
        POINTS_PER_CORRECT_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_score_starts_unanswered_at_zero() {
        let score = ScoreState::new(3);
        assert_eq!(score.achieved, 0);
        assert_eq!(score.possible, 3);
        assert!(!score.is_answered());
    }

    #[test]
    fn mark_answered_awards_once() {
        let mut score = ScoreState::new(1);
        assert_eq!(score.mark_answered(), 1);
        assert_eq!(score.mark_answered(), 0);
        assert_eq!(score.achieved, 1);
        assert_eq!(score.state, QuizState::AnsweredCorrectly);
    }

    #[test]
    fn mark_answered_awards_one_point_whatever_the_declared_total() {
        let mut score = ScoreState::new(3);
        assert_eq!(score.mark_answered(), 1);
        assert_eq!(score.achieved, 1);
        assert_eq!(score.possible, 3);
    }
}
