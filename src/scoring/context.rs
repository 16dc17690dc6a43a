use crate::types::scoring::Points;

/// Page-wide score totals, owned by the page controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringContext {
    achieved: Points,
    possible: Points,
}

impl ScoringContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a quiz's declared value to the possible total. Initialization only.
    pub fn register_quiz(&mut self, possible: Points) {
        self.possible = self.possible.saturating_add(possible);
    }

    pub fn record_correct(&mut self, points: Points) {
        self.achieved = self.achieved.saturating_add(points);
    }

    pub fn total_possible(&self) -> Points {
        self.possible
    }

    pub fn total_achieved(&self) -> Points {
        self.achieved
    }
}
