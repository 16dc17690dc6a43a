pub mod context;
pub mod points;
pub mod verdict;

pub use context::ScoringContext;
pub use verdict::{evaluate, Verdict};
