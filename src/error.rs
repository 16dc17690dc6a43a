use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("submissions parse error: {0}")]
    SubmissionsParse(String),

    #[error("invalid selector {0}")]
    Selector(String),

    #[error("unknown quiz: {0}")]
    UnknownQuiz(String),

    #[error("quiz {quiz} has no option {option}")]
    UnknownOption { quiz: String, option: String },

    #[error("quiz {0} is not wired: missing form or identifier")]
    NotWired(String),

    #[error("quiz {quiz} accepts a single answer, got {count}")]
    MultipleSelections { quiz: String, count: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
