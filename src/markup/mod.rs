pub mod block;
pub mod render;

use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info};

static QUIZ_BLOCK: OnceLock<Regex> = OnceLock::new();

fn quiz_block_regex() -> &'static Regex {
    QUIZ_BLOCK.get_or_init(|| {
        Regex::new(r"(?s)<\?quiz\?>(.*?)<\?/quiz\?>").expect("quiz block pattern should compile")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub text: String,
    pub quizzes: usize,
}

/// Replaces every well-formed quiz block with quiz markup and, when any quiz
/// was rendered, appends the page score summary. Malformed blocks stay as
/// written.
pub fn render_page(markdown: &str) -> RenderedPage {
    if quiz_disabled(markdown) {
        debug!("quizzes disabled by front matter");
        return RenderedPage {
            text: markdown.to_string(),
            quizzes: 0,
        };
    }

    let mut text = String::with_capacity(markdown.len());
    let mut quizzes = 0;
    let mut last = 0;
    for captures in quiz_block_regex().captures_iter(markdown) {
        let (Some(whole), Some(body)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        text.push_str(&markdown[last..whole.start()]);
        match block::parse_block(body.as_str()) {
            Some(parsed) => {
                text.push_str(&render::render_quiz(&parsed, quizzes));
                quizzes += 1;
            }
            None => text.push_str(whole.as_str()),
        }
        last = whole.end();
    }
    text.push_str(&markdown[last..]);

    if quizzes > 0 {
        text.push_str(render::SUMMARY_HTML);
    }
    info!(quizzes, "page rendered");
    RenderedPage { text, quizzes }
}

/// True when the page front matter carries `quiz: disable`.
pub fn quiz_disabled(markdown: &str) -> bool {
    let mut lines = markdown.lines();
    if lines.next().map(str::trim_end) != Some("---") {
        return false;
    }
    lines
        .take_while(|line| line.trim_end() != "---")
        .filter_map(|line| line.split_once(':'))
        .any(|(key, value)| {
            key.trim() == "quiz" && value.trim().trim_matches(|c| c == '"' || c == '\'') == "disable"
        })
}
