use tracing::warn;

pub const QUESTION_PREFIX: &str = "question:";
pub const CORRECT_ANSWER_PREFIX: &str = "answer-correct:";
pub const ANSWER_PREFIX: &str = "answer:";
pub const CONTENT_PREFIX: &str = "content:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBlock {
    pub question: String,
    pub answers: Vec<Answer>,
    pub content: String,
}

impl QuizBlock {
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.correct).count()
    }

    /// Several correct answers call for checkboxes, otherwise radio buttons.
    pub fn is_multiple_choice(&self) -> bool {
        self.correct_count() > 1
    }
}

/// Parses the body of one `<?quiz?>` block. Returns `None` for a block with
/// no question line or no answers.
pub fn parse_block(raw: &str) -> Option<QuizBlock> {
    let lines = raw.trim().lines().collect::<Vec<_>>();
    if lines.is_empty() {
        return None;
    }

    let mut question_index = None;
    let mut content_index = None;
    for (index, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.starts_with(QUESTION_PREFIX) {
            question_index = Some(index);
        } else if line.starts_with(CONTENT_PREFIX) {
            content_index = Some(index);
            break;
        }
    }

    let Some(question_index) = question_index else {
        warn!(block = %preview(raw), "quiz block without a question");
        return None;
    };
    let question = after_prefix(lines[question_index], QUESTION_PREFIX);

    let answers_end = content_index.unwrap_or(lines.len());
    let answers = lines
        .get(question_index + 1..answers_end)
        .unwrap_or_default()
        .iter()
        .filter_map(|line| parse_answer(line))
        .collect::<Vec<_>>();
    if answers.is_empty() {
        warn!(question = %question, "quiz block has no answers");
        return None;
    }

    let content = content_index
        .map(|index| {
            let first = after_prefix(lines[index], CONTENT_PREFIX);
            let rest = &lines[index + 1..];
            if first.is_empty() {
                rest.join("\n")
            } else {
                std::iter::once(first.as_str())
                    .chain(rest.iter().copied())
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        })
        .unwrap_or_default()
        .trim()
        .to_string();

    Some(QuizBlock {
        question,
        answers,
        content,
    })
}

fn parse_answer(line: &str) -> Option<Answer> {
    let line = line.trim();
    if line.starts_with(CORRECT_ANSWER_PREFIX) {
        Some(Answer {
            text: after_prefix(line, CORRECT_ANSWER_PREFIX),
            correct: true,
        })
    } else if line.starts_with(ANSWER_PREFIX) {
        Some(Answer {
            text: after_prefix(line, ANSWER_PREFIX),
            correct: false,
        })
    } else {
        None
    }
}

fn after_prefix(line: &str, prefix: &str) -> String {
    line.split_once(prefix)
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}

fn preview(raw: &str) -> String {
    raw.trim().chars().take(50).collect()
}
