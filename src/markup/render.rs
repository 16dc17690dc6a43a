use super::block::QuizBlock;

pub const SUMMARY_HTML: &str = r#"
<div id="quiz-total-score-summary">
    <h3>Total Score Summary</h3>
    <p>Your total score for all quizzes on this page is:
        <span id="total-quiz-score-achieved">0</span> /
        <span id="total-quiz-score-possible">0</span>
    </p>
</div>
"#;

/// Markup for one quiz. Text is inserted verbatim, as page content.
pub fn render_quiz(block: &QuizBlock, quiz_id: usize) -> String {
    let input_type = if block.is_multiple_choice() {
        "checkbox"
    } else {
        "radio"
    };

    let options = block
        .answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let input_id = format!("quiz-{quiz_id}-{index}");
            let correct = if answer.correct { " correct" } else { "" };
            format!(
                r#"<div><input type="{input_type}" name="answer-{quiz_id}" value="{index}" id="{input_id}"{correct}><label for="{input_id}">{text}</label></div>"#,
                text = answer.text
            )
        })
        .collect::<String>();

    format!(
        concat!(
            r#"<div class="quiz" data-quiz-id="{id}">"#,
            "<h4>Question {number}</h4>",
            "<h3>{question}</h3>",
            "<form>",
            "<fieldset>{options}</fieldset>",
            r#"<button type="submit" class="quiz-button">Check Answer</button>"#,
            r#"<div class="quiz-score-display">"#,
            r#"Score: <span class="quiz-current-score">0</span> / <span class="quiz-total-possible">1</span>"#,
            "</div>",
            "</form>",
            r#"<section class="content hidden">{content}</section>"#,
            "</div>"
        ),
        id = quiz_id,
        number = quiz_id + 1,
        question = block.question,
        options = options,
        content = block.content
    )
}
