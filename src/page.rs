use crate::error::{QuizError, Result};
use crate::scoring::points::{declared_points, parse_points};
use crate::scoring::{evaluate, ScoringContext, Verdict};
use crate::types::config::{FeedbackClasses, QuizConfig};
use crate::types::model::{InputKind, OptionId, PageModel, QuizInstance};
use crate::types::scoring::{Points, QuizState, ScoreState};
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The quiz was already answered correctly; nothing changed.
    Ignored,
    Evaluated { verdict: Verdict, awarded: Points },
}

/// Owns a scanned page, its per-quiz scores and the page-wide totals, and
/// applies submissions to them one at a time.
#[derive(Debug, Clone)]
pub struct PageController {
    model: PageModel,
    scores: Vec<ScoreState>,
    context: ScoringContext,
    feedback: FeedbackClasses,
}

impl PageController {
    pub fn initialize(mut model: PageModel, config: &QuizConfig) -> Self {
        let default_points = config.default_points();
        let mut context = ScoringContext::new();

        for quiz in &model.quizzes {
            context.register_quiz(declared_points(quiz.declared_total(), default_points));
        }
        if let Some(possible) = model.aggregate.possible.as_mut() {
            *possible = context.total_possible().to_string();
        }
        if let Some(achieved) = model.aggregate.achieved.as_mut() {
            *achieved = context.total_achieved().to_string();
        }

        let scores = model
            .quizzes
            .iter_mut()
            .map(|quiz| initialize_quiz(quiz, default_points))
            .collect::<Vec<_>>();

        info!(
            page = %model.label,
            quizzes = scores.len(),
            total_possible = context.total_possible(),
            "page initialized"
        );

        Self {
            model,
            scores,
            context,
            feedback: config.feedback_classes(),
        }
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    pub fn feedback(&self) -> &FeedbackClasses {
        &self.feedback
    }

    pub fn quizzes(&self) -> impl Iterator<Item = (&QuizInstance, &ScoreState)> {
        self.model.quizzes.iter().zip(self.scores.iter())
    }

    pub fn score(&self, quiz_id: &str) -> Option<&ScoreState> {
        self.model
            .quiz_index(quiz_id)
            .and_then(|index| self.scores.get(index))
    }

    /// True when every submittable quiz has been answered correctly.
    pub fn all_answered(&self) -> bool {
        self.quizzes()
            .filter(|(quiz, _)| quiz.wired)
            .all(|(_, score)| score.is_answered())
    }

    /// Replaces the quiz's selection with `selected` and submits it.
    pub fn submit_selection(
        &mut self,
        quiz_id: &str,
        selected: &[OptionId],
    ) -> Result<SubmissionOutcome> {
        let index = self.wired_index(quiz_id)?;
        let wanted = selected.iter().cloned().collect::<BTreeSet<_>>();
        let quiz = &self.model.quizzes[index];
        if let Some(unknown) = wanted.iter().find(|id| quiz.option(id).is_none()) {
            return Err(QuizError::UnknownOption {
                quiz: quiz_id.to_string(),
                option: unknown.clone(),
            });
        }
        if quiz.kind == InputKind::Radio && wanted.len() > 1 {
            return Err(QuizError::MultipleSelections {
                quiz: quiz_id.to_string(),
                count: wanted.len(),
            });
        }

        if self.scores[index].is_answered() {
            debug!(quiz = quiz_id, "already answered correctly, submission ignored");
            return Ok(SubmissionOutcome::Ignored);
        }
        for option in &mut self.model.quizzes[index].options {
            option.selected = wanted.contains(&option.id);
        }

        Ok(self.submit_at(index))
    }

    pub fn current_selection(&self, quiz_id: &str) -> Result<Vec<OptionId>> {
        let index = self
            .model
            .quiz_index(quiz_id)
            .ok_or_else(|| QuizError::UnknownQuiz(quiz_id.to_string()))?;
        Ok(self.model.quizzes[index].selected_ids().into_iter().collect())
    }

    /// Submits whatever is currently selected in the quiz.
    pub fn submit(&mut self, quiz_id: &str) -> Result<SubmissionOutcome> {
        let index = self.wired_index(quiz_id)?;
        Ok(self.submit_at(index))
    }

    fn wired_index(&self, quiz_id: &str) -> Result<usize> {
        let index = self
            .model
            .quiz_index(quiz_id)
            .ok_or_else(|| QuizError::UnknownQuiz(quiz_id.to_string()))?;
        if !self.model.quizzes[index].wired {
            return Err(QuizError::NotWired(quiz_id.to_string()));
        }
        Ok(index)
    }

    fn submit_at(&mut self, index: usize) -> SubmissionOutcome {
        let score = &mut self.scores[index];
        if score.is_answered() {
            return SubmissionOutcome::Ignored;
        }

        let quiz = &mut self.model.quizzes[index];
        let feedback = &self.feedback;
        let selected = quiz.selected_ids();
        let correct = quiz.correct_ids();
        let verdict = evaluate(&selected, &correct);

        for option in &mut quiz.options {
            option.wrapper_classes.remove(&feedback.correct);
            option.wrapper_classes.remove(&feedback.wrong);
        }

        let mut awarded = 0;
        if verdict.is_correct() {
            if let Some(content) = quiz.content.as_mut() {
                content.classes.remove(&feedback.hidden);
            }
            awarded = score.mark_answered();
            self.context.record_correct(awarded);
            quiz.answered_marker = true;
            for option in quiz.options.iter_mut().filter(|option| option.selected) {
                option.wrapper_classes.insert(feedback.correct.clone());
            }
        } else {
            if let Some(content) = quiz.content.as_mut() {
                content.classes.insert(feedback.hidden.clone());
            }
            for option in &mut quiz.options {
                if option.correct {
                    // selected or missed, both surface as correct
                    option.wrapper_classes.insert(feedback.correct.clone());
                } else if option.selected {
                    option.wrapper_classes.insert(feedback.wrong.clone());
                }
            }
        }

        if let Some(current) = quiz
            .score_display
            .as_mut()
            .and_then(|display| display.current.as_mut())
        {
            *current = score.achieved.to_string();
        }
        if let Some(achieved) = self.model.aggregate.achieved.as_mut() {
            *achieved = self.context.total_achieved().to_string();
        }

        info!(
            quiz = %quiz.id,
            verdict = ?verdict,
            awarded,
            total_achieved = self.context.total_achieved(),
            "submission evaluated"
        );
        SubmissionOutcome::Evaluated { verdict, awarded }
    }
}

fn initialize_quiz(quiz: &mut QuizInstance, default_points: Points) -> ScoreState {
    let possible = declared_points(quiz.declared_total(), default_points);
    let mut score = ScoreState::new(possible);
    if quiz.answered_marker {
        // marked in markup: nothing awarded on this load, submissions ignored
        score.state = QuizState::AnsweredCorrectly;
    }

    if let Some(display) = quiz.score_display.as_mut() {
        if let Some(current) = display.current.as_mut() {
            *current = score.achieved.to_string();
        }
        if let Some(total) = display.total.as_mut() {
            if parse_points(total).is_none() {
                *total = possible.to_string();
            }
        }
    }
    debug!(quiz = %quiz.id, possible, wired = quiz.wired, "quiz initialized");
    score
}
