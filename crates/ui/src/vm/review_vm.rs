use physix_core::model::{GuidedBadge, PracticeBand};
use services::QuizService;
use services::quiz::{OptionMark, QuestionReview, ReviewBody};

use super::quiz_vm::option_letter;
use super::time_fmt::format_elapsed;

/// One highlighted line under a reviewed question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub class: &'static str,
    /// `Some('A')` for a choice row, `None` for fill-blank rows.
    pub letter: Option<char>,
    /// Bold lead-in such as `Correct Answer: `.
    pub lead: Option<&'static str>,
    pub text: String,
    pub suffix: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewCardVm {
    pub heading: String,
    pub is_correct: bool,
    pub rows: Vec<ReviewRowVm>,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub ratio: String,
    pub percent: String,
    pub score_class: &'static str,
    /// Practice line, e.g. "You got 2 out of 3 questions correct".
    pub detail: String,
    /// Guided badge label; practice results have none.
    pub badge: Option<&'static str>,
    pub badge_class: &'static str,
    pub elapsed: String,
    pub reviews: Vec<ReviewCardVm>,
}

/// Results of a completed attempt; `None` while in progress.
#[must_use]
pub fn map_results(quiz: &QuizService) -> Option<ResultsVm> {
    let summary = quiz.summary()?;
    let score = summary.score();
    let percent = summary.percentage().unwrap_or(0);
    let guided = quiz.policy().submits_on_advance();

    let (score_class, badge, badge_class, detail) = if guided {
        let badge = GuidedBadge::for_score(score);
        let class = match badge {
            GuidedBadge::Excellent => "score-strong",
            GuidedBadge::GoodJob => "score-fair",
            GuidedBadge::KeepLearning => "score-weak",
        };
        (
            class,
            Some(badge.label()),
            class,
            format!("You scored {percent}% on the Wave Properties Quiz"),
        )
    } else {
        let class = match PracticeBand::for_score(score) {
            PracticeBand::Strong => "score-strong",
            PracticeBand::Fair => "score-fair",
            PracticeBand::Weak => "score-weak",
        };
        (
            class,
            None,
            "",
            format!(
                "You got {} out of {} questions correct",
                score.correct, score.total
            ),
        )
    };

    Some(ResultsVm {
        ratio: format!("{}/{}", score.correct, score.total),
        percent: format!("{percent}%"),
        score_class,
        detail,
        badge,
        badge_class,
        elapsed: format!("Time: {}", format_elapsed(summary.elapsed())),
        reviews: quiz.review().iter().map(map_review_card).collect(),
    })
}

#[must_use]
pub fn map_review_card(review: &QuestionReview) -> ReviewCardVm {
    let rows = match &review.body {
        ReviewBody::Choice { options } => options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let (class, suffix) = match option.mark {
                    OptionMark::Correct => ("review-row review-correct", Some("✓ Correct")),
                    OptionMark::WrongPick => ("review-row review-wrong", Some("✗ Your answer")),
                    OptionMark::Neutral => ("review-row", None),
                };
                ReviewRowVm {
                    class,
                    letter: Some(option_letter(index)),
                    lead: None,
                    text: option.text.clone(),
                    suffix,
                }
            })
            .collect(),
        ReviewBody::Text { correct, given } => {
            let mut rows = vec![ReviewRowVm {
                class: "review-row review-correct",
                letter: None,
                lead: Some("Correct Answer: "),
                text: correct.clone(),
                suffix: None,
            }];
            if !review.is_correct {
                rows.push(ReviewRowVm {
                    class: "review-row review-wrong",
                    letter: None,
                    lead: Some("Your Answer: "),
                    text: given.clone().unwrap_or_else(|| "No answer".to_string()),
                    suffix: None,
                });
            }
            rows
        }
    };

    ReviewCardVm {
        heading: format!("Question {}: {}", review.position + 1, review.prompt),
        is_correct: review.is_correct,
        rows,
        explanation: review.explanation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use physix_core::model::{Answer, TopicId};
    use physix_core::time::fixed_clock;
    use services::{Catalog, QuizLoopService};

    fn quiz_loop() -> QuizLoopService {
        QuizLoopService::new(fixed_clock(), Arc::new(Catalog::bundled().unwrap()))
    }

    #[test]
    fn in_progress_quiz_has_no_results() {
        let quiz = quiz_loop()
            .start_practice(&TopicId::new("waves").unwrap())
            .unwrap();
        assert!(map_results(&quiz).is_none());
    }

    #[test]
    fn practice_results_report_count_and_band() {
        let quiz_loop = quiz_loop();
        let mut quiz = quiz_loop
            .start_practice(&TopicId::new("vectors").unwrap())
            .unwrap();
        for position in 0..quiz.len() {
            let answer = if position == 1 {
                Answer::Text(" ".into())
            } else {
                Answer::Index(0)
            };
            quiz.select_answer(position, answer).unwrap();
        }
        // blank fill-blank text does not count as answered
        assert!(quiz_loop.submit(&mut quiz).is_err());
        quiz.select_answer(1, Answer::Text("8".into())).unwrap();
        quiz_loop.submit(&mut quiz).unwrap();

        let results = map_results(&quiz).unwrap();
        assert!(results.detail.starts_with("You got "));
        assert!(results.detail.ends_with(" out of 4 questions correct"));
        assert_eq!(results.badge, None);
        assert_eq!(results.elapsed, "Time: 0:00");

        let fill = &results.reviews[1];
        assert!(fill.heading.starts_with("Question 2: "));
        assert!(!fill.is_correct);
        assert_eq!(fill.rows.len(), 2);
        assert_eq!(fill.rows[0].text, "7");
        assert_eq!(fill.rows[1].lead, Some("Your Answer: "));
        assert_eq!(fill.rows[1].text, "8");
    }

    #[test]
    fn guided_results_carry_badge() {
        let quiz_loop = quiz_loop();
        let mut quiz = quiz_loop.start_wave_quiz().unwrap();
        while !quiz.is_complete() {
            let correct = quiz.current_question().and_then(|q| q.correct_index()).unwrap();
            quiz.select_current(Answer::Index(correct)).unwrap();
            quiz_loop.advance(&mut quiz).unwrap();
        }
        let results = map_results(&quiz).unwrap();
        assert_eq!(results.ratio, "8/8");
        assert_eq!(results.percent, "100%");
        assert_eq!(results.badge, Some("Excellent!"));
        assert_eq!(results.detail, "You scored 100% on the Wave Properties Quiz");
        assert!(results.reviews.iter().all(|r| r.is_correct));
        let marks: Vec<Option<&str>> = results.reviews[0].rows.iter().map(|r| r.suffix).collect();
        assert_eq!(marks.iter().filter(|m| **m == Some("✓ Correct")).count(), 1);
        assert!(!marks.contains(&Some("✗ Your answer")));
    }
}
