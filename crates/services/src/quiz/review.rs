use physix_core::grading::Answers;
use physix_core::model::{Answer, QuestionBody, QuestionSet};

/// How an option is highlighted after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// The right answer, whether or not it was picked.
    Correct,
    /// The user's pick, which was wrong.
    WrongPick,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionReview {
    pub text: String,
    pub mark: OptionMark,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewBody {
    Choice { options: Vec<OptionReview> },
    /// `given` is `None` when the question was left blank.
    Text { correct: String, given: Option<String> },
}

/// Graded feedback for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub position: usize,
    pub prompt: String,
    pub is_correct: bool,
    pub body: ReviewBody,
    pub explanation: String,
}

/// Builds per-question feedback for a finished attempt.
#[must_use]
pub fn review_answers(set: &QuestionSet, answers: &Answers) -> Vec<QuestionReview> {
    set.iter()
        .enumerate()
        .map(|(position, question)| {
            let answer = answers.get(&position);
            let body = match question.body() {
                QuestionBody::MultipleChoice { options, correct } => {
                    let picked = answer.and_then(Answer::as_index);
                    let options = options
                        .iter()
                        .enumerate()
                        .map(|(index, text)| {
                            let selected = picked == Some(index);
                            let mark = if index == *correct {
                                OptionMark::Correct
                            } else if selected {
                                OptionMark::WrongPick
                            } else {
                                OptionMark::Neutral
                            };
                            OptionReview {
                                text: text.clone(),
                                mark,
                                selected,
                            }
                        })
                        .collect();
                    ReviewBody::Choice { options }
                }
                QuestionBody::FillBlank { correct } => ReviewBody::Text {
                    correct: correct.clone(),
                    given: answer
                        .filter(|a| !a.is_blank())
                        .and_then(Answer::as_text)
                        .map(|text| text.trim().to_string()),
                },
            };
            QuestionReview {
                position,
                prompt: question.prompt().to_string(),
                is_correct: question.is_correct(answer),
                body,
                explanation: question.explanation().to_string(),
            }
        })
        .collect()
}
