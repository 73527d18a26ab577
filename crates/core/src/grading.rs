//! Pure scoring over a question set and a map of submitted answers.

use std::collections::BTreeMap;

use crate::model::{Answer, QuestionSet};

/// Submitted answers keyed by question position. Unanswered positions are absent.
pub type Answers = BTreeMap<usize, Answer>;

/// Number of correct answers out of the set size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// `round(100 * correct / total)`, or `None` for an empty set.
    #[must_use]
    pub fn percentage(&self) -> Option<u8> {
        percentage(self.correct, self.total)
    }

    /// True when `correct / total >= threshold / 100`, compared without rounding.
    #[must_use]
    pub fn at_least(&self, threshold: u8) -> bool {
        self.total > 0 && self.correct * 100 >= usize::from(threshold) * self.total
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// Rounded integer percentage, half away from zero.
#[must_use]
pub fn percentage(part: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let part = part.min(total);
    let rounded = (part * 200 + total) / (2 * total);
    u8::try_from(rounded).ok()
}

/// Grades every question; missing answers count as wrong.
#[must_use]
pub fn score(set: &QuestionSet, answers: &Answers) -> Score {
    let correct = set
        .iter()
        .enumerate()
        .filter(|(position, question)| question.is_correct(answers.get(position)))
        .count();
    Score {
        correct,
        total: set.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionId, TopicId};

    fn mc_set(correct: &[usize]) -> QuestionSet {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Question::multiple_choice(
                    QuestionId::new(i as u64 + 1),
                    format!("Q{i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    *c,
                    "",
                )
                .unwrap()
            })
            .collect();
        QuestionSet::new(TopicId::new("kinematics").unwrap(), questions).unwrap()
    }

    fn answers(indices: &[usize]) -> Answers {
        indices
            .iter()
            .enumerate()
            .map(|(pos, idx)| (pos, Answer::Index(*idx)))
            .collect()
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let set = mc_set(&[1, 1, 1]);
        let s = score(&set, &answers(&[1, 1, 1]));
        assert_eq!(s, Score { correct: 3, total: 3 });
        assert_eq!(s.percentage(), Some(100));
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        let set = mc_set(&[1, 1, 1]);
        let s = score(&set, &answers(&[0, 1, 0]));
        assert_eq!(s.correct, 1);
        assert_eq!(s.percentage(), Some(33));
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let set = mc_set(&[0, 2]);
        let mut partial = Answers::new();
        partial.insert(1, Answer::Index(2));
        assert_eq!(score(&set, &partial).correct, 1);
        assert_eq!(score(&set, &Answers::new()).correct, 0);
    }

    #[test]
    fn empty_set_has_no_percentage() {
        let set = QuestionSet::empty(TopicId::new("unknown").unwrap());
        let s = score(&set, &Answers::new());
        assert_eq!(s, Score { correct: 0, total: 0 });
        assert_eq!(s.percentage(), None);
        assert!(!s.at_least(0));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(2, 3), Some(67));
        assert_eq!(percentage(1, 8), Some(13));
        assert_eq!(percentage(5, 8), Some(63));
        assert_eq!(percentage(0, 4), Some(0));
    }

    #[test]
    fn thresholds_compare_unrounded_ratio() {
        let s = Score { correct: 6, total: 8 };
        assert!(s.at_least(60));
        assert!(!s.at_least(80));
        let s = Score { correct: 7, total: 10 };
        assert!(s.at_least(70));
    }
}
