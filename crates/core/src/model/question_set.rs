use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{QuestionId, TopicId};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question id {id} appears more than once in topic {topic}")]
    DuplicateId { topic: TopicId, id: QuestionId },
}

/// Ordered, immutable list of questions for one topic.
///
/// An empty set is valid; screens treat it as "coming soon".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    topic: TopicId,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::DuplicateId` if two questions share an id.
    pub fn new(topic: TopicId, questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionSetError::DuplicateId {
                    topic,
                    id: question.id(),
                });
            }
        }
        Ok(Self { topic, questions })
    }

    #[must_use]
    pub fn empty(topic: TopicId) -> Self {
        Self {
            topic,
            questions: Vec::new(),
        }
    }

    #[must_use]
    pub fn topic(&self) -> &TopicId {
        &self.topic
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
