//! Bundled lesson and question content.

use std::collections::BTreeMap;

use serde::Deserialize;

use physix_core::model::{Lesson, LessonDraft, QuestionDraft, QuestionSet, Topic, TopicId};

use crate::error::CatalogError;

const TOPICS_JSON: &str = include_str!("../content/topics.json");
const LESSONS_JSON: &str = include_str!("../content/lessons.json");
const QUESTIONS_JSON: &str = include_str!("../content/questions.json");

/// Question set key of the standalone wave properties quiz. Not a dashboard topic.
pub const WAVE_QUIZ_TOPIC: &str = "wave-properties";

/// Source of question sets for quiz screens.
pub trait QuestionBank: Send + Sync {
    /// Questions for `topic`; unknown topics yield an empty set.
    fn question_set(&self, topic: &TopicId) -> QuestionSet;
}

#[derive(Debug, Deserialize)]
struct TopicDraft {
    id: TopicId,
    title: String,
    #[serde(default)]
    description: String,
}

/// Validated, immutable content: topics, lesson decks and question sets.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
    lessons: BTreeMap<TopicId, Lesson>,
    questions: BTreeMap<TopicId, QuestionSet>,
}

impl Catalog {
    /// Load the content compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled content is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(TOPICS_JSON, LESSONS_JSON, QUESTIONS_JSON)
    }

    /// Parse and cross-check content documents.
    ///
    /// `questions` maps a topic id to its question list. Every topic needs a lesson,
    /// and a lesson ending in a practice slide needs at least one question.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for unparsable JSON, invalid questions or lessons, and
    /// references to unknown topics.
    pub fn from_json(topics: &str, lessons: &str, questions: &str) -> Result<Self, CatalogError> {
        let topic_drafts: Vec<TopicDraft> =
            serde_json::from_str(topics).map_err(|source| CatalogError::Parse {
                what: "topic",
                source,
            })?;
        let mut topic_list = Vec::with_capacity(topic_drafts.len());
        for draft in topic_drafts {
            if topic_list.iter().any(|t: &Topic| t.id() == &draft.id) {
                return Err(CatalogError::DuplicateTopic { topic: draft.id });
            }
            topic_list.push(Topic::new(draft.id, draft.title, draft.description)?);
        }
        let is_known = |id: &TopicId| {
            id.as_str() == WAVE_QUIZ_TOPIC || topic_list.iter().any(|t| t.id() == id)
        };

        let question_drafts: BTreeMap<TopicId, Vec<QuestionDraft>> =
            serde_json::from_str(questions).map_err(|source| CatalogError::Parse {
                what: "question",
                source,
            })?;
        let mut question_sets = BTreeMap::new();
        for (topic, drafts) in question_drafts {
            if !is_known(&topic) {
                return Err(CatalogError::UnknownTopic { topic });
            }
            let mut validated = Vec::with_capacity(drafts.len());
            for draft in drafts {
                let id = draft.id;
                let question = draft.validate().map_err(|source| {
                    log::warn!("rejected question {id} of {topic}: {source}");
                    CatalogError::Question {
                        topic: topic.clone(),
                        id,
                        source,
                    }
                })?;
                validated.push(question);
            }
            let set = QuestionSet::new(topic.clone(), validated)?;
            question_sets.insert(topic, set);
        }

        let lesson_drafts: Vec<LessonDraft> =
            serde_json::from_str(lessons).map_err(|source| CatalogError::Parse {
                what: "lesson",
                source,
            })?;
        let mut lesson_map = BTreeMap::new();
        for draft in lesson_drafts {
            let topic = draft.topic.clone();
            if !is_known(&topic) {
                return Err(CatalogError::UnknownTopic { topic });
            }
            let lesson = draft.validate().map_err(|source| {
                log::warn!("rejected lesson {topic}: {source}");
                CatalogError::Lesson {
                    topic: topic.clone(),
                    source,
                }
            })?;
            let has_questions = question_sets.get(&topic).is_some_and(|s| !s.is_empty());
            if lesson.has_practice() && !has_questions {
                return Err(CatalogError::PracticeWithoutQuestions { topic });
            }
            lesson_map.insert(topic, lesson);
        }

        if let Some(missing) = topic_list.iter().find(|t| !lesson_map.contains_key(t.id())) {
            return Err(CatalogError::MissingLesson {
                topic: missing.id().clone(),
            });
        }

        log::info!(
            "loaded content catalog: {} topics, {} lessons, {} question sets",
            topic_list.len(),
            lesson_map.len(),
            question_sets.len()
        );

        Ok(Self {
            topics: topic_list,
            lessons: lesson_map,
            questions: question_sets,
        })
    }

    /// Dashboard topics in display order.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn lesson(&self, id: &TopicId) -> Option<&Lesson> {
        self.lessons.get(id)
    }

    /// Questions of the standalone wave properties quiz, if bundled.
    #[must_use]
    pub fn wave_quiz(&self) -> Option<&QuestionSet> {
        self.questions
            .iter()
            .find(|(id, _)| id.as_str() == WAVE_QUIZ_TOPIC)
            .map(|(_, set)| set)
    }
}

impl QuestionBank for Catalog {
    fn question_set(&self, topic: &TopicId) -> QuestionSet {
        self.questions
            .get(topic)
            .cloned()
            .unwrap_or_else(|| QuestionSet::empty(topic.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physix_core::model::{LessonError, QuestionError, QuestionKind, SlideContent};

    const TOPICS: &str = r#"[{"id":"optics","title":"Optics","description":"Light"}]"#;
    const LESSONS: &str =
        r#"[{"topic":"optics","slides":[{"title":"Intro","content":{"kind":"text"}}]}]"#;

    fn topic(id: &str) -> TopicId {
        TopicId::new(id).unwrap()
    }

    #[test]
    fn bundled_content_loads() {
        let catalog = Catalog::bundled().unwrap();
        let ids: Vec<&str> = catalog.topics().iter().map(|t| t.id().as_str()).collect();
        assert_eq!(
            ids,
            vec!["atomic-structure", "waves", "optics", "kinematics", "vectors", "fluids"]
        );
        for t in catalog.topics() {
            assert!(catalog.lesson(t.id()).is_some(), "{} has no lesson", t.id());
            assert!(!catalog.question_set(t.id()).is_empty());
        }
    }

    #[test]
    fn vectors_set_includes_fill_blank() {
        let catalog = Catalog::bundled().unwrap();
        let set = catalog.question_set(&topic("vectors"));
        assert_eq!(set.len(), 4);
        let fill = set.get(1).unwrap();
        assert_eq!(fill.kind(), QuestionKind::FillBlank);
        assert_eq!(fill.correct_answer_text(), "7");
        let lesson = catalog.lesson(&topic("vectors")).unwrap();
        assert!(lesson.has_practice());
        assert!(matches!(
            lesson.slides().last().map(|s| s.content()),
            Some(SlideContent::Practice)
        ));
    }

    #[test]
    fn wave_quiz_has_eight_questions() {
        let catalog = Catalog::bundled().unwrap();
        let quiz = catalog.wave_quiz().unwrap();
        assert_eq!(quiz.len(), 8);
        assert_eq!(quiz.topic().as_str(), WAVE_QUIZ_TOPIC);
        assert!(catalog.topic(quiz.topic()).is_none());
    }

    #[test]
    fn unknown_topic_yields_empty_set() {
        let catalog = Catalog::bundled().unwrap();
        let set = catalog.question_set(&topic("unknown"));
        assert!(set.is_empty());
        assert!(catalog.lesson(&topic("unknown")).is_none());
        assert!(catalog.topic(&topic("unknown")).is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json(TOPICS, LESSONS, "{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { what: "question", .. }));
    }

    #[test]
    fn invalid_question_is_reported_with_its_topic() {
        let questions = r#"{"optics":[{"id":5,"question":"Q","options":["a","b"],"correctAnswer":2,"explanation":""}]}"#;
        let err = Catalog::from_json(TOPICS, LESSONS, questions).unwrap_err();
        match err {
            CatalogError::Question { topic: t, id, source } => {
                assert_eq!(t, topic("optics"));
                assert_eq!(id, 5);
                assert_eq!(
                    source,
                    QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 }
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn questions_for_unknown_topics_are_rejected() {
        let questions = r#"{"chemistry":[]}"#;
        let err = Catalog::from_json(TOPICS, LESSONS, questions).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTopic { .. }));
    }

    #[test]
    fn wave_quiz_is_optional() {
        let catalog = Catalog::from_json(TOPICS, LESSONS, "{}").unwrap();
        assert!(catalog.wave_quiz().is_none());
        assert_eq!(catalog.topics().len(), 1);
    }

    #[test]
    fn every_topic_needs_a_lesson() {
        let topics = r#"[{"id":"optics","title":"Optics"},{"id":"waves","title":"Waves"}]"#;
        let err = Catalog::from_json(topics, LESSONS, "{}").unwrap_err();
        assert!(matches!(err, CatalogError::MissingLesson { topic: t } if t == topic("waves")));
    }

    #[test]
    fn practice_slide_needs_questions() {
        let lessons = r#"[{"topic":"optics","slides":[{"title":"Quiz","content":{"kind":"practice"}}]}]"#;
        let err = Catalog::from_json(TOPICS, lessons, "{}").unwrap_err();
        assert!(matches!(err, CatalogError::PracticeWithoutQuestions { .. }));
    }

    #[test]
    fn invalid_lesson_is_wrapped() {
        let lessons = r#"[{"topic":"optics","slides":[]}]"#;
        let err = Catalog::from_json(TOPICS, lessons, "{}").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Lesson {
                source: LessonError::NoSlides { .. },
                ..
            }
        ));
    }
}
