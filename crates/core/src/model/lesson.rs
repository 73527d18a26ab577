use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TopicId;
use crate::sim::{ControlSpec, SceneKind};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("topic title cannot be empty")]
    EmptyTopicTitle,

    #[error("lesson for {topic} has no slides")]
    NoSlides { topic: TopicId },

    #[error("slide {index} has an empty title")]
    EmptySlideTitle { index: usize },

    #[error("scene slide {index} lists no scenes")]
    EmptySceneList { index: usize },

    #[error("practice slide must be the last slide, found at {index}")]
    PracticeNotLast { index: usize },
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A dashboard entry: one physics subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    id: TopicId,
    title: String,
    description: String,
}

impl Topic {
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTopicTitle` if the title is blank.
    pub fn new(
        id: TopicId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTopicTitle);
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ─── SLIDES ────────────────────────────────────────────────────────────────────
//

/// What the right-hand panel of a slide shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SlideContent {
    /// Text only; the panel is empty.
    Text,
    /// One or more animated drawings. `controls` shows the lesson sliders next to them.
    Scene {
        scenes: Vec<SceneKind>,
        #[serde(default)]
        controls: bool,
    },
    /// Embedded practice quiz for the lesson's topic.
    Practice,
}

impl SlideContent {
    #[must_use]
    pub fn scenes(&self) -> &[SceneKind] {
        match self {
            SlideContent::Scene { scenes, .. } => scenes,
            SlideContent::Text | SlideContent::Practice => &[],
        }
    }

    #[must_use]
    pub fn shows_controls(&self) -> bool {
        matches!(self, SlideContent::Scene { controls: true, .. })
    }

    #[must_use]
    pub fn is_practice(&self) -> bool {
        matches!(self, SlideContent::Practice)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    title: String,
    body_markdown: String,
    content: SlideContent,
}

impl Slide {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body_markdown(&self) -> &str {
        &self.body_markdown
    }

    #[must_use]
    pub fn content(&self) -> &SlideContent {
        &self.content
    }
}

/// Unvalidated slide as stored in bundled content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDraft {
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub content: SlideContent,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A slide deck for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    topic: TopicId,
    slides: Vec<Slide>,
}

impl Lesson {
    #[must_use]
    pub fn topic(&self) -> &TopicId {
        &self.topic
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a validated lesson.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn has_practice(&self) -> bool {
        self.slides.iter().any(|s| s.content.is_practice())
    }

    /// Every control used by any scene of this lesson, first occurrence wins.
    ///
    /// Parameters live for the whole lesson, so a value set on one slide is still
    /// in effect on the next.
    #[must_use]
    pub fn controls(&self) -> Vec<ControlSpec> {
        let mut out: Vec<ControlSpec> = Vec::new();
        for scene in self.slides.iter().flat_map(|s| s.content.scenes()) {
            for spec in scene.controls() {
                if !out.iter().any(|existing| existing.key == spec.key) {
                    out.push(spec);
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDraft {
    pub topic: TopicId,
    pub slides: Vec<SlideDraft>,
}

impl LessonDraft {
    /// # Errors
    ///
    /// Returns `LessonError` if the deck is empty, a slide title is blank, a scene
    /// slide names no scene, or a practice slide is not last.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        if self.slides.is_empty() {
            return Err(LessonError::NoSlides { topic: self.topic });
        }

        let last = self.slides.len() - 1;
        let mut slides = Vec::with_capacity(self.slides.len());
        for (index, draft) in self.slides.into_iter().enumerate() {
            if draft.title.trim().is_empty() {
                return Err(LessonError::EmptySlideTitle { index });
            }
            match &draft.content {
                SlideContent::Scene { scenes, .. } if scenes.is_empty() => {
                    return Err(LessonError::EmptySceneList { index });
                }
                SlideContent::Practice if index != last => {
                    return Err(LessonError::PracticeNotLast { index });
                }
                _ => {}
            }
            slides.push(Slide {
                title: draft.title,
                body_markdown: draft.body,
                content: draft.content,
            });
        }

        Ok(Lesson {
            topic: self.topic,
            slides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str, content: SlideContent) -> SlideDraft {
        SlideDraft {
            title: title.into(),
            body: String::new(),
            content,
        }
    }

    fn topic() -> TopicId {
        TopicId::new("kinematics").unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = LessonDraft {
            topic: topic(),
            slides: Vec::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, LessonError::NoSlides { topic: topic() });
    }

    #[test]
    fn practice_slide_must_be_last() {
        let err = LessonDraft {
            topic: topic(),
            slides: vec![
                slide("Quiz", SlideContent::Practice),
                slide("Intro", SlideContent::Text),
            ],
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, LessonError::PracticeNotLast { index: 0 });
    }

    #[test]
    fn scene_slide_needs_a_scene() {
        let err = LessonDraft {
            topic: topic(),
            slides: vec![slide(
                "Motion",
                SlideContent::Scene {
                    scenes: Vec::new(),
                    controls: false,
                },
            )],
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, LessonError::EmptySceneList { index: 0 });
    }

    #[test]
    fn controls_are_merged_across_slides() {
        let lesson = LessonDraft {
            topic: topic(),
            slides: vec![
                slide(
                    "Types",
                    SlideContent::Scene {
                        scenes: vec![SceneKind::LinearMotion, SceneKind::CircularMotion],
                        controls: true,
                    },
                ),
                slide(
                    "Graphs",
                    SlideContent::Scene {
                        scenes: vec![SceneKind::MotionGraphs],
                        controls: false,
                    },
                ),
            ],
        }
        .validate()
        .unwrap();

        let keys: Vec<&str> = lesson.controls().iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["velocity", "show_vectors"]);
        assert!(!lesson.has_practice());
    }

    #[test]
    fn topic_requires_title() {
        assert_eq!(
            Topic::new(topic(), " ", "desc").unwrap_err(),
            LessonError::EmptyTopicTitle
        );
    }
}
