use std::collections::BTreeSet;

use physix_core::model::{Lesson, Slide};

/// A move between two slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

/// Indicator state of one slide in the lesson dot strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDot {
    Current,
    Viewed,
    Upcoming,
}

/// Cursor over a lesson's slides.
///
/// A slide counts as viewed once it has been current. Jumping to any slide is allowed,
/// so viewed slides need not be contiguous.
#[derive(Debug, Clone)]
pub struct LessonNavigator {
    lesson: Lesson,
    current: usize,
    viewed: BTreeSet<usize>,
}

impl LessonNavigator {
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            current: 0,
            viewed: BTreeSet::from([0]),
        }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.lesson.slide(self.current)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.current_slide().map_or("", Slide::title)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lesson.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lesson.is_empty()
    }

    /// "3 / 5"
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len())
    }

    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.current + 1 < self.len()
    }

    /// True once every slide has been current at least once.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        !self.is_empty() && self.viewed.len() == self.len()
    }

    pub fn previous(&mut self) -> Option<SlideChange> {
        if !self.can_previous() {
            return None;
        }
        self.jump(self.current - 1)
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        if !self.can_next() {
            return None;
        }
        self.jump(self.current + 1)
    }

    /// Go to `index`. Returns `None` when out of range or already there.
    pub fn jump(&mut self, index: usize) -> Option<SlideChange> {
        if index >= self.len() || index == self.current {
            return None;
        }
        let change = SlideChange {
            from: self.current,
            to: index,
        };
        self.current = index;
        self.viewed.insert(index);
        log::trace!("lesson {} slide {} -> {}", self.lesson.topic(), change.from, change.to);
        Some(change)
    }

    #[must_use]
    pub fn is_viewed(&self, index: usize) -> bool {
        self.viewed.contains(&index)
    }

    #[must_use]
    pub fn dot(&self, index: usize) -> SlideDot {
        if index == self.current {
            SlideDot::Current
        } else if self.is_viewed(index) {
            SlideDot::Viewed
        } else {
            SlideDot::Upcoming
        }
    }

    #[must_use]
    pub fn dots(&self) -> Vec<SlideDot> {
        (0..self.len()).map(|i| self.dot(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physix_core::model::{LessonDraft, SlideContent, SlideDraft, TopicId};

    fn lesson(n: usize) -> Lesson {
        LessonDraft {
            topic: TopicId::new("optics").unwrap(),
            slides: (0..n)
                .map(|i| SlideDraft {
                    title: format!("Slide {i}"),
                    body: String::new(),
                    content: SlideContent::Text,
                })
                .collect(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn starts_on_first_slide() {
        let nav = LessonNavigator::new(lesson(3));
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.title(), "Slide 0");
        assert_eq!(nav.position_label(), "1 / 3");
        assert!(!nav.can_previous());
        assert!(nav.can_next());
        assert!(!nav.can_complete());
        assert_eq!(
            nav.dots(),
            vec![SlideDot::Current, SlideDot::Upcoming, SlideDot::Upcoming]
        );
    }

    #[test]
    fn moves_are_bounded() {
        let mut nav = LessonNavigator::new(lesson(2));
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.next(), Some(SlideChange { from: 0, to: 1 }));
        assert_eq!(nav.next(), None);
        assert!(nav.can_complete());
        assert_eq!(nav.previous(), Some(SlideChange { from: 1, to: 0 }));
    }

    #[test]
    fn jump_marks_only_visited_slides() {
        let mut nav = LessonNavigator::new(lesson(4));
        assert_eq!(nav.jump(2), Some(SlideChange { from: 0, to: 2 }));
        assert_eq!(nav.jump(2), None);
        assert_eq!(nav.jump(9), None);
        assert_eq!(
            nav.dots(),
            vec![
                SlideDot::Viewed,
                SlideDot::Upcoming,
                SlideDot::Current,
                SlideDot::Upcoming
            ]
        );
        assert!(!nav.can_complete());
        nav.jump(0);
        assert_eq!(nav.dot(2), SlideDot::Viewed);
        nav.jump(3);
        nav.jump(1);
        assert!(nav.can_complete());
    }

    #[test]
    fn single_slide_lesson_can_complete_immediately() {
        let nav = LessonNavigator::new(lesson(1));
        assert!(!nav.can_next());
        assert!(nav.can_complete());
        assert_eq!(nav.position_label(), "1 / 1");
    }
}
