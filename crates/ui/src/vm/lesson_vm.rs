use physix_core::model::SlideContent;
use physix_core::sim::SceneKind;
use services::{LessonNavigator, SlideDot};

use super::markdown_vm::markdown_to_html;

/// Right-hand panel of a slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlidePanelVm {
    Empty,
    Scenes {
        scenes: Vec<ScenePanelVm>,
        show_controls: bool,
    },
    /// Embedded practice; the slide takes the full width.
    Practice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenePanelVm {
    pub kind: SceneKind,
    pub title: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideDotVm {
    pub index: usize,
    pub class: &'static str,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonScreenVm {
    pub slide_index: usize,
    pub title: String,
    pub position: String,
    pub dots: Vec<SlideDotVm>,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_complete: bool,
    pub body_html: String,
    pub panel: SlidePanelVm,
}

impl LessonScreenVm {
    #[must_use]
    pub fn is_full_width(&self) -> bool {
        matches!(self.panel, SlidePanelVm::Practice)
    }

    /// Scenes currently on screen, in panel order.
    #[must_use]
    pub fn scenes(&self) -> Vec<SceneKind> {
        match &self.panel {
            SlidePanelVm::Scenes { scenes, .. } => scenes.iter().map(|s| s.kind).collect(),
            SlidePanelVm::Empty | SlidePanelVm::Practice => Vec::new(),
        }
    }
}

#[must_use]
pub fn map_lesson_screen(nav: &LessonNavigator) -> Option<LessonScreenVm> {
    let slide = nav.current_slide()?;
    let panel = match slide.content() {
        SlideContent::Text => SlidePanelVm::Empty,
        SlideContent::Scene { scenes, controls } => SlidePanelVm::Scenes {
            scenes: scenes
                .iter()
                .map(|&kind| ScenePanelVm {
                    kind,
                    title: kind.title(),
                })
                .collect(),
            show_controls: *controls,
        },
        SlideContent::Practice => SlidePanelVm::Practice,
    };

    Some(LessonScreenVm {
        slide_index: nav.current(),
        title: slide.title().to_string(),
        position: nav.position_label(),
        dots: nav
            .dots()
            .into_iter()
            .enumerate()
            .map(|(index, dot)| SlideDotVm {
                index,
                class: slide_dot_class(dot),
                label: format!("Go to slide {}", index + 1),
            })
            .collect(),
        can_previous: nav.can_previous(),
        can_next: nav.can_next(),
        can_complete: nav.can_complete(),
        body_html: markdown_to_html(slide.body_markdown()),
        panel,
    })
}

fn slide_dot_class(dot: SlideDot) -> &'static str {
    match dot {
        SlideDot::Current => "slide-dot slide-dot-current",
        SlideDot::Viewed => "slide-dot slide-dot-viewed",
        SlideDot::Upcoming => "slide-dot",
    }
}
