use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use physix_core::time::fixed_clock;
use services::{Catalog, QuizLoopService};

use crate::context::{LaunchTarget, UiApp, build_app_context};
use crate::views::{HomeView, LessonView, PracticeView, WaveQuizView};

struct TestApp {
    catalog: Arc<Catalog>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn launch_target(&self) -> LaunchTarget {
        LaunchTarget::Dashboard
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lesson(&'static str),
    Practice(&'static str),
    WaveQuiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lesson(topic) => rsx! { LessonView { topic: topic.to_string() } },
        ViewKind::Practice(topic) => rsx! { PracticeView { topic: topic.to_string() } },
        ViewKind::WaveQuiz => rsx! { WaveQuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Catalog::bundled().expect("bundled catalog"))
}

pub fn setup_view_harness_with(view: ViewKind, catalog: Catalog) -> ViewHarness {
    let catalog = Arc::new(catalog);
    let quiz_loop = Arc::new(QuizLoopService::new(fixed_clock(), catalog.clone()));
    let app = Arc::new(TestApp { catalog, quiz_loop });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

/// Builds, drives and renders `view` once.
pub fn render_view(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

/// Like [`render_view`], over custom content.
pub fn render_view_with(view: ViewKind, catalog: Catalog) -> String {
    let mut harness = setup_view_harness_with(view, catalog);
    harness.rebuild();
    harness.render()
}
