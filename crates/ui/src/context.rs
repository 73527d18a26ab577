use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use physix_core::model::TopicId;
use services::{Catalog, QuizLoopService};

/// Screen shown right after launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LaunchTarget {
    #[default]
    Dashboard,
    Lesson(TopicId),
    Practice(TopicId),
    WaveQuiz,
}

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    fn launch_target(&self) -> LaunchTarget {
        LaunchTarget::Dashboard
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    quiz_loop: Arc<QuizLoopService>,
    launch_target: LaunchTarget,
    launch_pending: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let launch_target = app.launch_target();
        let launch_pending = launch_target != LaunchTarget::Dashboard;
        Self {
            catalog: app.catalog(),
            quiz_loop: app.quiz_loop(),
            launch_target,
            launch_pending: Arc::new(AtomicBool::new(launch_pending)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    /// The configured launch screen, returned once. Later calls yield `None`.
    #[must_use]
    pub fn take_launch_target(&self) -> Option<LaunchTarget> {
        self.launch_pending
            .swap(false, Ordering::AcqRel)
            .then(|| self.launch_target.clone())
    }

    /// The configured value, not the one-shot one.
    #[must_use]
    pub fn launch_target(&self) -> &LaunchTarget {
        &self.launch_target
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
