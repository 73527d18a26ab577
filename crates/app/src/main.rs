mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use physix_core::model::TopicId;
use services::{Catalog, Clock, QuizLoopService};
use ui::{App, LaunchTarget, UiApp, build_app_context};

use crate::logging::{LoggingConfig, init_logging};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidScreen { raw: String },
    InvalidTopic { raw: String },
    MissingTopic { screen: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidScreen { raw } => write!(f, "invalid --screen value: {raw}"),
            ArgsError::InvalidTopic { raw } => write!(f, "unknown topic: {raw}"),
            ArgsError::MissingTopic { screen } => write!(f, "--screen {screen} needs --topic"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    quiz_loop: Arc<QuizLoopService>,
    launch_target: LaunchTarget,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn launch_target(&self) -> LaunchTarget {
        self.launch_target.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Lesson,
    Practice,
    WaveQuiz,
}

impl Screen {
    fn from_arg(raw: &str) -> Result<Self, ArgsError> {
        match raw {
            "dashboard" => Ok(Self::Dashboard),
            "lesson" => Ok(Self::Lesson),
            "practice" => Ok(Self::Practice),
            "wave-quiz" => Ok(Self::WaveQuiz),
            _ => Err(ArgsError::InvalidScreen {
                raw: raw.to_string(),
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Lesson => "lesson",
            Self::Practice => "practice",
            Self::WaveQuiz => "wave-quiz",
        }
    }
}

#[derive(Debug)]
struct Args {
    topic: Option<String>,
    screen: Option<Screen>,
    log_filter: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [ui] [--topic <id>] [--screen <dashboard|lesson|practice|wave-quiz>] [--log <filter>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --screen dashboard, or lesson when --topic is given");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PHYSIX_TOPIC, PHYSIX_SCREEN, PHYSIX_LOG (falls back to RUST_LOG)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            topic: std::env::var("PHYSIX_TOPIC").ok(),
            screen: std::env::var("PHYSIX_SCREEN")
                .ok()
                .map(|raw| Screen::from_arg(&raw))
                .transpose()?,
            log_filter: std::env::var("PHYSIX_LOG").ok(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => parsed.topic = Some(require_value(args, "--topic")?),
                "--screen" => {
                    let value = require_value(args, "--screen")?;
                    parsed.screen = Some(Screen::from_arg(&value)?);
                }
                "--log" => parsed.log_filter = Some(require_value(args, "--log")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Resolves the first screen against the loaded catalog.
    fn launch_target(&self, catalog: &Catalog) -> Result<LaunchTarget, ArgsError> {
        let topic = match self.topic.as_deref() {
            Some(raw) => {
                let known = TopicId::new(raw)
                    .ok()
                    .filter(|id| catalog.topic(id).is_some());
                Some(known.ok_or_else(|| ArgsError::InvalidTopic {
                    raw: raw.to_string(),
                })?)
            }
            None => None,
        };

        let screen = self.screen.unwrap_or(if topic.is_some() {
            Screen::Lesson
        } else {
            Screen::Dashboard
        });

        match (screen, topic) {
            (Screen::Dashboard, _) => Ok(LaunchTarget::Dashboard),
            (Screen::WaveQuiz, _) => Ok(LaunchTarget::WaveQuiz),
            (Screen::Lesson, Some(topic)) => Ok(LaunchTarget::Lesson(topic)),
            (Screen::Practice, Some(topic)) => Ok(LaunchTarget::Practice(topic)),
            (Screen::Lesson | Screen::Practice, None) => Err(ArgsError::MissingTopic {
                screen: screen.name(),
            }),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    match argv.first().map(String::as_str) {
        None => {}
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if first.starts_with("--") => {}
        Some(first) => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(LoggingConfig {
        env_filter: parsed.log_filter.clone(),
        ..LoggingConfig::default()
    });

    let catalog = Arc::new(Catalog::bundled()?);
    let launch_target = parsed.launch_target(&catalog)?;
    log::info!(
        "catalog loaded: {} topics, launching {launch_target:?}",
        catalog.topics().len()
    );

    let quiz_loop = Arc::new(QuizLoopService::new(Clock::system(), catalog.clone()));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        quiz_loop,
        launch_target,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PHYSIX")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(topic: Option<&str>, screen: Option<Screen>) -> Args {
        Args {
            topic: topic.map(str::to_string),
            screen,
            log_filter: None,
        }
    }

    #[test]
    fn topic_alone_opens_its_lesson() {
        let catalog = Catalog::bundled().unwrap();
        let target = args(Some("optics"), None).launch_target(&catalog).unwrap();
        assert_eq!(target, LaunchTarget::Lesson(TopicId::new("optics").unwrap()));
    }

    #[test]
    fn practice_screen_requires_a_topic() {
        let catalog = Catalog::bundled().unwrap();
        let err = args(None, Some(Screen::Practice))
            .launch_target(&catalog)
            .unwrap_err();
        assert!(matches!(err, ArgsError::MissingTopic { screen: "practice" }));
        assert_eq!(
            args(None, None).launch_target(&catalog).unwrap(),
            LaunchTarget::Dashboard
        );
    }

    #[test]
    fn unknown_topics_and_screens_are_rejected() {
        let catalog = Catalog::bundled().unwrap();
        let err = args(Some("relativity"), None)
            .launch_target(&catalog)
            .unwrap_err();
        assert!(matches!(err, ArgsError::InvalidTopic { .. }));
        assert!(Screen::from_arg("settings").is_err());
        assert_eq!(Screen::from_arg("wave-quiz").unwrap(), Screen::WaveQuiz);
    }
}
