use services::Catalog;

use super::test_harness::{ViewKind, render_view, render_view_with};

#[test]
fn home_view_smoke_lists_topics() {
    let html = render_view(ViewKind::Home);
    assert!(html.contains("PHYSIX"), "missing brand in {html}");
    assert!(html.contains("Class Lessons"), "missing section in {html}");
    assert!(html.contains("Atomic Structure"), "missing topic in {html}");
    assert!(html.contains("Fluids"), "missing topic in {html}");
    assert_eq!(html.matches("View Content").count(), 6);
    assert_eq!(html.matches("Practice Questions").count(), 6);
}

#[test]
fn practice_view_smoke_shows_first_question() {
    let html = render_view(ViewKind::Practice("kinematics"));
    assert!(html.contains("Question 1 of 3"), "missing header in {html}");
    assert!(html.contains("Progress: 33%"), "missing progress in {html}");
    assert!(html.contains("What is the SI unit of velocity?"), "missing prompt in {html}");
    assert!(html.contains("A."), "missing option letter in {html}");
    assert!(html.contains("Next Question"), "missing forward button in {html}");
    assert!(html.contains("Back to Lesson"), "missing back button in {html}");
}

#[test]
fn practice_view_smoke_unknown_topic_is_coming_soon() {
    let html = render_view(ViewKind::Practice("relativity"));
    assert!(
        html.contains("Practice questions for relativity coming soon!"),
        "missing fallback in {html}"
    );
}

#[test]
fn wave_quiz_smoke_uses_guided_layout() {
    let html = render_view(ViewKind::WaveQuiz);
    assert!(html.contains("Question Progress"), "missing progress in {html}");
    assert!(html.contains("1 / 8"), "missing counter in {html}");
    assert!(html.contains("dot dot-current"), "missing dot strip in {html}");
    assert!(!html.contains("Finish Quiz"), "finish shown too early in {html}");
}

#[test]
fn wave_quiz_smoke_without_questions_offers_a_way_back() {
    let empty = Catalog::from_json("[]", "[]", "{}").unwrap();
    let html = render_view_with(ViewKind::WaveQuiz, empty);
    assert!(html.contains("wave-quiz__error"), "missing fallback in {html}");
    assert!(html.contains("Back to Lessons"), "missing exit action in {html}");
    assert!(!html.contains("Question Progress"), "quiz rendered anyway in {html}");
}

#[test]
fn lesson_view_smoke_draws_first_slide() {
    let html = render_view(ViewKind::Lesson("waves"));
    assert!(html.contains("What are Waves?"), "missing slide title in {html}");
    assert!(html.contains("1 / 5"), "missing position in {html}");
    assert!(html.contains("<svg"), "missing drawing in {html}");
    assert!(html.contains("Wave Motion Visualization"), "missing scene title in {html}");
    assert!(html.contains("slide-dot slide-dot-current"), "missing dots in {html}");
}

#[test]
fn lesson_view_smoke_shows_slider_labels() {
    let html = render_view(ViewKind::Lesson("vectors"));
    assert!(html.contains("Magnitude: 4.0 units"), "missing slider label in {html}");
    assert!(html.contains("type=\"range\""), "missing slider in {html}");
}

#[test]
fn lesson_view_smoke_unknown_topic() {
    let html = render_view(ViewKind::Lesson("relativity"));
    assert!(html.contains("This lesson is not available yet."), "missing fallback in {html}");
}
