use std::sync::Arc;

use chrono::Duration;
use physix_core::model::{Answer, GuidedBadge, QuestionBody, TopicId};
use physix_core::time::fixed_now;
use services::quiz::{OptionMark, ReviewBody};
use services::{Advance, Catalog, Clock, QuizError, QuizLoopService};

fn correct_answer(body: &QuestionBody) -> Answer {
    match body {
        QuestionBody::MultipleChoice { correct, .. } => Answer::Index(*correct),
        QuestionBody::FillBlank { correct } => Answer::Text(format!("  {}  ", correct.to_uppercase())),
    }
}

fn loop_service(clock: Clock) -> QuizLoopService {
    QuizLoopService::new(clock, Arc::new(Catalog::bundled().unwrap()))
}

#[test]
fn guided_wave_quiz_runs_to_a_perfect_summary() {
    let service = loop_service(Clock::fixed(fixed_now()));
    let mut quiz = service.start_wave_quiz().unwrap();
    assert_eq!(quiz.len(), 8);

    loop {
        let body = quiz.current_question().unwrap().body().clone();
        quiz.select_current(correct_answer(&body)).unwrap();
        match service.advance(&mut quiz).unwrap() {
            Advance::Moved(_) => {}
            Advance::Completed(score) => {
                assert_eq!((score.correct, score.total), (8, 8));
                break;
            }
        }
    }

    let summary = quiz.summary().unwrap();
    assert_eq!(summary.percentage(), Some(100));
    assert_eq!(GuidedBadge::for_score(summary.score()), GuidedBadge::Excellent);
    assert_eq!(summary.elapsed(), Duration::zero());
}

#[test]
fn vectors_practice_grades_fill_blank_loosely_and_reviews_wrong_picks() {
    let service = loop_service(Clock::fixed(fixed_now()));
    let topic = TopicId::new("vectors").unwrap();
    let mut quiz = service.start_practice(&topic).unwrap();

    let bodies: Vec<QuestionBody> = quiz.question_set().iter().map(|q| q.body().clone()).collect();
    for (position, body) in bodies.iter().enumerate() {
        let answer = match body {
            // first question answered wrong on purpose
            QuestionBody::MultipleChoice { correct, .. } if position == 0 => {
                Answer::Index((correct + 1) % 2)
            }
            other => correct_answer(other),
        };
        quiz.select_answer(position, answer).unwrap();
    }
    let score = service.submit(&mut quiz).unwrap();
    assert_eq!((score.correct, score.total), (3, 4));
    assert_eq!(score.percentage(), Some(75));

    let review = quiz.review();
    assert!(!review[0].is_correct);
    let ReviewBody::Choice { options } = &review[0].body else {
        panic!("first vectors question is multiple choice");
    };
    assert_eq!(options.iter().filter(|o| o.mark == OptionMark::WrongPick).count(), 1);
    assert_eq!(options.iter().filter(|o| o.mark == OptionMark::Correct).count(), 1);
    assert!(review[1].is_correct);
    assert!(matches!(&review[1].body, ReviewBody::Text { correct, .. } if correct == "7"));
}

#[test]
fn unknown_topic_falls_back_without_grading() {
    let service = loop_service(Clock::system());
    let err = service
        .start_practice(&TopicId::new("unknown").unwrap())
        .unwrap_err();
    assert_eq!(err, QuizError::Empty);
}

#[test]
fn reset_and_replay_reproduces_score() {
    let service = loop_service(Clock::fixed(fixed_now()));
    let topic = TopicId::new("optics").unwrap();
    let mut quiz = service.start_practice(&topic).unwrap();

    let run = |quiz: &mut services::QuizService| {
        for position in 0..quiz.len() {
            quiz.select_answer(position, Answer::Index(0)).unwrap();
        }
        service.submit(quiz).unwrap()
    };
    let first = run(&mut quiz);
    service.restart(&mut quiz);
    assert!(!quiz.is_complete());
    let second = run(&mut quiz);
    assert_eq!(first, second);
}
