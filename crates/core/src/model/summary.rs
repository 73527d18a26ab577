use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::Score;
use crate::model::ids::TopicId;

/// Colour band for the practice results header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticeBand {
    /// 70% and above, after rounding.
    Strong,
    /// 50% up to 70%, after rounding.
    Fair,
    Weak,
}

impl PracticeBand {
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        match score.percentage().unwrap_or(0) {
            70.. => PracticeBand::Strong,
            50.. => PracticeBand::Fair,
            _ => PracticeBand::Weak,
        }
    }
}

/// Badge shown at the end of the guided quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidedBadge {
    Excellent,
    GoodJob,
    KeepLearning,
}

impl GuidedBadge {
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        if score.at_least(80) {
            GuidedBadge::Excellent
        } else if score.at_least(60) {
            GuidedBadge::GoodJob
        } else {
            GuidedBadge::KeepLearning
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GuidedBadge::Excellent => "Excellent!",
            GuidedBadge::GoodJob => "Good Job!",
            GuidedBadge::KeepLearning => "Keep Learning!",
        }
    }
}

/// Result of a completed attempt. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    topic: TopicId,
    correct: usize,
    total: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Completion times earlier than the start are clamped to the start.
    #[must_use]
    pub fn new(
        topic: TopicId,
        score: Score,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            topic,
            correct: score.correct.min(score.total),
            total: score.total,
            started_at,
            completed_at: completed_at.max(started_at),
        }
    }

    #[must_use]
    pub fn topic(&self) -> &TopicId {
        &self.topic
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.total,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> Option<u8> {
        self.score().percentage()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }
}
