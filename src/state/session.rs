//! Per-user onboarding session
//!
//! Tracks which question a user is on and the answers collected so far.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Answer, Answers};
use crate::utils::errors::Result;
use super::onboarding::{self, OnboardingStep, Transition};

/// Onboarding progress of a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Current question, `None` when no onboarding is running
    pub step: Option<OnboardingStep>,
    /// Answers collected in the current round
    pub answers: Answers,
    /// When this session expires (for cleanup)
    pub expires_at: Option<DateTime<Utc>>,
    /// When this session was last updated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create an idle session for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            step: None,
            answers: Answers::default(),
            expires_at: None,
            updated_at: Utc::now(),
        }
    }

    /// Start a fresh onboarding round, discarding earlier answers
    pub fn begin(&mut self, ttl: Duration) {
        self.step = Some(OnboardingStep::INITIAL);
        self.answers = Answers::default();
        self.touch(ttl);
    }

    /// Apply an answer if the current step accepts it.
    ///
    /// On error the session is left untouched.
    pub fn record(&mut self, answer: Answer) -> Result<Transition> {
        let next = onboarding::transition(self.step, answer.category())?;

        self.answers.record(answer);
        if let Transition::Advance(step) = next {
            self.step = Some(step);
        }
        self.updated_at = Utc::now();
        Ok(next)
    }

    /// Finish the round: reset to idle and hand back the collected answers
    pub fn complete(&mut self) -> Answers {
        self.step = None;
        self.expires_at = None;
        self.updated_at = Utc::now();
        std::mem::take(&mut self.answers)
    }

    pub fn is_idle(&self) -> bool {
        self.step.is_none()
    }

    /// Push the expiry `ttl` into the future
    pub fn touch(&mut self, ttl: Duration) {
        let now = Utc::now();
        self.updated_at = now;
        self.expires_at = Some(now + ttl);
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Utc::now() > expires_at
        } else {
            false
        }
    }
}
