//! Onboarding state machine
//!
//! Four questions asked in a fixed order. Progress is driven by a transition
//! table keyed by the current step and the category of the incoming answer;
//! anything not in the table is rejected.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::AnswerCategory;
use crate::utils::errors::{ReloCompassError, Result};

/// The question a session is waiting on.
///
/// Progresses linearly: AwaitingStage → AwaitingFamily → AwaitingBudget →
/// AwaitingRegion → complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    AwaitingStage,
    AwaitingFamily,
    AwaitingBudget,
    AwaitingRegion,
}

impl OnboardingStep {
    pub const INITIAL: OnboardingStep = OnboardingStep::AwaitingStage;

    /// Category of answer this step accepts
    pub fn expected_category(&self) -> AnswerCategory {
        match self {
            OnboardingStep::AwaitingStage => AnswerCategory::Stage,
            OnboardingStep::AwaitingFamily => AnswerCategory::Family,
            OnboardingStep::AwaitingBudget => AnswerCategory::Budget,
            OnboardingStep::AwaitingRegion => AnswerCategory::Region,
        }
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnboardingStep::AwaitingStage => "awaiting_stage",
            OnboardingStep::AwaitingFamily => "awaiting_family",
            OnboardingStep::AwaitingBudget => "awaiting_budget",
            OnboardingStep::AwaitingRegion => "awaiting_region",
        };
        f.write_str(s)
    }
}

/// What an accepted answer does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance(OnboardingStep),
    Complete,
}

/// Look up the transition for `category` arriving while at `current`.
///
/// `None` means no onboarding is in progress.
pub fn transition(current: Option<OnboardingStep>, category: AnswerCategory) -> Result<Transition> {
    use AnswerCategory as C;
    use OnboardingStep as S;

    match (current, category) {
        (Some(S::AwaitingStage), C::Stage) => Ok(Transition::Advance(S::AwaitingFamily)),
        (Some(S::AwaitingFamily), C::Family) => Ok(Transition::Advance(S::AwaitingBudget)),
        (Some(S::AwaitingBudget), C::Budget) => Ok(Transition::Advance(S::AwaitingRegion)),
        (Some(S::AwaitingRegion), C::Region) => Ok(Transition::Complete),
        (from, to) => Err(ReloCompassError::InvalidStateTransition {
            from: from.map_or_else(|| "idle".to_string(), |s| s.to_string()),
            to: to.to_string(),
        }),
    }
}
