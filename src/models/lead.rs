//! Collected onboarding answers and the lead record built from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::callback::{Answer, Budget, FamilySize, Region, Stage};

/// Answers collected during one onboarding round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub stage: Option<Stage>,
    pub family: Option<FamilySize>,
    pub budget: Option<Budget>,
    pub region: Option<Region>,
}

impl Answers {
    /// Store an answer under its field, replacing any previous value
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::Stage(v) => self.stage = Some(v),
            Answer::Family(v) => self.family = Some(v),
            Answer::Budget(v) => self.budget = Some(v),
            Answer::Region(v) => self.region = Some(v),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Answers::default()
    }

    pub fn is_complete(&self) -> bool {
        self.stage.is_some() && self.family.is_some() && self.budget.is_some() && self.region.is_some()
    }
}

/// A qualified lead, emitted once per completed onboarding
#[derive(Debug, Clone, Serialize)]
pub struct LeadRecord {
    pub lead_id: Uuid,
    pub user_id: i64,
    pub answers: Answers,
    pub completed_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn new(user_id: i64, answers: Answers) -> Self {
        Self {
            lead_id: Uuid::new_v4(),
            user_id,
            answers,
            completed_at: Utc::now(),
        }
    }
}
