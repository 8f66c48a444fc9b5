//! Onboarding dialogue engine
//!
//! Drives the four-question onboarding for one user at a time: loads the
//! session, applies the answer through the step machine, stores the result
//! and renders the next prompt.

use std::collections::HashMap;
use std::sync::Arc;
use chrono::Duration;
use tracing::{debug, info, warn};

use crate::i18n::I18n;
use crate::models::{Answer, Answers, LeadRecord, Outcome, Reply, WireValue};
use crate::state::{OnboardingStep, Session, SessionStore, Transition};
use crate::utils::errors::{ReloCompassError, Result};
use crate::utils::logging;
use super::keyboards::{answer_options, main_menu_options};

/// Onboarding state machine bound to a session store
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    store: Arc<dyn SessionStore>,
    i18n: Arc<I18n>,
    session_ttl: Duration,
}

impl DialogueEngine {
    pub fn new(store: Arc<dyn SessionStore>, i18n: Arc<I18n>, session_ttl: Duration) -> Self {
        Self {
            store,
            i18n,
            session_ttl,
        }
    }

    /// Start (or restart) onboarding and ask the first question
    pub async fn begin(&self, user_id: i64, lang: &str) -> Result<Reply> {
        let mut session = self
            .store
            .get(user_id)
            .await?
            .unwrap_or_else(|| Session::new(user_id));

        if !session.is_idle() {
            debug!(user_id = user_id, step = ?session.step, "Restarting onboarding in progress");
        }

        session.begin(self.session_ttl);
        self.store.set(&session).await?;

        logging::log_user_action(user_id, "onboarding_started", None);
        Ok(self.prompt(OnboardingStep::INITIAL, lang))
    }

    /// Apply one answer to the user's onboarding
    pub async fn submit_answer(&self, user_id: i64, answer: Answer, lang: &str) -> Result<Outcome> {
        let mut session = match self.store.get(user_id).await? {
            Some(session) if !session.is_idle() => session,
            _ => {
                warn!(user_id = user_id, category = %answer.category(), "Answer received with no onboarding in progress");
                return Ok(Outcome::Reply(self.not_started(lang)));
            }
        };

        match session.record(answer) {
            Ok(Transition::Advance(next)) => {
                session.touch(self.session_ttl);
                self.store.set(&session).await?;
                debug!(user_id = user_id, answer = answer.value(), step = %next, "Onboarding advanced");
                Ok(Outcome::Reply(self.prompt(next, lang)))
            }
            Ok(Transition::Complete) => {
                let answers = session.complete();
                self.store.clear(user_id).await?;

                let reply = self.summary(&answers, lang);
                logging::log_lead_captured(&LeadRecord::new(user_id, answers));
                info!(user_id = user_id, "Onboarding completed");
                Ok(Outcome::Reply(reply))
            }
            Err(ReloCompassError::InvalidStateTransition { from, to }) => {
                warn!(user_id = user_id, from = %from, to = %to, "Out-of-order answer, repeating current question");
                match session.step {
                    Some(step) => Ok(Outcome::Reply(self.reprompt(step, lang))),
                    None => Ok(Outcome::Reply(self.not_started(lang))),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Question text and options for a step
    pub fn prompt(&self, step: OnboardingStep, lang: &str) -> Reply {
        let key = match step {
            OnboardingStep::AwaitingStage => "onboarding.welcome",
            OnboardingStep::AwaitingFamily => "onboarding.ask_family",
            OnboardingStep::AwaitingBudget => "onboarding.ask_budget",
            OnboardingStep::AwaitingRegion => "onboarding.ask_region",
        };

        Reply::new(
            self.i18n.t(key, lang, None),
            answer_options(&self.i18n, step.expected_category(), lang),
        )
    }

    fn reprompt(&self, step: OnboardingStep, lang: &str) -> Reply {
        let mut reply = self.prompt(step, lang);
        reply.text = format!(
            "{}\n\n{}",
            self.i18n.t("onboarding.answer_current_first", lang, None),
            reply.text
        );
        reply
    }

    fn not_started(&self, lang: &str) -> Reply {
        Reply::new(
            self.i18n.t("onboarding.not_started", lang, None),
            main_menu_options(&self.i18n, lang),
        )
    }

    fn summary(&self, answers: &Answers, lang: &str) -> Reply {
        let not_specified = self.i18n.t("onboarding.not_specified", lang, None);
        let field = |value: Option<&'static str>| value.map_or_else(|| not_specified.clone(), str::to_string);

        let mut params = HashMap::new();
        params.insert("stage".to_string(), field(answers.stage.map(|v| v.as_str())));
        params.insert("family".to_string(), field(answers.family.map(|v| v.as_str())));
        params.insert("budget".to_string(), field(answers.budget.map(|v| v.as_str())));
        params.insert("region".to_string(), field(answers.region.map(|v| v.as_str())));

        Reply::new(
            self.i18n.t("onboarding.completed", lang, Some(&params)),
            main_menu_options(&self.i18n, lang),
        )
    }
}
