//! State management module
//!
//! This module handles onboarding progress: the step machine, the per-user
//! session and where sessions are stored.

pub mod onboarding;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use onboarding::{OnboardingStep, Transition};
pub use session::Session;
pub use storage::{build_session_store, start_cleanup, InMemorySessionStore, RedisSessionStore, SessionStore};
