//! Data models module
//!
//! Interaction identifiers, collected answers, lead records and replies.

pub mod callback;
pub mod lead;
pub mod reply;

pub use callback::{Answer, AnswerCategory, Budget, CallbackData, FamilySize, MenuAction, Region, Stage, WireValue};
pub use lead::{Answers, LeadRecord};
pub use reply::{Outcome, Reply, ReplyOption};
