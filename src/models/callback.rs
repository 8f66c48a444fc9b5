//! Interaction identifiers
//!
//! Buttons carry compact identifiers such as `stage_planning` or `catalog`.
//! Inside the bot they are typed values; the string form exists only at the
//! Telegram boundary.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::CallbackParseError;

/// A closed set of values with a stable wire spelling
pub trait WireValue: Sized + Copy + 'static {
    /// Every value, in menu order
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }
}

/// Where the user is in their relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Planning,
    Searching,
    Ready,
}

impl WireValue for Stage {
    const ALL: &'static [Self] = &[Stage::Planning, Stage::Searching, Stage::Ready];

    fn as_str(&self) -> &'static str {
        match self {
            Stage::Planning => "planning",
            Stage::Searching => "searching",
            Stage::Ready => "ready",
        }
    }
}

/// How many people are moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilySize {
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2_3")]
    TwoToThree,
    #[serde(rename = "4_plus")]
    FourPlus,
}

impl WireValue for FamilySize {
    const ALL: &'static [Self] = &[FamilySize::Solo, FamilySize::TwoToThree, FamilySize::FourPlus];

    fn as_str(&self) -> &'static str {
        match self {
            FamilySize::Solo => "1",
            FamilySize::TwoToThree => "2_3",
            FamilySize::FourPlus => "4_plus",
        }
    }
}

/// Purchase budget bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "100k")]
    UpTo100k,
    #[serde(rename = "300k")]
    UpTo300k,
    #[serde(rename = "300k_plus")]
    Over300k,
}

impl WireValue for Budget {
    const ALL: &'static [Self] = &[Budget::UpTo100k, Budget::UpTo300k, Budget::Over300k];

    fn as_str(&self) -> &'static str {
        match self {
            Budget::UpTo100k => "100k",
            Budget::UpTo300k => "300k",
            Budget::Over300k => "300k_plus",
        }
    }
}

/// Target region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Phuket,
    Bali,
    Georgia,
    Turkey,
    Cyprus,
}

impl WireValue for Region {
    const ALL: &'static [Self] = &[
        Region::Phuket,
        Region::Bali,
        Region::Georgia,
        Region::Turkey,
        Region::Cyprus,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Region::Phuket => "phuket",
            Region::Bali => "bali",
            Region::Georgia => "georgia",
            Region::Turkey => "turkey",
            Region::Cyprus => "cyprus",
        }
    }
}

/// Which onboarding question an answer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerCategory {
    Stage,
    Family,
    Budget,
    Region,
}

impl AnswerCategory {
    pub const ALL: [AnswerCategory; 4] = [
        AnswerCategory::Stage,
        AnswerCategory::Family,
        AnswerCategory::Budget,
        AnswerCategory::Region,
    ];

    /// Identifier prefix, without the `_` delimiter
    pub fn prefix(&self) -> &'static str {
        match self {
            AnswerCategory::Stage => "stage",
            AnswerCategory::Family => "family",
            AnswerCategory::Budget => "budget",
            AnswerCategory::Region => "region",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == prefix)
    }
}

impl fmt::Display for AnswerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A single answer to an onboarding question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Stage(Stage),
    Family(FamilySize),
    Budget(Budget),
    Region(Region),
}

impl Answer {
    pub fn category(&self) -> AnswerCategory {
        match self {
            Answer::Stage(_) => AnswerCategory::Stage,
            Answer::Family(_) => AnswerCategory::Family,
            Answer::Budget(_) => AnswerCategory::Budget,
            Answer::Region(_) => AnswerCategory::Region,
        }
    }

    /// Wire spelling of the selected value
    pub fn value(&self) -> &'static str {
        match self {
            Answer::Stage(v) => v.as_str(),
            Answer::Family(v) => v.as_str(),
            Answer::Budget(v) => v.as_str(),
            Answer::Region(v) => v.as_str(),
        }
    }

    /// All answers of one category, in menu order
    pub fn options(category: AnswerCategory) -> Vec<Answer> {
        match category {
            AnswerCategory::Stage => Stage::ALL.iter().copied().map(Answer::Stage).collect(),
            AnswerCategory::Family => FamilySize::ALL.iter().copied().map(Answer::Family).collect(),
            AnswerCategory::Budget => Budget::ALL.iter().copied().map(Answer::Budget).collect(),
            AnswerCategory::Region => Region::ALL.iter().copied().map(Answer::Region).collect(),
        }
    }

    fn parse(category: AnswerCategory, value: &str) -> Option<Self> {
        match category {
            AnswerCategory::Stage => Stage::from_wire(value).map(Answer::Stage),
            AnswerCategory::Family => FamilySize::from_wire(value).map(Answer::Family),
            AnswerCategory::Budget => Budget::from_wire(value).map(Answer::Budget),
            AnswerCategory::Region => Region::from_wire(value).map(Answer::Region),
        }
    }
}

/// Static screens reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Catalog,
    Visa,
    Stats,
    Help,
    Menu,
}

impl WireValue for MenuAction {
    const ALL: &'static [Self] = &[
        MenuAction::Catalog,
        MenuAction::Visa,
        MenuAction::Stats,
        MenuAction::Help,
        MenuAction::Menu,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Catalog => "catalog",
            MenuAction::Visa => "visa",
            MenuAction::Stats => "stats",
            MenuAction::Help => "help",
            MenuAction::Menu => "menu",
        }
    }
}

/// Decoded callback data of an inline button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackData {
    Answer(Answer),
    Menu(MenuAction),
}

impl fmt::Display for CallbackData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackData::Answer(answer) => {
                write!(f, "{}_{}", answer.category().prefix(), answer.value())
            }
            CallbackData::Menu(action) => f.write_str(action.as_str()),
        }
    }
}

impl FromStr for CallbackData {
    type Err = CallbackParseError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        if data.is_empty() {
            return Err(CallbackParseError::Empty);
        }

        if let Some(action) = MenuAction::from_wire(data) {
            return Ok(CallbackData::Menu(action));
        }

        let (prefix, value) = data
            .split_once('_')
            .ok_or_else(|| CallbackParseError::UnknownIdentifier(data.to_string()))?;

        let category = AnswerCategory::from_prefix(prefix)
            .ok_or_else(|| CallbackParseError::UnknownIdentifier(data.to_string()))?;

        Answer::parse(category, value)
            .map(CallbackData::Answer)
            .ok_or_else(|| CallbackParseError::UnknownValue {
                category: category.prefix().to_string(),
                value: value.to_string(),
            })
    }
}

impl From<Answer> for CallbackData {
    fn from(answer: Answer) -> Self {
        CallbackData::Answer(answer)
    }
}

impl From<MenuAction> for CallbackData {
    fn from(action: MenuAction) -> Self {
        CallbackData::Menu(action)
    }
}
