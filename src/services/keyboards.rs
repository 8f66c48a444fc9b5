//! Option menus shown with each reply

use crate::i18n::I18n;
use crate::models::{Answer, AnswerCategory, MenuAction, ReplyOption, WireValue};

/// Entries of the main menu, in display order
pub const MAIN_MENU: [MenuAction; 4] = [
    MenuAction::Catalog,
    MenuAction::Visa,
    MenuAction::Stats,
    MenuAction::Help,
];

/// Options for one onboarding question
pub fn answer_options(i18n: &I18n, category: AnswerCategory, lang: &str) -> Vec<ReplyOption> {
    Answer::options(category)
        .into_iter()
        .map(|answer| {
            let key = format!("buttons.{}.{}", category.prefix(), answer.value());
            ReplyOption::new(i18n.t(&key, lang, None), answer)
        })
        .collect()
}

/// The main menu
pub fn main_menu_options(i18n: &I18n, lang: &str) -> Vec<ReplyOption> {
    MAIN_MENU
        .into_iter()
        .map(|action| {
            let key = format!("buttons.main.{}", action.as_str());
            ReplyOption::new(i18n.t(&key, lang, None), action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_every_option_has_a_label() {
        let i18n = I18n::with_embedded(&Settings::default().i18n).unwrap();

        for lang in ["ru", "en"] {
            for category in AnswerCategory::ALL {
                for option in answer_options(&i18n, category, lang) {
                    assert!(!option.label.starts_with("buttons."), "missing label for {}", option.data);
                }
            }
            for option in main_menu_options(&i18n, lang) {
                assert!(!option.label.starts_with("buttons."), "missing label for {}", option.data);
            }
        }
    }

    #[test]
    fn test_region_menu_order() {
        let i18n = I18n::with_embedded(&Settings::default().i18n).unwrap();
        let ids: Vec<String> = answer_options(&i18n, AnswerCategory::Region, "en")
            .iter()
            .map(|o| o.data.to_string())
            .collect();

        assert_eq!(
            ids,
            vec!["region_phuket", "region_bali", "region_georgia", "region_turkey", "region_cyprus"]
        );
    }
}
