//! Game modes and their balance settings

use strum::{Display, EnumIter, EnumString};

use crate::shop::Shop;

/// Difficulty preset chosen at the start of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    #[strum(serialize = "e", to_string = "easy")]
    Easy,
    #[default]
    #[strum(serialize = "n", to_string = "normal")]
    Normal,
    #[strum(serialize = "h", to_string = "hard")]
    Hard,
    #[strum(serialize = "t", to_string = "test")]
    Test,
    #[strum(serialize = "s", to_string = "samurai")]
    Samurai,
}

/// Balance settings for a mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeSettings {
    pub starting_gold: i32,
    pub starts_with_sword: bool,
    /// Probability that a new town is tough
    pub toughness: f64,
    /// Fraction of an item's cost the shop pays back
    pub markdown: f64,
    pub samurai_shop: bool,
    /// Crossing items never break
    pub easy_crossings: bool,
}

impl GameMode {
    /// Parse a mode answer, falling back to Normal for anything unrecognized.
    pub fn from_answer(answer: &str) -> Self {
        answer.trim().parse().unwrap_or_default()
    }

    pub const fn settings(self) -> ModeSettings {
        let normal = ModeSettings {
            starting_gold: 10,
            starts_with_sword: false,
            toughness: 0.4,
            markdown: 0.5,
            samurai_shop: false,
            easy_crossings: false,
        };
        match self {
            GameMode::Easy => ModeSettings {
                starting_gold: 20,
                toughness: 0.2,
                markdown: 1.0,
                easy_crossings: true,
                ..normal
            },
            GameMode::Normal => normal,
            GameMode::Hard => ModeSettings {
                toughness: 0.75,
                markdown: 0.25,
                ..normal
            },
            GameMode::Test => ModeSettings {
                starting_gold: 100,
                starts_with_sword: true,
                ..normal
            },
            GameMode::Samurai => ModeSettings {
                samurai_shop: true,
                ..normal
            },
        }
    }

    /// A fresh shop priced for this mode
    pub fn shop(self) -> Shop {
        let settings = self.settings();
        Shop::new(settings.markdown, settings.samurai_shop)
    }
}
