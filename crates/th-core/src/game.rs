//! A game session: one hunter moving from town to town
//!
//! Owns the hunter, the current town and the random source, and enforces
//! the rules that span towns: one treasure hunt per town, and no more
//! actions once a brawl has bankrupted the hunter.

use core::str::FromStr;

use thiserror::Error;

use crate::hunter::Hunter;
use crate::item::Item;
use crate::mode::GameMode;
use crate::rng::{GameRng, RandomOutcome};
use crate::shop::{Receipt, ShopChoice, ShopError};
use crate::town::{Brawl, Crossing, Dig, Town, TreasureSearch};

/// Menu commands, one per turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy,
    Sell,
    Move,
    Trouble,
    Dig,
    Hunt,
    Exit,
}

impl Command {
    /// Map a menu key to a command
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'b' => Some(Command::Buy),
            's' => Some(Command::Sell),
            'm' => Some(Command::Move),
            'l' => Some(Command::Trouble),
            'd' => Some(Command::Dig),
            'h' => Some(Command::Hunt),
            'x' => Some(Command::Exit),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => {
                Command::from_key(key).ok_or_else(|| GameError::UnknownCommand(trimmed.to_string()))
            }
            _ => Err(GameError::UnknownCommand(trimmed.to_string())),
        }
    }
}

/// Actions the session refuses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Yikes! That's an invalid option! Try again.")]
    UnknownCommand(String),

    #[error("You have already searched this town.")]
    AlreadySearched,

    #[error("The game is over.")]
    GameOver,

    #[error(transparent)]
    Shop(#[from] ShopError),
}

/// A running game
#[derive(Debug, Clone)]
pub struct Game<R: RandomOutcome = GameRng> {
    hunter: Hunter,
    mode: GameMode,
    town: Town,
    rng: R,
    searched_for_treasure: bool,
    towns_visited: u32,
}

impl<R: RandomOutcome> Game<R> {
    /// Create the hunter for `mode` and enter the first town.
    pub fn new(name: impl Into<String>, mode: GameMode, mut rng: R) -> Self {
        let settings = mode.settings();
        let hunter = Hunter::new(name, settings.starting_gold, settings.starts_with_sword);
        let mut town = Town::new(mode.shop(), settings.toughness, &mut rng);
        town.hunter_arrives(&hunter);
        log::info!("{} starts a {} game", hunter.name(), mode);

        Self {
            hunter,
            mode,
            town,
            rng,
            searched_for_treasure: false,
            towns_visited: 1,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    pub fn searched_for_treasure(&self) -> bool {
        self.searched_for_treasure
    }

    pub fn is_over(&self) -> bool {
        self.town.game_over()
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Buy or sell one item at the current town's shop.
    pub fn shop(&mut self, choice: ShopChoice, item: Item) -> Result<Receipt, GameError> {
        self.ensure_running()?;
        Ok(self.town.enter_shop(&mut self.hunter, choice, item)?)
    }

    /// Try to leave for a new town.
    ///
    /// On success the returned crossing describes the departure and the
    /// session has already moved into a freshly generated town.
    pub fn move_on(&mut self) -> Result<Crossing, GameError> {
        self.ensure_running()?;
        let easy = self.mode.settings().easy_crossings;
        let crossing = self.town.leave_town(&mut self.hunter, easy, &mut self.rng);
        if crossing.crossed() {
            self.enter_town();
        }
        Ok(crossing)
    }

    pub fn look_for_trouble(&mut self) -> Result<Brawl, GameError> {
        self.ensure_running()?;
        let has_sword = self.hunter.has_item(Item::Sword);
        Ok(self.town.look_for_trouble(&mut self.hunter, has_sword, &mut self.rng))
    }

    pub fn dig(&mut self) -> Result<Dig, GameError> {
        self.ensure_running()?;
        Ok(self.town.look_for_gold(&mut self.hunter, &mut self.rng))
    }

    /// Hunt for treasure, once per town.
    pub fn hunt_treasure(&mut self) -> Result<TreasureSearch, GameError> {
        self.ensure_running()?;
        if self.searched_for_treasure {
            return Err(GameError::AlreadySearched);
        }
        self.searched_for_treasure = true;
        Ok(self.town.look_for_treasure(&mut self.hunter, &mut self.rng))
    }

    fn enter_town(&mut self) {
        let settings = self.mode.settings();
        self.town = Town::new(self.mode.shop(), settings.toughness, &mut self.rng);
        self.town.hunter_arrives(&self.hunter);
        self.searched_for_treasure = false;
        self.towns_visited += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::terrain::Terrain;
    use crate::treasure::Treasure;

    #[test]
    fn test_command_keys() {
        assert_eq!(Command::from_key('L'), Some(Command::Trouble));
        assert_eq!(Command::from_key('q'), None);
        assert_eq!("h".parse::<Command>(), Ok(Command::Hunt));
        assert_eq!(" x\n".parse::<Command>(), Ok(Command::Exit));
        assert_eq!(
            "buy".parse::<Command>(),
            Err(GameError::UnknownCommand("buy".to_string()))
        );
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_new_game_uses_mode_settings() {
        let game = Game::new("ivan", GameMode::Test, ScriptedRng::new([0.1, 0.9]));
        assert_eq!(game.hunter().gold(), 100);
        assert!(game.hunter().has_item(Item::Sword));
        assert_eq!(game.town().terrain(), Terrain::Mountains);
        assert!(game.town().latest_news().starts_with("Welcome to town, ivan."));
        assert_eq!(game.towns_visited(), 1);
        assert_eq!(game.mode(), GameMode::Test);
        assert_eq!(game.rng().consumed(), 2);
    }

    #[test]
    fn test_treasure_hunt_once_per_town() {
        let mut game = Game::new("ivan", GameMode::Normal, ScriptedRng::new([0.1, 0.9, 0.1]));

        let search = game.hunt_treasure().unwrap();
        assert_eq!(search, TreasureSearch::Discovered(Treasure::Crown));
        assert_eq!(game.hunt_treasure(), Err(GameError::AlreadySearched));
        assert!(game.searched_for_treasure());
        // the refused repeat draws nothing
        assert_eq!(game.rng().consumed(), 3);
    }

    #[test]
    fn test_moving_on_resets_search_flag() {
        // Mountains, quiet; dirt; rope survives; next town Ocean, quiet
        let rng = ScriptedRng::new([0.1, 0.9, 0.9, 0.9, 0.2, 0.9]);
        let mut game = Game::new("ivan", GameMode::Normal, rng);
        game.hunter.add_item(Item::Rope);

        assert_eq!(game.hunt_treasure(), Ok(TreasureSearch::Dirt));
        let crossing = game.move_on().unwrap();
        assert!(crossing.crossed());
        assert_eq!(game.town().terrain(), Terrain::Ocean);
        assert_eq!(game.towns_visited(), 2);
        assert!(!game.searched_for_treasure());
        assert!(game.hunter().has_item(Item::Rope));
    }

    #[test]
    fn test_blocked_move_stays_in_town() {
        let mut game = Game::new("ivan", GameMode::Normal, ScriptedRng::new([0.1, 0.9]));
        let crossing = game.move_on().unwrap();
        assert_eq!(crossing, Crossing::Blocked { item: Item::Rope });
        assert_eq!(game.towns_visited(), 1);
        assert_eq!(game.rng().consumed(), 2);
    }

    #[test]
    fn test_shop_errors_convert() {
        let mut game = Game::new("ivan", GameMode::Normal, ScriptedRng::new([0.1, 0.9]));
        let err = game.shop(ShopChoice::Buy, Item::Boat).unwrap_err();
        assert!(matches!(err, GameError::Shop(ShopError::CannotAfford { .. })));
        assert_eq!(game.town().latest_news(), "You have left the shop");
    }

    #[test]
    fn test_actions_refused_after_game_over() {
        // quiet Mountains; lose 10, then lose 1
        let rng = ScriptedRng::new([0.1, 0.9, 0.9, 0.99, 0.0, 0.9, 0.0, 0.0]);
        let mut game = Game::new("ivan", GameMode::Normal, rng);

        assert_eq!(game.look_for_trouble(), Ok(Brawl::Lost { stake: 10 }));
        assert_eq!(game.hunter().gold(), 0);
        assert!(!game.is_over());

        assert_eq!(game.look_for_trouble(), Ok(Brawl::Lost { stake: 1 }));
        assert_eq!(game.hunter().gold(), -1);
        assert!(game.is_over());
        assert_eq!(game.dig(), Err(GameError::GameOver));
        assert_eq!(game.hunt_treasure(), Err(GameError::GameOver));
        assert_eq!(game.move_on(), Err(GameError::GameOver));
    }
}
