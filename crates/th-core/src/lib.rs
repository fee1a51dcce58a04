//! th-core: Core game logic for Treasure Hunter
//!
//! A hunter travels between randomly generated towns, trades at the shop,
//! crosses terrain that needs specific items, and gambles gold on brawls,
//! digging and treasure hunts.
//!
//! This crate contains all game logic with no I/O dependencies. Every
//! random decision draws from a [`RandomOutcome`] supplied by the caller,
//! so outcomes can be forced in tests with [`ScriptedRng`].

pub mod game;
pub mod hunter;
pub mod item;
pub mod mode;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod treasure;

mod rng;

pub use game::{Command, Game, GameError};
pub use hunter::Hunter;
pub use item::{Item, Kit};
pub use mode::{GameMode, ModeSettings};
pub use rng::{GameRng, RandomOutcome, ScriptedRng};
pub use shop::{Receipt, Shop, ShopChoice, ShopError};
pub use terrain::Terrain;
pub use town::{Brawl, Crossing, Dig, Town, TownState, TreasureSearch};
pub use treasure::{Treasure, TreasureCollection, TreasureFind};
