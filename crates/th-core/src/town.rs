//! Town encounters
//!
//! A [`Town`] is generated with a terrain and a toughness roll that never
//! change afterwards. The hunter can try to leave, brawl, dig for gold once,
//! and hunt for treasure. Each operation updates the town's latest news and
//! returns a typed outcome.
//!
//! The hunter is passed into each operation rather than stored, and all
//! randomness comes from the caller's [`RandomOutcome`].

use core::fmt;

use crate::hunter::Hunter;
use crate::item::Item;
use crate::rng::RandomOutcome;
use crate::shop::{Receipt, Shop, ShopChoice, ShopError};
use crate::terrain::Terrain;
use crate::treasure::{Treasure, TreasureFind};

/// Brawl threshold in a tough town
const TOUGH_THRESHOLD: f64 = 0.66;
/// Brawl threshold in a quiet town
const QUIET_THRESHOLD: f64 = 0.33;
/// Chance that a crossing item breaks outside easy mode
const ITEM_BREAK_CHANCE: f64 = 0.5;
/// Largest brawl stake
const MAX_STAKE: u32 = 10;
/// Largest amount found by digging
const MAX_DUG_GOLD: u32 = 20;

const LEFT_SHOP: &str = "You have left the shop";
const BRAWL_OPENING: &str = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n";

/// Per-town state. Terrain and toughness are fixed at construction;
/// `dug_for_gold` and `game_over` only ever go from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TownState {
    pub terrain: Terrain,
    pub tough: bool,
    pub dug_for_gold: bool,
    pub game_over: bool,
}

/// Result of trying to leave town
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The hunter lacks the crossing item
    Blocked { item: Item },
    Crossed {
        terrain: Terrain,
        item: Item,
        /// The item was lost on the way
        broke: bool,
    },
}

impl Crossing {
    pub fn crossed(&self) -> bool {
        matches!(self, Crossing::Crossed { .. })
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crossing::Blocked { item } => write!(f, "You don't have a {}.", item),
            Crossing::Crossed {
                terrain,
                item,
                broke,
            } => {
                write!(f, "You used your {} to cross the {}.", item, terrain)?;
                if *broke {
                    write!(f, "\nUnfortunately, you lost your {}.", item)?;
                }
                Ok(())
            }
        }
    }
}

/// Result of looking for trouble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brawl {
    NoTrouble,
    Won { stake: i32, by_sword: bool },
    Lost { stake: i32 },
}

impl fmt::Display for Brawl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Brawl::NoTrouble => write!(f, "You couldn't find any trouble"),
            Brawl::Won {
                stake,
                by_sword: true,
            } => write!(
                f,
                "{}The brawler, seeing your sword, realizes he picked a losing fight and gives you all his gold. ({} gold)",
                BRAWL_OPENING, stake
            ),
            Brawl::Won { stake, .. } => write!(
                f,
                "{}Okay, stranger! You proved yer mettle. Here, take my gold.\nYou won the brawl and receive {} gold.",
                BRAWL_OPENING, stake
            ),
            Brawl::Lost { stake } => write!(
                f,
                "{}That'll teach you to go lookin' fer trouble in MY town! Now pay up!\nYou lost the brawl and pay {} gold.",
                BRAWL_OPENING, stake
            ),
        }
    }
}

/// Result of digging for gold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dig {
    NoShovel,
    AlreadyDug,
    Gold(i32),
    Dirt,
}

impl fmt::Display for Dig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dig::NoShovel => write!(f, "You can't dig for gold without a shovel"),
            Dig::AlreadyDug => write!(f, "You already dug for gold in this town."),
            Dig::Gold(amount) => write!(f, "You dug up {} gold!", amount),
            Dig::Dirt => write!(f, "You dug but only found dirt"),
        }
    }
}

/// Result of hunting for treasure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureSearch {
    Discovered(Treasure),
    AlreadyHeld(Treasure),
    Dirt,
}

impl fmt::Display for TreasureSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreasureSearch::Discovered(treasure) => write!(f, "You have found a {}!", treasure),
            TreasureSearch::AlreadyHeld(treasure) => {
                write!(f, "You have already found a {}!", treasure)
            }
            TreasureSearch::Dirt => write!(f, "You have found dirt!"),
        }
    }
}

/// A town the hunter is visiting
#[derive(Debug, Clone)]
pub struct Town {
    shop: Shop,
    state: TownState,
    news: String,
}

impl Town {
    /// Generate a town. `toughness` is the probability that it is tough.
    ///
    /// Draws the terrain first, then the toughness roll.
    pub fn new(shop: Shop, toughness: f64, rng: &mut impl RandomOutcome) -> Self {
        let terrain = Terrain::generate(rng);
        let tough = rng.uniform() < toughness;
        log::debug!("generated town: terrain={}, tough={}", terrain, tough);

        Self {
            shop,
            state: TownState {
                terrain,
                tough,
                dug_for_gold: false,
                game_over: false,
            },
            news: String::new(),
        }
    }

    /// Greet an arriving hunter. Call once per town.
    pub fn hunter_arrives(&mut self, hunter: &Hunter) -> &str {
        let mood = if self.state.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        self.news = format!("Welcome to town, {}.\n{}", hunter.name(), mood);
        &self.news
    }

    /// Try to cross the surrounding terrain.
    ///
    /// Outside easy mode the crossing item breaks half the time.
    pub fn leave_town(
        &mut self,
        hunter: &mut Hunter,
        easy_mode: bool,
        rng: &mut impl RandomOutcome,
    ) -> Crossing {
        let terrain = self.state.terrain;
        let item = terrain.needed_item();

        if !terrain.can_cross(hunter) {
            let crossing = Crossing::Blocked { item };
            self.news = format!("You can't leave town, {}. {}", hunter.name(), crossing);
            return crossing;
        }

        let broke = !easy_mode && rng.uniform() < ITEM_BREAK_CHANCE;
        if broke {
            hunter.remove_item(item);
            log::debug!("{} broke crossing the {}", item, terrain);
        }

        let crossing = Crossing::Crossed {
            terrain,
            item,
            broke,
        };
        self.news = crossing.to_string();
        crossing
    }

    /// Buy or sell one item at this town's shop.
    pub fn enter_shop(
        &mut self,
        hunter: &mut Hunter,
        choice: ShopChoice,
        item: Item,
    ) -> Result<Receipt, ShopError> {
        let has_sword = hunter.has_item(Item::Sword);
        let result = self.shop.enter(hunter, choice, item, has_sword);
        self.news = LEFT_SHOP.to_string();
        result
    }

    /// Look for a brawl.
    ///
    /// The same threshold decides whether a brawl is found and, for an
    /// unarmed hunter, whether it is won. A loss that leaves the hunter's
    /// gold below zero ends the game.
    pub fn look_for_trouble(
        &mut self,
        hunter: &mut Hunter,
        has_sword: bool,
        rng: &mut impl RandomOutcome,
    ) -> Brawl {
        let threshold = self.trouble_threshold();

        let brawl = if rng.uniform() <= threshold {
            Brawl::NoTrouble
        } else {
            let stake = rng.roll(MAX_STAKE) as i32;
            let won = has_sword || rng.uniform() > threshold;
            if won {
                hunter.change_gold(stake);
                Brawl::Won {
                    stake,
                    by_sword: has_sword,
                }
            } else {
                if hunter.change_gold(-stake) {
                    self.state.game_over = true;
                    log::info!("{} lost a brawl with {} gold left", hunter.name(), hunter.gold());
                }
                Brawl::Lost { stake }
            }
        };

        log::debug!("brawl: {:?}", brawl);
        self.news = brawl.to_string();
        brawl
    }

    /// Dig for gold. Needs a shovel and works once per town.
    pub fn look_for_gold(&mut self, hunter: &mut Hunter, rng: &mut impl RandomOutcome) -> Dig {
        let dig = if !hunter.has_item(Item::Shovel) {
            Dig::NoShovel
        } else if self.state.dug_for_gold {
            Dig::AlreadyDug
        } else {
            self.state.dug_for_gold = true;
            if rng.roll(2) == 1 {
                let amount = rng.roll(MAX_DUG_GOLD) as i32;
                hunter.change_gold(amount);
                Dig::Gold(amount)
            } else {
                Dig::Dirt
            }
        };

        self.news = dig.to_string();
        dig
    }

    /// Search for treasure. Holds no repeat guard of its own.
    pub fn look_for_treasure(
        &mut self,
        hunter: &mut Hunter,
        rng: &mut impl RandomOutcome,
    ) -> TreasureSearch {
        let search = match TreasureFind::from_draw(rng.uniform()) {
            TreasureFind::Found(treasure) if hunter.add_treasure(treasure) => {
                TreasureSearch::Discovered(treasure)
            }
            TreasureFind::Found(treasure) => TreasureSearch::AlreadyHeld(treasure),
            TreasureFind::Dirt => TreasureSearch::Dirt,
        };

        self.news = search.to_string();
        search
    }

    fn trouble_threshold(&self) -> f64 {
        if self.state.tough {
            TOUGH_THRESHOLD
        } else {
            QUIET_THRESHOLD
        }
    }

    pub fn latest_news(&self) -> &str {
        &self.news
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn terrain(&self) -> Terrain {
        self.state.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.state.tough
    }

    pub fn dug_for_gold(&self) -> bool {
        self.state.dug_for_gold
    }

    pub fn state(&self) -> TownState {
        self.state
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This nice little town is surrounded by {}.", self.state.terrain)
    }
}
