//! The hunter: name, gold, kit and treasures

use core::fmt;

use crate::item::{Item, Kit};
use crate::treasure::{TREASURE_COUNT, Treasure, TreasureCollection};

/// The player character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    name: String,
    /// Can go negative when a lost brawl ends the game
    gold: i32,
    kit: Kit,
    treasures: TreasureCollection,
}

impl Hunter {
    /// Create a hunter with starting gold, optionally already armed with a sword.
    pub fn new(name: impl Into<String>, gold: i32, has_sword: bool) -> Self {
        let mut kit = Kit::empty();
        if has_sword {
            kit.add(Item::Sword);
        }
        Self {
            name: name.into(),
            gold,
            kit,
            treasures: TreasureCollection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn kit(&self) -> Kit {
        self.kit
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.has(item)
    }

    /// Returns false if the item was already owned.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.kit.add(item)
    }

    /// Returns false if the item was not owned.
    pub fn remove_item(&mut self, item: Item) -> bool {
        self.kit.remove_item(item)
    }

    /// Apply a gold change unconditionally.
    ///
    /// Returns true when the resulting balance is below zero.
    pub fn change_gold(&mut self, delta: i32) -> bool {
        self.gold = self.gold.saturating_add(delta);
        self.gold < 0
    }

    /// Owned items in catalog order
    pub fn inventory(&self) -> Vec<Item> {
        self.kit.items().collect()
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(treasure)
    }

    /// Returns false if the treasure was already held.
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        self.treasures.insert(treasure)
    }

    pub fn treasures(&self) -> [Option<Treasure>; TREASURE_COUNT] {
        self.treasures.slots()
    }

    pub fn treasure_collection(&self) -> &TreasureCollection {
        &self.treasures
    }
}

impl fmt::Display for Hunter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;
        let items: Vec<String> = self.kit.items().map(|item| item.to_string()).collect();
        if items.is_empty() {
            write!(f, " and nothing in the kit")
        } else {
            write!(f, " and {}", items.join(", "))
        }
    }
}
