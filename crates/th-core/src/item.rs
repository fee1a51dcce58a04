//! Kit items
//!
//! The catalog is fixed: every item a hunter can own is an [`Item`], and the
//! set of owned items is a [`Kit`].

use bitflags::bitflags;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// An item a hunter can carry in their kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Horse,
    Boat,
    Boots,
    Shovel,
    Sword,
}

impl Item {
    /// The kit bit for this item
    pub const fn flag(self) -> Kit {
        match self {
            Item::Water => Kit::WATER,
            Item::Rope => Kit::ROPE,
            Item::Machete => Kit::MACHETE,
            Item::Horse => Kit::HORSE,
            Item::Boat => Kit::BOAT,
            Item::Boots => Kit::BOOTS,
            Item::Shovel => Kit::SHOVEL,
            Item::Sword => Kit::SWORD,
        }
    }
}

bitflags! {
    /// The set of items a hunter owns
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Kit: u8 {
        const WATER = 1 << 0;
        const ROPE = 1 << 1;
        const MACHETE = 1 << 2;
        const HORSE = 1 << 3;
        const BOAT = 1 << 4;
        const BOOTS = 1 << 5;
        const SHOVEL = 1 << 6;
        const SWORD = 1 << 7;
    }
}

impl Kit {
    pub fn has(&self, item: Item) -> bool {
        self.contains(item.flag())
    }

    /// Add an item. Returns false if it was already in the kit.
    pub fn add(&mut self, item: Item) -> bool {
        let added = !self.has(item);
        self.insert(item.flag());
        added
    }

    /// Remove an item. Returns false if it was not in the kit.
    pub fn remove_item(&mut self, item: Item) -> bool {
        let removed = self.has(item);
        self.remove(item.flag());
        removed
    }

    /// Owned items in catalog order
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        Item::iter().filter(|item| self.has(*item))
    }
}

impl FromIterator<Item> for Kit {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        iter.into_iter().fold(Kit::empty(), |kit, item| kit | item.flag())
    }
}
