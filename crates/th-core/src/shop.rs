//! The town shop
//!
//! A fixed catalog with a mode-dependent markdown on items sold back to
//! the shopkeeper. A samurai-mode shop also stocks a sword, and a hunter
//! who carries one there gets everything for free.

use core::fmt;

use strum::{Display, EnumString};
use thiserror::Error;

use crate::hunter::Hunter;
use crate::item::Item;

/// Catalog prices. The sword is only stocked by samurai shops.
const CATALOG: [(Item, i32); 8] = [
    (Item::Water, 2),
    (Item::Rope, 4),
    (Item::Machete, 6),
    (Item::Shovel, 8),
    (Item::Boots, 10),
    (Item::Horse, 12),
    (Item::Boat, 20),
    (Item::Sword, 0),
];

/// Buying or selling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ShopChoice {
    #[strum(serialize = "b", serialize = "buy")]
    Buy,
    #[strum(serialize = "s", serialize = "sell")]
    Sell,
}

/// Why a shop transaction was refused. A refused transaction never
/// changes the hunter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    #[error("We don't deal in that kind of thing here.")]
    NotStocked(Item),

    #[error("You already have a {0}, stranger.")]
    AlreadyOwned(Item),

    #[error("You don't have a {0} to sell.")]
    NotOwned(Item),

    #[error("Hmm, a {item} costs {cost} gold and you only have {gold}. Come back when you can afford it.")]
    CannotAfford { item: Item, cost: i32, gold: i32 },
}

/// A completed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub choice: ShopChoice,
    pub item: Item,
    /// Gold paid by (buy) or to (sell) the hunter
    pub gold: i32,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.choice {
            ShopChoice::Buy if self.gold == 0 => write!(
                f,
                "The shopkeeper hands over the {} for free.",
                self.item
            ),
            ShopChoice::Buy => write!(
                f,
                "Ye' got yerself a {}. Come again soon. ({} gold)",
                self.item, self.gold
            ),
            ShopChoice::Sell => write!(
                f,
                "Pleasure doin' business with you. ({} gold for your {})",
                self.gold, self.item
            ),
        }
    }
}

/// Pricing policy over the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shop {
    /// Fraction of the cost paid back when the hunter sells
    markdown: f64,
    samurai: bool,
}

impl Shop {
    pub fn new(markdown: f64, samurai: bool) -> Self {
        Self { markdown, samurai }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    pub fn is_samurai(&self) -> bool {
        self.samurai
    }

    /// Catalog cost, or None if this shop doesn't deal in the item
    pub fn cost_of(&self, item: Item) -> Option<i32> {
        if item == Item::Sword && !self.samurai {
            return None;
        }
        CATALOG
            .iter()
            .find(|(stocked, _)| *stocked == item)
            .map(|(_, cost)| *cost)
    }

    /// Items this shop deals in, with their catalog cost
    pub fn stock(&self) -> impl Iterator<Item = (Item, i32)> + '_ {
        CATALOG
            .iter()
            .copied()
            .filter(|(item, _)| self.cost_of(*item).is_some())
    }

    /// What the hunter pays for an item
    pub fn buy_price(&self, item: Item, has_sword: bool) -> Option<i32> {
        let cost = self.cost_of(item)?;
        if self.samurai && has_sword {
            Some(0)
        } else {
            Some(cost)
        }
    }

    /// What the shopkeeper pays for an item
    pub fn sell_price(&self, item: Item) -> Option<i32> {
        let cost = self.cost_of(item)?;
        Some(((f64::from(cost) * self.markdown).floor() as i32).max(0))
    }

    /// Buy or sell one item.
    pub fn enter(
        &self,
        hunter: &mut Hunter,
        choice: ShopChoice,
        item: Item,
        has_sword: bool,
    ) -> Result<Receipt, ShopError> {
        match choice {
            ShopChoice::Buy => self.buy(hunter, item, has_sword),
            ShopChoice::Sell => self.sell(hunter, item),
        }
    }

    fn buy(&self, hunter: &mut Hunter, item: Item, has_sword: bool) -> Result<Receipt, ShopError> {
        let cost = self
            .buy_price(item, has_sword)
            .ok_or(ShopError::NotStocked(item))?;
        if hunter.has_item(item) {
            return Err(ShopError::AlreadyOwned(item));
        }
        if hunter.gold() < cost {
            return Err(ShopError::CannotAfford {
                item,
                cost,
                gold: hunter.gold(),
            });
        }

        hunter.change_gold(-cost);
        hunter.add_item(item);
        log::debug!("{} bought {} for {} gold", hunter.name(), item, cost);

        Ok(Receipt {
            choice: ShopChoice::Buy,
            item,
            gold: cost,
        })
    }

    fn sell(&self, hunter: &mut Hunter, item: Item) -> Result<Receipt, ShopError> {
        let price = self.sell_price(item).ok_or(ShopError::NotStocked(item))?;
        if !hunter.remove_item(item) {
            return Err(ShopError::NotOwned(item));
        }

        hunter.change_gold(price);
        log::debug!("{} sold {} for {} gold", hunter.name(), item, price);

        Ok(Receipt {
            choice: ShopChoice::Sell,
            item,
            gold: price,
        })
    }

    /// Menu text for a buy or sell visit
    pub fn listing(&self, choice: ShopChoice, has_sword: bool) -> String {
        let mut lines = vec![match choice {
            ShopChoice::Buy => "Welcome to the shop! We have the finest wares in town.".to_string(),
            ShopChoice::Sell => "Here's what I'll pay for your goods:".to_string(),
        }];
        for (item, _) in self.stock() {
            let price = match choice {
                ShopChoice::Buy => self.buy_price(item, has_sword),
                ShopChoice::Sell => self.sell_price(item),
            };
            if let Some(price) = price {
                lines.push(format!("{}: {} gold", item, price));
            }
        }
        lines.join("\n")
    }
}
