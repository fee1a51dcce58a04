//! Treasures and the hunter's collection of them

use strum::{Display, EnumIter};

/// A real treasure. Each can be held at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Treasure {
    Crown,
    Gem,
    Trophy,
}

/// Number of distinct treasures
pub const TREASURE_COUNT: usize = 3;

/// Result of a single treasure draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureFind {
    Found(Treasure),
    /// Nothing of value; never stored
    Dirt,
}

impl TreasureFind {
    /// Map a uniform draw onto four equal quarters: crown, gem, trophy, dirt.
    pub fn from_draw(draw: f64) -> Self {
        if draw < 0.25 {
            TreasureFind::Found(Treasure::Crown)
        } else if draw < 0.5 {
            TreasureFind::Found(Treasure::Gem)
        } else if draw < 0.75 {
            TreasureFind::Found(Treasure::Trophy)
        } else {
            TreasureFind::Dirt
        }
    }
}

/// Treasures held by a hunter, in the order they were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreasureCollection {
    slots: [Option<Treasure>; TREASURE_COUNT],
}

impl TreasureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, treasure: Treasure) -> bool {
        self.slots.contains(&Some(treasure))
    }

    /// Store a treasure in the first free slot.
    ///
    /// Returns false without changing anything if it is already held.
    pub fn insert(&mut self, treasure: Treasure) -> bool {
        if self.contains(treasure) {
            return false;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(treasure);
                true
            }
            None => false,
        }
    }

    /// Fixed-size view with `None` for empty slots
    pub fn slots(&self) -> [Option<Treasure>; TREASURE_COUNT] {
        self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_quarters() {
        assert_eq!(TreasureFind::from_draw(0.0), TreasureFind::Found(Treasure::Crown));
        assert_eq!(TreasureFind::from_draw(0.2499), TreasureFind::Found(Treasure::Crown));
        assert_eq!(TreasureFind::from_draw(0.25), TreasureFind::Found(Treasure::Gem));
        assert_eq!(TreasureFind::from_draw(0.5), TreasureFind::Found(Treasure::Trophy));
        assert_eq!(TreasureFind::from_draw(0.75), TreasureFind::Dirt);
        assert_eq!(TreasureFind::from_draw(0.99), TreasureFind::Dirt);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut collection = TreasureCollection::new();
        assert!(collection.insert(Treasure::Gem));
        assert!(!collection.insert(Treasure::Gem));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.slots(), [Some(Treasure::Gem), None, None]);
    }

    #[test]
    fn test_fills_in_discovery_order() {
        let mut collection = TreasureCollection::new();
        for treasure in [Treasure::Trophy, Treasure::Crown, Treasure::Gem] {
            assert!(collection.insert(treasure));
        }
        let found: Vec<_> = collection.iter().collect();
        assert_eq!(found, vec![Treasure::Trophy, Treasure::Crown, Treasure::Gem]);
        assert_eq!(collection.len(), Treasure::iter().count());
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Treasure::Crown.to_string(), "crown");
        assert_eq!(Treasure::Trophy.to_string(), "trophy");
    }
}
