//! Terrain surrounding a town

use strum::{Display, EnumIter};

use crate::hunter::Hunter;
use crate::item::Item;
use crate::rng::RandomOutcome;

/// The terrain around a town and the item needed to cross it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Marsh,
    Jungle,
}

/// Upper bound (exclusive) of each terrain's probability band.
/// Draws at or above the last bound are Jungle.
const TERRAIN_BANDS: [(f64, Terrain); 5] = [
    (0.166, Terrain::Mountains),
    (0.332, Terrain::Ocean),
    (0.498, Terrain::Plains),
    (0.664, Terrain::Desert),
    (0.83, Terrain::Marsh),
];

impl Terrain {
    /// The crossing item for this terrain
    pub const fn needed_item(self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Marsh => Item::Boots,
            Terrain::Jungle => Item::Machete,
        }
    }

    pub fn from_draw(draw: f64) -> Self {
        TERRAIN_BANDS
            .iter()
            .find(|(bound, _)| draw < *bound)
            .map(|(_, terrain)| *terrain)
            .unwrap_or(Terrain::Jungle)
    }

    /// Draw a fresh terrain
    pub fn generate(rng: &mut impl RandomOutcome) -> Self {
        Self::from_draw(rng.uniform())
    }

    pub fn can_cross(self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed_item())
    }
}
