//! Property tests for the town state machine

use proptest::prelude::*;
use strum::IntoEnumIterator;
use th_core::{Brawl, Dig, Hunter, Item, Kit, ScriptedRng, Shop, Terrain, Town, Treasure};

/// A draw in the middle of each terrain band
fn draw_for(terrain: Terrain) -> f64 {
    match terrain {
        Terrain::Mountains => 0.08,
        Terrain::Ocean => 0.25,
        Terrain::Plains => 0.4,
        Terrain::Desert => 0.58,
        Terrain::Marsh => 0.75,
        Terrain::Jungle => 0.9,
    }
}

fn town_with(terrain: Terrain, tough: bool) -> Town {
    let toughness = if tough { 1.0 } else { 0.0 };
    Town::new(
        Shop::new(0.5, false),
        toughness,
        &mut ScriptedRng::new([draw_for(terrain), 0.5]),
    )
}

fn hunter_with(kit: Kit, gold: i32) -> Hunter {
    let mut hunter = Hunter::new("ivan", gold, false);
    for item in kit.items() {
        hunter.add_item(item);
    }
    hunter
}

fn any_terrain() -> impl Strategy<Value = Terrain> {
    (0usize..6).prop_map(|index| Terrain::iter().nth(index).unwrap_or(Terrain::Jungle))
}

fn any_kit() -> impl Strategy<Value = Kit> {
    any::<u8>().prop_map(Kit::from_bits_truncate)
}

proptest! {
    #[test]
    fn terrain_matches_its_band(draw in 0.0f64..1.0) {
        let expected = if draw < 0.166 {
            Terrain::Mountains
        } else if draw < 0.332 {
            Terrain::Ocean
        } else if draw < 0.498 {
            Terrain::Plains
        } else if draw < 0.664 {
            Terrain::Desert
        } else if draw < 0.83 {
            Terrain::Marsh
        } else {
            Terrain::Jungle
        };
        prop_assert_eq!(Terrain::from_draw(draw), expected);
    }

    #[test]
    fn cannot_leave_without_crossing_item(
        terrain in any_terrain(),
        kit in any_kit(),
        tough in any::<bool>(),
        easy in any::<bool>(),
        draws in prop::collection::vec(0.0f64..1.0, 1..4),
    ) {
        let needed = terrain.needed_item();
        let mut kit = kit;
        kit.remove_item(needed);

        let mut town = town_with(terrain, tough);
        let mut hunter = hunter_with(kit, 10);
        let before = town.state();

        let crossing = town.leave_town(&mut hunter, easy, &mut ScriptedRng::new(draws));
        prop_assert!(!crossing.crossed());
        prop_assert_eq!(town.state(), before);
        prop_assert_eq!(hunter.kit(), kit);
        let missing = format!("You don't have a {}.", needed);
        prop_assert!(town.latest_news().contains(&missing));
    }

    #[test]
    fn first_dig_always_uses_up_the_town(
        gold in 0i32..100,
        draws in prop::collection::vec(0.0f64..1.0, 2..4),
    ) {
        let mut town = town_with(Terrain::Desert, false);
        let mut hunter = hunter_with(Item::Shovel.flag(), gold);
        let mut rng = ScriptedRng::new(draws);

        let first = town.look_for_gold(&mut hunter, &mut rng);
        prop_assert!(town.dug_for_gold());
        match first {
            Dig::Gold(amount) => {
                prop_assert!((1..=20).contains(&amount));
                prop_assert_eq!(hunter.gold(), gold + amount);
            }
            Dig::Dirt => prop_assert_eq!(hunter.gold(), gold),
            other => prop_assert!(false, "unexpected first dig {:?}", other),
        }

        let after_first = hunter.gold();
        for _ in 0..3 {
            prop_assert_eq!(town.look_for_gold(&mut hunter, &mut rng), Dig::AlreadyDug);
            prop_assert_eq!(hunter.gold(), after_first);
            prop_assert!(town.dug_for_gold());
        }
    }

    #[test]
    fn digging_without_shovel_changes_nothing(
        kit in any_kit(),
        gold in -5i32..100,
        dig_first in any::<bool>(),
        draws in prop::collection::vec(0.0f64..1.0, 2..4),
    ) {
        let mut town = town_with(Terrain::Marsh, false);
        let mut rng = ScriptedRng::new(draws);
        if dig_first {
            let mut digger = hunter_with(Item::Shovel.flag(), 0);
            town.look_for_gold(&mut digger, &mut rng);
        }
        let dug_before = town.dug_for_gold();

        let mut kit = kit;
        kit.remove_item(Item::Shovel);
        let mut hunter = hunter_with(kit, gold);

        prop_assert_eq!(town.look_for_gold(&mut hunter, &mut rng), Dig::NoShovel);
        prop_assert_eq!(hunter.gold(), gold);
        prop_assert_eq!(town.dug_for_gold(), dug_before);
    }

    #[test]
    fn treasures_are_never_duplicated(draws in prop::collection::vec(0.0f64..1.0, 1..40)) {
        let mut town = town_with(Terrain::Ocean, false);
        let mut hunter = Hunter::new("ivan", 10, false);
        let mut rng = ScriptedRng::new(draws.clone());

        for _ in 0..draws.len() {
            town.look_for_treasure(&mut hunter, &mut rng);
        }

        for treasure in Treasure::iter() {
            let held = hunter.treasures().iter().filter(|slot| **slot == Some(treasure)).count();
            prop_assert!(held <= 1);
        }
        prop_assert!(hunter.treasure_collection().len() <= 3);
    }

    #[test]
    fn armed_brawls_never_cost_gold(
        tough in any::<bool>(),
        gold in 0i32..50,
        draws in prop::collection::vec(0.0f64..1.0, 1..8),
    ) {
        let mut town = town_with(Terrain::Jungle, tough);
        let mut hunter = Hunter::new("musashi", gold, true);
        let mut rng = ScriptedRng::new(draws);

        for _ in 0..10 {
            let before = hunter.gold();
            let brawl = town.look_for_trouble(&mut hunter, true, &mut rng);
            let lost = matches!(brawl, Brawl::Lost { .. });
            prop_assert!(!lost, "armed hunter lost {:?}", brawl);
            prop_assert!(hunter.gold() >= before);
        }
        prop_assert!(!town.game_over());
    }
}
