//! Property tests for game invariants over arbitrary seeds and setups.

use party_assassin::core::{Vocabulary, MAX_VISITED_PLACES};
use party_assassin::events::{EventKind, EventLog, NullSink};
use party_assassin::game::GameBuilder;
use party_assassin::rules::RosterRule;
use proptest::prelude::*;

fn names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z][a-z]{2,8}", 1..=max).prop_map(|set| set.into_iter().collect())
}

fn vocabulary() -> impl Strategy<Value = Vocabulary> {
    (names(8), names(6)).prop_map(|(places, weapons)| Vocabulary { places, weapons })
}

fn roster_rule() -> impl Strategy<Value = RosterRule> {
    prop_oneof![Just(RosterRule::Static), Just(RosterRule::EliminateWrongAccused)]
}

fn is_distinct(items: &[String]) -> bool {
    let mut sorted = items.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted.len() == items.len()
}

proptest! {
    #[test]
    fn prop_exactly_one_assassin(seed in any::<u64>(), players in 2usize..=30, vocab in vocabulary()) {
        let game = GameBuilder::new(vocab).player_count(players).build(seed).unwrap();
        let assassins = game.players().iter().filter(|(_, p)| p.is_assassin()).count();
        prop_assert_eq!(assassins, 1);
        prop_assert!(game.player(game.assassin()).is_assassin());
    }

    #[test]
    fn prop_start_game_draws_distinct_vocabulary(
        seed in any::<u64>(),
        players in 2usize..=10,
        vocab in vocabulary()
    ) {
        let mut game = GameBuilder::new(vocab.clone()).player_count(players).build(seed).unwrap();
        game.start_game(&mut NullSink).unwrap();

        let max_places = MAX_VISITED_PLACES.min(vocab.places.len());
        for (_, player) in game.players().iter() {
            let places = player.last_visited_places();
            prop_assert!(!places.is_empty() && places.len() <= max_places);
            prop_assert!(places.iter().all(|p| vocab.places.contains(p)));
            prop_assert!(is_distinct(places));

            let weapons = player.favorite_weapons();
            prop_assert!(!weapons.is_empty() && weapons.len() <= vocab.weapons.len());
            prop_assert!(weapons.iter().all(|w| vocab.weapons.contains(w)));
            prop_assert!(is_distinct(weapons));
        }
    }

    #[test]
    fn prop_round_pins_assassin_and_keeps_favorites_distinct(
        seed in any::<u64>(),
        players in 2usize..=10,
        vocab in vocabulary(),
        rule in roster_rule()
    ) {
        let mut game = GameBuilder::new(vocab)
            .player_count(players)
            .roster_rule(rule)
            .build(seed)
            .unwrap();
        game.start_game(&mut NullSink).unwrap();

        while !game.is_over() {
            let round = game.next_round(&mut NullSink).unwrap();
            let assassin = game.player(game.assassin());
            prop_assert_eq!(assassin.last_visited_places(), &[round.place.clone()][..]);
            prop_assert!(is_distinct(assassin.favorite_weapons()));
        }
    }

    #[test]
    fn prop_play_terminates_once(
        seed in any::<u64>(),
        players in 2usize..=12,
        vocab in vocabulary(),
        rule in roster_rule()
    ) {
        let mut game = GameBuilder::new(vocab)
            .player_count(players)
            .roster_rule(rule)
            .max_rounds(1_000)
            .build(seed)
            .unwrap();
        let mut log = EventLog::new();
        let outcome = game.play(&mut log).unwrap();

        prop_assert!(game.is_over());
        prop_assert_eq!(game.outcome(), Some(outcome));
        prop_assert!(outcome.is_resolved());
        let terminal = log.events().iter().filter(|e| e.is_terminal()).count();
        prop_assert_eq!(terminal, 1);
        prop_assert_eq!(log.count(EventKind::GameStarted), 1);
    }

    #[test]
    fn prop_caught_ends_round_immediately(seed in any::<u64>(), players in 3usize..=12) {
        let vocab = Vocabulary::new(["Kitchen", "Library"], ["Knife"]);
        let mut game = GameBuilder::new(vocab).player_count(players).build(seed).unwrap();
        game.start_game(&mut NullSink).unwrap();

        loop {
            let round = game.next_round(&mut NullSink).unwrap();
            match round.caught_by() {
                Some(caught_by) => {
                    let last = round.accusations.last().copied();
                    prop_assert_eq!(last, Some((caught_by, game.assassin())));
                    let earlier = &round.accusations[..round.accusations.len() - 1];
                    prop_assert!(earlier.iter().all(|&(_, accused)| accused != game.assassin()));
                    break;
                }
                None if game.is_over() => break,
                None => {
                    prop_assert_eq!(round.accusations.len(), players - 1);
                }
            }
        }
    }
}
