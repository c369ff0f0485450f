//! The assassin party game.

use serde::{Deserialize, Serialize};

use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerMap, Vocabulary,
    VocabularyKind,
};
use crate::events::{EventSink, GameEvent};
use crate::rules::{GameOutcome, RosterRule, ASSASSIN_WIN_ROSTER};

/// What happened during one call to [`Game::next_round`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number, starting at 1.
    pub number: u32,
    /// Where the murder happened.
    pub place: String,
    /// The murder weapon.
    pub weapon: String,
    /// `(accuser, accused)` pairs in roster order.
    pub accusations: Vec<(PlayerId, PlayerId)>,
    /// Players eliminated this round (only under `RosterRule::EliminateWrongAccused`).
    pub eliminated: Vec<PlayerId>,
    /// Set when this round ended the game.
    pub outcome: Option<GameOutcome>,
}

impl Round {
    /// The player who caught the assassin this round, if anyone did.
    #[must_use]
    pub fn caught_by(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(GameOutcome::AssassinCaught { caught_by, .. }) => Some(caught_by),
            _ => None,
        }
    }
}

/// A running game: the roster, the shared vocabularies and the RNG.
///
/// The game is `Running` until an outcome is recorded, after which it is
/// `Over` for good.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    places: Vec<String>,
    weapons: Vec<String>,
    players: PlayerMap<Player>,
    /// Players still in the game. Always all `true` under `RosterRule::Static`.
    active: PlayerMap<bool>,
    assassin: PlayerId,
    rng: GameRng,
    round: u32,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Set up a game and secretly pick the assassin.
    ///
    /// Fails if either vocabulary is empty or the player count is outside
    /// 2-255.
    pub fn new(vocabulary: Vocabulary, config: GameConfig, mut rng: GameRng) -> Result<Self, GameError> {
        let Vocabulary { places, weapons } = vocabulary;
        if places.is_empty() {
            return Err(GameError::EmptyVocabulary { kind: VocabularyKind::Places });
        }
        if weapons.is_empty() {
            return Err(GameError::EmptyVocabulary { kind: VocabularyKind::Weapons });
        }
        let player_count = config.player_count;
        if player_count < 2 {
            return Err(GameError::NotEnoughPlayers { count: player_count });
        }
        if player_count > u8::MAX as usize {
            return Err(GameError::TooManyPlayers { count: player_count });
        }

        let mut players = PlayerMap::new(player_count, Player::new);
        let assassin = PlayerId::new(rng.gen_range_usize(0..player_count) as u8);
        players[assassin].make_assassin();
        log::debug!(
            "new game: {} players, {} places, {} weapons, seed {}",
            player_count,
            places.len(),
            weapons.len(),
            rng.seed()
        );

        Ok(Self {
            active: PlayerMap::new(player_count, |_| true),
            config,
            places,
            weapons,
            players,
            assassin,
            rng,
            round: 0,
            outcome: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn places(&self) -> &[String] {
        &self.places
    }

    #[must_use]
    pub fn weapons(&self) -> &[String] {
        &self.weapons
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The assassin's id. Fixed for the lifetime of the game.
    #[must_use]
    pub fn assassin(&self) -> PlayerId {
        self.assassin
    }

    /// Check whether a player is still in the game.
    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        self.active[id]
    }

    /// Players still in the game, in roster order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.active
            .iter()
            .filter(|&(_, &active)| active)
            .map(|(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.active.iter().filter(|&(_, &active)| active).count()
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Capture the RNG position, e.g. to replay the rest of a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Play ===

    /// Every player visits places and picks favorite weapons.
    ///
    /// Calling this again re-randomizes every player.
    pub fn start_game<S: EventSink + ?Sized>(&mut self, events: &mut S) -> Result<(), GameError> {
        for (_, player) in self.players.iter_mut() {
            player.visit_places(&self.places, &mut self.rng)?;
            player.choose_favorite_weapons(&self.weapons, &mut self.rng)?;
        }
        events.emit(&GameEvent::GameStarted { players: self.players.player_count() });
        Ok(())
    }

    /// Play one round: a murder, then one accusation per innocent player
    /// until someone names the assassin.
    ///
    /// Returns `GameError::GameOver` if the game has already ended.
    pub fn next_round<S: EventSink + ?Sized>(&mut self, events: &mut S) -> Result<Round, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.round += 1;
        log::debug!("round {} begins", self.round);

        let place = self
            .rng
            .choose(&self.places)
            .cloned()
            .ok_or(GameError::EmptyVocabulary { kind: VocabularyKind::Places })?;
        let weapon = self
            .rng
            .choose(&self.weapons)
            .cloned()
            .ok_or(GameError::EmptyVocabulary { kind: VocabularyKind::Weapons })?;

        let assassin = &mut self.players[self.assassin];
        assassin.place_at(&place);
        assassin.favor_weapon(&weapon);
        events.emit(&GameEvent::Murder {
            round: self.round,
            place: place.clone(),
            weapon: weapon.clone(),
        });

        let mut round = Round {
            number: self.round,
            place,
            weapon,
            accusations: Vec::new(),
            eliminated: Vec::new(),
            outcome: None,
        };

        let accusers: Vec<PlayerId> = self.players.player_ids().collect();
        for accuser in accusers {
            if accuser == self.assassin || !self.active[accuser] {
                continue;
            }

            // Candidates include the accuser, so self-suspicion is possible.
            let candidates = self.active_players();
            let player = &self.players[accuser];
            let suspects = player.suspect_players(&candidates, &mut self.rng, events)?;
            let accused = player.accuse_player(&suspects, &mut self.rng, events)?;
            round.accusations.push((accuser, accused));

            if accused == self.assassin {
                events.emit(&GameEvent::AssassinCaught { player: accuser, assassin: self.assassin });
                let outcome = GameOutcome::AssassinCaught {
                    assassin: self.assassin,
                    caught_by: accuser,
                    round: self.round,
                };
                self.finish(outcome);
                round.outcome = Some(outcome);
                return Ok(round);
            }

            if self.config.roster_rule == RosterRule::EliminateWrongAccused {
                self.active[accused] = false;
                events.emit(&GameEvent::Eliminated { player: accused });
                round.eliminated.push(accused);
            }
        }

        // Under the static rule the roster never shrinks, so this only
        // fires for two-player games.
        if self.active_player_count() <= ASSASSIN_WIN_ROSTER {
            events.emit(&GameEvent::AssassinWins { assassin: self.assassin });
            let outcome = GameOutcome::AssassinWins {
                assassin: self.assassin,
                round: self.round,
            };
            self.finish(outcome);
            round.outcome = Some(outcome);
        }

        Ok(round)
    }

    /// Start the game and play rounds until it ends or the round limit
    /// runs out.
    pub fn play<S: EventSink + ?Sized>(&mut self, events: &mut S) -> Result<GameOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.start_game(events)?;

        let outcome = loop {
            if let Some(outcome) = self.outcome {
                break outcome;
            }
            if self.config.max_rounds.is_some_and(|max| self.round >= max) {
                events.emit(&GameEvent::Unresolved { rounds: self.round });
                let outcome = GameOutcome::Unresolved { rounds: self.round };
                self.finish(outcome);
                break outcome;
            }
            self.next_round(events)?;
        };

        Ok(outcome)
    }

    fn finish(&mut self, outcome: GameOutcome) {
        debug_assert!(self.outcome.is_none(), "game finished twice");
        log::info!("game over: {}", outcome);
        self.outcome = Some(outcome);
    }
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    vocabulary: Vocabulary,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            config: GameConfig::default(),
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn max_rounds(mut self, max: u32) -> Self {
        self.config.max_rounds = Some(max);
        self
    }

    pub fn roster_rule(mut self, rule: RosterRule) -> Self {
        self.config.roster_rule = rule;
        self
    }

    /// Build the game with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the game with an existing RNG.
    pub fn build_with_rng(self, rng: GameRng) -> Result<Game, GameError> {
        Game::new(self.vocabulary, self.config, rng)
    }
}
