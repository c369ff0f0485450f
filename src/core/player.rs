//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 2-255 players. Its display form
//! is the player's name: `PlayerId(0)` is "Player 1".
//!
//! ## PlayerMap
//!
//! Roster storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A party guest: where they went this round, which weapons they like,
//! and whether they are secretly the assassin.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::error::{GameError, VocabularyKind};
use super::rng::GameRng;
use crate::events::{EventSink, GameEvent};

/// Most places a player visits in one round.
pub const MAX_VISITED_PLACES: usize = 3;

/// Player identifier supporting up to 255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use party_assassin::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A guest at the party.
///
/// Visited places and favorite weapons are re-randomized by
/// [`Player::visit_places`] and [`Player::choose_favorite_weapons`]. The
/// assassin flag is set once during game setup and never cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    last_visited_places: SmallVec<[String; MAX_VISITED_PLACES]>,
    favorite_weapons: Vec<String>,
    is_assassin: bool,
}

impl Player {
    /// Create an innocent player with no visits and no favorite weapons.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: id.to_string(),
            last_visited_places: SmallVec::new(),
            favorite_weapons: Vec::new(),
            is_assassin: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Places visited this round, in visiting order.
    #[must_use]
    pub fn last_visited_places(&self) -> &[String] {
        &self.last_visited_places
    }

    #[must_use]
    pub fn favorite_weapons(&self) -> &[String] {
        &self.favorite_weapons
    }

    #[must_use]
    pub fn is_assassin(&self) -> bool {
        self.is_assassin
    }

    pub(crate) fn make_assassin(&mut self) {
        self.is_assassin = true;
    }

    /// Visit between 1 and `min(3, places.len())` distinct places.
    ///
    /// The count is drawn from `1..=3` and clamped to the number of places,
    /// so small vocabularies favor visiting every place.
    pub fn visit_places(&mut self, places: &[String], rng: &mut GameRng) -> Result<(), GameError> {
        if places.is_empty() {
            return Err(GameError::EmptyVocabulary { kind: VocabularyKind::Places });
        }
        let count = rng.gen_range_inclusive(1..=MAX_VISITED_PLACES).min(places.len());
        let visited = rng
            .sample(places, count)
            .ok_or(GameError::NotEnoughCandidates { requested: count, available: places.len() })?;

        self.last_visited_places = visited.into_iter().cloned().collect();
        log::trace!("{} visited {:?}", self.name, self.last_visited_places);
        Ok(())
    }

    /// Pick between 1 and `weapons.len()` distinct favorite weapons.
    pub fn choose_favorite_weapons(
        &mut self,
        weapons: &[String],
        rng: &mut GameRng,
    ) -> Result<(), GameError> {
        if weapons.is_empty() {
            return Err(GameError::EmptyVocabulary { kind: VocabularyKind::Weapons });
        }
        let count = rng.gen_range_inclusive(1..=weapons.len());
        let chosen = rng
            .sample(weapons, count)
            .ok_or(GameError::NotEnoughCandidates { requested: count, available: weapons.len() })?;

        self.favorite_weapons = chosen.into_iter().cloned().collect();
        log::trace!("{} favors {:?}", self.name, self.favorite_weapons);
        Ok(())
    }

    /// Suspect two distinct players out of `candidates`.
    ///
    /// Nothing stops `candidates` from containing this player, so a player
    /// may end up suspecting themselves.
    pub fn suspect_players<S: EventSink + ?Sized>(
        &self,
        candidates: &[PlayerId],
        rng: &mut GameRng,
        events: &mut S,
    ) -> Result<[PlayerId; 2], GameError> {
        let picked = rng
            .sample(candidates, 2)
            .ok_or(GameError::NotEnoughCandidates { requested: 2, available: candidates.len() })?;
        let suspects = [*picked[0], *picked[1]];

        events.emit(&GameEvent::Suspicion { player: self.id, suspects });
        Ok(suspects)
    }

    /// Accuse one of `suspects`, chosen uniformly.
    pub fn accuse_player<S: EventSink + ?Sized>(
        &self,
        suspects: &[PlayerId],
        rng: &mut GameRng,
        events: &mut S,
    ) -> Result<PlayerId, GameError> {
        let accused = *rng
            .choose(suspects)
            .ok_or(GameError::NotEnoughCandidates { requested: 1, available: 0 })?;

        events.emit(&GameEvent::Accusation { player: self.id, accused });
        Ok(accused)
    }

    /// Record the murder scene as the only place visited this round.
    pub(crate) fn place_at(&mut self, place: &str) {
        self.last_visited_places.clear();
        self.last_visited_places.push(place.to_string());
    }

    /// Add `weapon` to the favorites unless already there.
    ///
    /// Returns `true` if the weapon was appended.
    pub(crate) fn favor_weapon(&mut self, weapon: &str) -> bool {
        if self.favorite_weapons.iter().any(|w| w == weapon) {
            return false;
        }
        self.favorite_weapons.push(weapon.to_string());
        true
    }
}
