//! In-memory game registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tictactoe_engine::Game;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Opaque identifier of a stored game (random 128-bit UUID).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Mints a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Registry of games keyed by [`GameId`].
///
/// Cloning is cheap; clones share the same games. All access goes through
/// one mutex, so [`GameStore::with_game`] gives each caller exclusive use of
/// a game for the duration of its closure. Games are kept for the lifetime
/// of the store.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Arc<Mutex<HashMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game store");
        Self::default()
    }

    /// Stores a new game under a fresh identifier and returns both.
    #[instrument(skip(self))]
    pub fn create(&self) -> (GameId, Game) {
        let mut games = self.lock();
        loop {
            let id = GameId::new();
            if let Entry::Vacant(slot) = games.entry(id) {
                let game = Game::new();
                slot.insert(game.clone());
                info!(game_id = %id, total = games.len(), "Created game");
                return (id, game);
            }
            warn!(game_id = %id, "Identifier collision, minting another");
        }
    }

    /// Returns a copy of the stored game, or `None` for an unknown id.
    #[instrument(skip(self))]
    pub fn get(&self, id: &GameId) -> Option<Game> {
        let game = self.lock().get(id).cloned();
        if game.is_none() {
            debug!(game_id = %id, "Game not found");
        }
        game
    }

    /// Overwrites the stored game for `id`.
    #[instrument(skip(self, game))]
    pub fn replace(&self, id: GameId, game: Game) {
        self.lock().insert(id, game);
        debug!(game_id = %id, "Game replaced");
    }

    /// Runs `f` on the stored game while holding the store lock.
    ///
    /// Returns `None` without calling `f` when `id` is unknown.
    #[instrument(skip(self, f))]
    pub fn with_game<T>(&self, id: &GameId, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        let mut games = self.lock();
        match games.get_mut(id) {
            Some(game) => Some(f(game)),
            None => {
                debug!(game_id = %id, "Game not found");
                None
            }
        }
    }

    /// Number of stored games.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no games have been created.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every mutation is a single insert or an in-place game update, so a
    // panic elsewhere cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, Game>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Player, Position};

    #[test]
    fn test_create_then_get() {
        let store = GameStore::new();
        let (id, game) = store.create();
        assert_eq!(store.get(&id), Some(game));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown() {
        let store = GameStore::new();
        store.create();
        assert_eq!(store.get(&GameId::new()), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = GameStore::new();
        let ids: std::collections::HashSet<GameId> = (0..100).map(|_| store.create().0).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_get_returns_a_copy() {
        let store = GameStore::new();
        let (id, _) = store.create();
        let mut copy = store.get(&id).expect("stored");
        copy.play(0, 0).expect("valid move");
        assert!(store.get(&id).expect("stored").moves().is_empty());
    }

    #[test]
    fn test_replace_persists() {
        let store = GameStore::new();
        let (id, mut game) = store.create();
        game.play(1, 1).expect("valid move");
        store.replace(id, game.clone());
        store.replace(id, game.clone());
        assert_eq!(store.get(&id), Some(game));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_game_mutates_in_place() {
        let store = GameStore::new();
        let (id, _) = store.create();
        let player = store.with_game(&id, |game| {
            game.play(0, 0).expect("valid move");
            game.current_player()
        });
        assert_eq!(player, Some(Player::O));
        assert_eq!(store.get(&id).expect("stored").moves().len(), 1);
    }

    #[test]
    fn test_with_game_unknown_id() {
        let store = GameStore::new();
        let mut called = false;
        let result = store.with_game(&GameId::new(), |_| called = true);
        assert_eq!(result, None);
        assert!(!called);
    }

    #[test]
    fn test_concurrent_moves_on_same_game_are_serialized() {
        let store = GameStore::new();
        let (id, _) = store.create();

        let handles: Vec<_> = (0..9)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store.with_game(&id, |game| {
                        // Always the first free cell: X ends up with 2,4,6
                        let board = game.board();
                        Position::ALL
                            .into_iter()
                            .find(|pos| board.is_empty(*pos))
                            .is_some_and(|pos| game.play_at(pos).is_ok())
                    })
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .filter(|r| *r == Some(true))
            .count();

        let game = store.get(&id).expect("stored");
        assert_eq!(accepted, 7);
        assert_eq!(game.moves().len(), game.board().occupied());
        assert_eq!(game.status(), GameStatus::XWon);
    }

    #[test]
    fn test_game_id_parse() {
        let id = GameId::new();
        assert_eq!(id.to_string().parse::<GameId>().ok(), Some(id));
        assert!("not-a-uuid".parse::<GameId>().is_err());
    }
}
