//! Game service: binds the engine operations to a store and an id
//! source.

use dashmap::DashMap;
use hunt_core::{Game, GameError, GameId, GameParams, GameStateView, GameStore, IdSource, PlayerId};
use uuid::Uuid;

/// In-memory game registry.
///
/// `DashMap` serializes access per key: an entry guard held by one
/// `update` blocks other callers for the same game while leaving other
/// games free.
#[derive(Default)]
pub struct MemoryStore {
    games: DashMap<GameId, Game>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn insert(&self, game: Game) {
        self.games.insert(game.id().clone(), game);
    }

    fn read<T>(&self, id: &str, f: impl FnOnce(&Game) -> T) -> Option<T> {
        self.games.get(id).map(|game| f(game.value()))
    }

    fn update<T>(&self, id: &str, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        self.games.get_mut(id).map(|mut game| f(game.value_mut()))
    }
}

/// Random UUID v4 identifiers.
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> GameId {
        Uuid::new_v4().to_string()
    }
}

/// The four engine operations over a store.
pub struct GameService<S: GameStore, I: IdSource> {
    store: S,
    ids: I,
}

impl GameService<MemoryStore, UuidIds> {
    /// Service over an in-memory store with UUID identifiers.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), UuidIds)
    }
}

impl<S: GameStore, I: IdSource> GameService<S, I> {
    pub fn new(store: S, ids: I) -> Self {
        Self { store, ids }
    }

    /// Validate parameters, generate a field, store the new game.
    pub fn create(&self, params: GameParams) -> Result<GameId, GameError> {
        let id = self.ids.next_id();
        let game = Game::new(id.clone(), params, &mut rand::thread_rng())?;
        self.store.insert(game);
        Ok(id)
    }

    pub fn get_state(&self, id: &str) -> Result<GameStateView, GameError> {
        self.store
            .read(id, Game::state)
            .ok_or_else(|| GameError::NotFound(id.to_string()))
    }

    pub fn join(&self, id: &str, player: PlayerId) -> Result<GameStateView, GameError> {
        self.store
            .update(id, |game| {
                game.join(player)?;
                Ok(game.state())
            })
            .ok_or_else(|| GameError::NotFound(id.to_string()))?
    }

    pub fn reveal(
        &self,
        id: &str,
        player: &str,
        x: i64,
        y: i64,
    ) -> Result<GameStateView, GameError> {
        self.store
            .update(id, |game| {
                game.reveal(player, x, y)?;
                Ok(game.state())
            })
            .ok_or_else(|| GameError::NotFound(id.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(w: i64, h: i64, d: i64) -> GameParams {
        GameParams {
            field_width: w,
            field_height: h,
            diamonds_quantity: d,
        }
    }

    fn service() -> GameService<MemoryStore, UuidIds> {
        GameService::in_memory()
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let svc = service();
        let a = svc.create(params(2, 2, 1)).unwrap();
        let b = svc.create(params(2, 2, 1)).unwrap();
        assert_ne!(a, b);
        assert!(svc.get_state(&a).is_ok());
        assert!(svc.get_state(&b).is_ok());
    }

    #[test]
    fn test_create_rejects_bad_params() {
        let svc = service();
        assert!(matches!(
            svc.create(params(3, 3, 4)),
            Err(GameError::Validation { .. })
        ));
    }

    #[test]
    fn test_unknown_game_is_not_found() {
        let svc = service();
        assert_eq!(
            svc.get_state("missing").unwrap_err(),
            GameError::NotFound("missing".into())
        );
        assert_eq!(
            svc.join("missing", "alice".into()).unwrap_err(),
            GameError::NotFound("missing".into())
        );
        assert_eq!(
            svc.reveal("missing", "alice", 0, 0).unwrap_err(),
            GameError::NotFound("missing".into())
        );
    }

    #[test]
    fn test_join_and_reveal_round_trip() {
        let svc = service();
        let id = svc.create(params(2, 2, 1)).unwrap();

        let state = svc.join(&id, "alice".into()).unwrap();
        assert_eq!(state.players, vec!["alice".to_string()]);
        let state = svc.join(&id, "bob".into()).unwrap();
        assert_eq!(state.players.len(), 2);
        assert_eq!(
            svc.join(&id, "carol".into()).unwrap_err(),
            GameError::GameFull
        );

        let state = svc.reveal(&id, "alice", 0, 0).unwrap();
        assert_eq!(state.field.revealed_count(), 1);
    }

    #[test]
    fn test_failed_reveal_leaves_store_unchanged() {
        let svc = service();
        let id = svc.create(params(2, 2, 1)).unwrap();
        svc.join(&id, "alice".into()).unwrap();
        svc.join(&id, "bob".into()).unwrap();

        assert!(matches!(
            svc.reveal(&id, "bob", 0, 0),
            Err(GameError::NotYourTurn(_))
        ));
        let state = svc.get_state(&id).unwrap();
        assert_eq!(state.field.revealed_count(), 0);
        assert_eq!(state.players[0], "alice");
    }
}
