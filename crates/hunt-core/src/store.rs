//! External collaborator interfaces: game storage and identifier
//! generation.
//!
//! The engine is specified against these traits; concrete
//! implementations (an in-memory map, a database, a UUID source) live
//! with the host process.

use crate::game::{Game, GameId};

/// Keyed storage of games.
///
/// Implementations must serialize access per identifier: two
/// concurrent `update` calls against the same game must not interleave,
/// while calls against different identifiers proceed independently.
pub trait GameStore: Send + Sync {
    /// Insert a freshly created game under its own identifier.
    fn insert(&self, game: Game);

    /// Run `f` against the game, if present, under the per-key lock.
    fn read<T>(&self, id: &str, f: impl FnOnce(&Game) -> T) -> Option<T>;

    /// Run `f` against the game mutably, if present, under the per-key
    /// lock.
    fn update<T>(&self, id: &str, f: impl FnOnce(&mut Game) -> T) -> Option<T>;
}

/// Source of fresh, globally unique game identifiers.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> GameId;
}
