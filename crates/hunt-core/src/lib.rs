//! Diamond Hunt - a two-player grid-discovery game engine
//!
//! This crate provides the core game logic for Diamond Hunt:
//! - Field generation (hidden diamonds plus neighbor hint counts)
//! - Parameter and move validation
//! - The game state machine: roster, turn order, scoring, win detection
//! - The store and id-source interfaces the engine is hosted against
//!
//! # Rules
//!
//! A rectangular field of at most 6x6 cells hides an odd number of
//! diamonds. Two players alternately reveal cells: a diamond scores a
//! point and keeps the turn, a hint cell shows its diamond-neighbor
//! count and passes the turn. When the last diamond is found, the
//! player with strictly more diamonds wins; an even split has no
//! winner (structurally impossible for two players, since the diamond
//! count is odd).
//!
//! # Modules
//!
//! - [`params`]: Creation parameters and validation
//! - [`field`]: Hidden and public grids, field generation
//! - [`roster`]: Turn queue and score board
//! - [`game`]: The game aggregate and its operations
//! - [`store`]: Storage and id-generation interfaces

pub mod field;
pub mod game;
pub mod params;
pub mod roster;
pub mod store;

// Re-export commonly used types
pub use field::{Cell, HiddenField, PublicField, DIAMOND_SENTINEL};
pub use game::{Game, GameError, GameId, GameStateView};
pub use params::{GameParams, MAX_FIELD_SIZE, MIN_FIELD_SIZE};
pub use roster::{PlayerId, ScoreBoard, TurnQueue, MAX_PLAYERS};
pub use store::{GameStore, IdSource};
