//! Core game state machine.
//!
//! A [`Game`] owns the hidden ground truth, the public view, the turn
//! queue and the scores. Its only mutating operations are `join` and
//! `reveal`; every check runs before any state is written, so a failed
//! operation leaves the game untouched.

use crate::field::{Cell, HiddenField, PublicField};
use crate::params::GameParams;
use crate::roster::{PlayerId, ScoreBoard, TurnQueue, MAX_PLAYERS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque game identifier, assigned at creation.
pub type GameId = String;

/// Recoverable failures of the engine operations.
///
/// Each message names the offending value; the transport layer maps
/// these to protocol-level responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{field} {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("game {0} not found")]
    NotFound(GameId),

    #[error("game is full, max players: {MAX_PLAYERS}")]
    GameFull,

    #[error("player {0} already in game")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} not found in game")]
    PlayerNotInGame(PlayerId),

    #[error("it's not player {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("game is already won")]
    GameOver,

    #[error("cell ({x}, {y}) is already opened")]
    CellAlreadyRevealed { x: i64, y: i64 },

    #[error("invalid cell coordinates: ({x}, {y})")]
    InvalidCoordinate { x: i64, y: i64 },
}

/// Read-only snapshot of everything a client may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    /// Grid of `null` (unrevealed) or `0..=9` (9 = diamond)
    pub field: PublicField,
    /// Players in turn order, head first
    pub players: Vec<PlayerId>,
    /// Per-player diamond counts plus a `"total"` entry
    pub count: ScoreBoard,
    /// Set exactly once, when every diamond has been found
    pub winner: Option<PlayerId>,
}

/// The aggregate root: one running game.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    params: GameParams,
    hidden: HiddenField,
    public: PublicField,
    turns: TurnQueue,
    scores: ScoreBoard,
    winner: Option<PlayerId>,
}

impl Game {
    /// Create a game: validate parameters, generate the hidden field
    /// from the given randomness source, start with an empty roster.
    pub fn new<R: Rng>(id: GameId, params: GameParams, rng: &mut R) -> Result<Self, GameError> {
        params.validate()?;
        let hidden = HiddenField::generate(&params, rng);
        Ok(Self::with_field(id, params, hidden))
    }

    /// Create a game over a prepared hidden field. The field must match
    /// the parameters; used for deterministic construction.
    pub fn with_field(id: GameId, params: GameParams, hidden: HiddenField) -> Self {
        let public = PublicField::concealed(params.width(), params.height());
        Self {
            id,
            params,
            hidden,
            public,
            turns: TurnQueue::new(),
            scores: ScoreBoard::new(),
            winner: None,
        }
    }

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// The hidden ground truth. Not part of any client-facing state.
    pub fn hidden_field(&self) -> &HiddenField {
        &self.hidden
    }

    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some() || self.scores.total() == self.params.diamonds()
    }

    /// Add a player to the roster with a zero score.
    pub fn join(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.turns.len() == MAX_PLAYERS {
            return Err(GameError::GameFull);
        }
        if self.turns.contains(&player) {
            return Err(GameError::DuplicatePlayer(player));
        }
        self.scores.add_player(player.clone());
        self.turns.push(player);
        Ok(())
    }

    /// Open one cell for `player`.
    ///
    /// A diamond scores a point and keeps the turn; a hint cell passes
    /// the turn. Once the last diamond is found the winner is fixed
    /// permanently: the unique strictly-highest scorer in turn order,
    /// or no one on an even split.
    pub fn reveal(&mut self, player: &str, x: i64, y: i64) -> Result<(), GameError> {
        if self.winner.is_some() || self.scores.total() == self.params.diamonds() {
            return Err(GameError::GameOver);
        }
        if !self.params.in_bounds(x, y) {
            return Err(GameError::InvalidCoordinate { x, y });
        }
        if !self.turns.contains(player) {
            return Err(GameError::PlayerNotInGame(player.to_string()));
        }
        if self.turns.head().map(String::as_str) != Some(player) {
            return Err(GameError::NotYourTurn(player.to_string()));
        }
        let (cx, cy) = (x as usize, y as usize);
        if self.public.is_revealed(cx, cy) {
            return Err(GameError::CellAlreadyRevealed { x, y });
        }

        match self.public.reveal_from(&self.hidden, cx, cy) {
            Cell::Diamond => {
                self.scores.record_find(player);
                if self.scores.total() == self.params.diamonds() {
                    self.winner = self.determine_winner();
                }
                // The turn stays with the finder, win or not
            }
            Cell::Hint(_) => {
                self.turns.rotate();
            }
        }

        Ok(())
    }

    /// The unique strictly-highest scorer, scanning in turn order.
    /// Equal top scores yield no winner.
    fn determine_winner(&self) -> Option<PlayerId> {
        let mut best: Option<&PlayerId> = None;
        let mut best_count = 0;
        let mut tied = false;
        for player in self.turns.iter() {
            let count = self.scores.get(player);
            if count > best_count {
                best_count = count;
                best = Some(player);
                tied = false;
            } else if count == best_count && best.is_some() {
                tied = true;
            }
        }
        if tied {
            None
        } else {
            best.cloned()
        }
    }

    /// Snapshot of the public state.
    pub fn state(&self) -> GameStateView {
        GameStateView {
            field: self.public.clone(),
            players: self.turns.iter().cloned().collect(),
            count: self.scores.clone(),
            winner: self.winner.clone(),
        }
    }
}
