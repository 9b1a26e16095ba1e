//! WebSocket protocol messages for the Diamond Hunt server.
//!
//! Success payloads carry a `result` field and failures an `error`
//! field, so each payload stands alone as a `{result}` / `{error}`
//! envelope.

use hunt_core::{GameId, GameParams, GameStateView, PlayerId};
use serde::{Deserialize, Serialize};

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Create a new game
    CreateGame {
        #[serde(flatten)]
        params: GameParams,
    },

    /// Fetch the current public state of a game
    GetState { id: GameId },

    /// Join a game's roster
    #[serde(rename_all = "camelCase")]
    Join { id: GameId, player_id: PlayerId },

    /// Reveal one cell
    #[serde(rename_all = "camelCase")]
    Reveal {
        id: GameId,
        player_id: PlayerId,
        x: i64,
        y: i64,
    },

    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Game created; the result is its identifier
    Created { result: GameId },

    /// Current public state of a game
    State { result: GameStateView },

    /// Operation failed
    Error { error: String },

    /// Pong response
    Pong,
}
