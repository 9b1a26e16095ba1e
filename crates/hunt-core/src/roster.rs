//! Player roster state: turn order and scores.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, VecDeque};

/// Opaque player identifier, supplied by the caller.
pub type PlayerId = String;

/// Maximum roster size
pub const MAX_PLAYERS: usize = 2;

/// Ordered queue of players; the head holds the current turn.
///
/// Rotation moves the head to the tail and happens only on a
/// non-diamond reveal. Serializes as a plain list, head first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnQueue {
    order: VecDeque<PlayerId>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.order.iter().any(|p| p == player)
    }

    /// The player entitled to move, if anyone has joined.
    pub fn head(&self) -> Option<&PlayerId> {
        self.order.front()
    }

    /// Append a player at the tail.
    pub fn push(&mut self, player: PlayerId) {
        self.order.push_back(player);
    }

    /// Pass the turn: head moves to the tail.
    pub fn rotate(&mut self) {
        if let Some(head) = self.order.pop_front() {
            self.order.push_back(head);
        }
    }

    /// Players in current turn order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerId> {
        self.order.iter()
    }
}

/// Diamonds found per player, plus a running total.
///
/// The total is a distinct field rather than a sibling entry of the
/// player counts, so a player id can never collide with it; on the
/// wire it is folded back into the count map as a `"total"` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    counts: HashMap<PlayerId, u32>,
    total: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player with a zero count.
    pub fn add_player(&mut self, player: PlayerId) {
        self.counts.insert(player, 0);
    }

    /// Record one found diamond for `player`.
    pub fn record_find(&mut self, player: &str) {
        if let Some(count) = self.counts.get_mut(player) {
            *count += 1;
            self.total += 1;
        }
    }

    pub fn get(&self, player: &str) -> u32 {
        self.counts.get(player).copied().unwrap_or(0)
    }

    /// Diamonds found across all players.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Sum of the per-player counts. Equals [`Self::total`] at all times.
    pub fn sum(&self) -> u32 {
        self.counts.values().sum()
    }
}

impl Serialize for ScoreBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len() + 1))?;
        for (player, count) in &self.counts {
            map.serialize_entry(player, count)?;
        }
        map.serialize_entry("total", &self.total)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreBoard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut counts = HashMap::<PlayerId, u32>::deserialize(deserializer)?;
        let total = counts.remove("total").unwrap_or(0);
        Ok(Self { counts, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_turn_queue_rotation() {
        let mut queue = TurnQueue::new();
        queue.push("alice".into());
        queue.push("bob".into());

        assert_eq!(queue.head().map(String::as_str), Some("alice"));
        queue.rotate();
        assert_eq!(queue.head().map(String::as_str), Some("bob"));
        queue.rotate();
        assert_eq!(queue.head().map(String::as_str), Some("alice"));
    }

    #[test]
    fn test_empty_queue_rotation_is_noop() {
        let mut queue = TurnQueue::new();
        queue.rotate();
        assert!(queue.is_empty());
        assert_eq!(queue.head(), None);
    }

    #[test]
    fn test_turn_queue_serializes_head_first() {
        let mut queue = TurnQueue::new();
        queue.push("alice".into());
        queue.push("bob".into());
        queue.rotate();
        assert_eq!(
            serde_json::to_value(&queue).unwrap(),
            serde_json::json!(["bob", "alice"])
        );
    }

    #[test]
    fn test_scoreboard_conservation() {
        let mut scores = ScoreBoard::new();
        scores.add_player("alice".into());
        scores.add_player("bob".into());

        scores.record_find("alice");
        scores.record_find("alice");
        scores.record_find("bob");

        assert_eq!(scores.get("alice"), 2);
        assert_eq!(scores.get("bob"), 1);
        assert_eq!(scores.total(), 3);
        assert_eq!(scores.sum(), scores.total());
    }

    #[test]
    fn test_scoreboard_ignores_unknown_player() {
        let mut scores = ScoreBoard::new();
        scores.add_player("alice".into());
        scores.record_find("mallory");
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn test_scoreboard_wire_shape() {
        let mut scores = ScoreBoard::new();
        scores.add_player("alice".into());
        scores.add_player("bob".into());
        scores.record_find("bob");

        let json = serde_json::to_value(&scores).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "alice": 0, "bob": 1, "total": 1 })
        );

        let back: ScoreBoard = serde_json::from_value(json).unwrap();
        assert_eq!(back, scores);
    }
}
