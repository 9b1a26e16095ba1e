//! Field grids: the hidden ground truth and the partially revealed
//! public view.
//!
//! A hidden field is generated once at game creation and never changes.
//! Cells serialize to the wire as plain numbers: `9` for a diamond,
//! `0..=8` for a hint count. Unrevealed public cells serialize as
//! `null`.

use crate::params::GameParams;
use rand::Rng;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Wire value marking a revealed diamond
pub const DIAMOND_SENTINEL: u8 = 9;

/// One cell of the ground-truth grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A hidden target; revealing it scores a point
    Diamond,
    /// Count of diamonds among the up-to-8 neighbors
    Hint(u8),
}

impl Cell {
    /// Numeric wire form: `9` for a diamond, the count otherwise.
    pub fn to_wire(self) -> u8 {
        match self {
            Cell::Diamond => DIAMOND_SENTINEL,
            Cell::Hint(n) => n,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        match value {
            DIAMOND_SENTINEL => Ok(Cell::Diamond),
            0..=8 => Ok(Cell::Hint(value)),
            other => Err(de::Error::custom(format!(
                "cell value out of range: {}",
                other
            ))),
        }
    }
}

/// The ground-truth grid. Owned by the game, never sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenField {
    rows: Vec<Vec<Cell>>,
}

impl HiddenField {
    /// Generate a field for validated parameters.
    ///
    /// Diamonds are placed by rejection sampling: draw a uniform
    /// coordinate, re-draw on collision. The diamond count is strictly
    /// below the cell count, so this terminates. Every other cell then
    /// gets its 8-neighborhood diamond count.
    pub fn generate<R: Rng>(params: &GameParams, rng: &mut R) -> Self {
        let (width, height) = (params.width(), params.height());
        let mut rows = vec![vec![Cell::Hint(0); width]; height];

        let mut placed = 0;
        while placed < params.diamonds() {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            if rows[y][x] != Cell::Diamond {
                rows[y][x] = Cell::Diamond;
                placed += 1;
            }
        }

        for y in 0..height {
            for x in 0..width {
                if rows[y][x] == Cell::Diamond {
                    continue;
                }
                let mut count = 0;
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                        if nx >= 0
                            && nx < width as i64
                            && ny >= 0
                            && ny < height as i64
                            && rows[ny as usize][nx as usize] == Cell::Diamond
                        {
                            count += 1;
                        }
                    }
                }
                rows[y][x] = Cell::Hint(count);
            }
        }

        Self { rows }
    }

    /// Build a field from explicit rows. Rows must be rectangular and
    /// hint counts consistent with diamond placement; intended for
    /// deterministic game construction.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(x, y)`. Callers must have bounds-checked.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Coordinates of every diamond, in row-major order.
    pub fn diamonds(&self) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell == Cell::Diamond {
                    found.push((x, y));
                }
            }
        }
        found
    }
}

/// The client-visible grid: unrevealed cells are `None`.
///
/// A cell transitions from unrevealed to revealed exactly once and its
/// value never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicField {
    rows: Vec<Vec<Option<Cell>>>,
}

impl PublicField {
    /// All-unrevealed view matching the hidden field's dimensions.
    pub fn concealed(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![None; width]; height],
        }
    }

    /// Whether `(x, y)` has already been revealed.
    pub fn is_revealed(&self, x: usize, y: usize) -> bool {
        self.rows[y][x].is_some()
    }

    /// Copy one cell over from the ground truth and return its value.
    pub fn reveal_from(&mut self, hidden: &HiddenField, x: usize, y: usize) -> Cell {
        let cell = hidden.get(x, y);
        self.rows[y][x] = Some(cell);
        cell
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }
}
