//! Game creation parameters and their validation.

use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Smallest allowed field side length
pub const MIN_FIELD_SIZE: i64 = 2;

/// Largest allowed field side length
pub const MAX_FIELD_SIZE: i64 = 6;

/// Parameters a game is created with. Immutable once the game exists.
///
/// Fields are kept as signed integers so that out-of-range input is
/// representable and rejected by [`GameParams::validate`] rather than
/// lost at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameParams {
    pub field_width: i64,
    pub field_height: i64,
    pub diamonds_quantity: i64,
}

impl GameParams {
    /// Check the structural constraints on creation parameters.
    ///
    /// Width and height must be in `[MIN_FIELD_SIZE, MAX_FIELD_SIZE]`;
    /// the diamond count must be odd and strictly less than the cell
    /// count. The odd-count rule guarantees two players can never split
    /// the diamonds evenly.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.field_width < MIN_FIELD_SIZE || self.field_width > MAX_FIELD_SIZE {
            return Err(GameError::Validation {
                field: "fieldWidth",
                message: format!(
                    "must be an integer between {} and {}",
                    MIN_FIELD_SIZE, MAX_FIELD_SIZE
                ),
            });
        }
        if self.field_height < MIN_FIELD_SIZE || self.field_height > MAX_FIELD_SIZE {
            return Err(GameError::Validation {
                field: "fieldHeight",
                message: format!(
                    "must be an integer between {} and {}",
                    MIN_FIELD_SIZE, MAX_FIELD_SIZE
                ),
            });
        }
        let cells = self.field_width * self.field_height;
        if self.diamonds_quantity % 2 == 0
            || self.diamonds_quantity < 0
            || self.diamonds_quantity >= cells
        {
            return Err(GameError::Validation {
                field: "diamondsQuantity",
                message: format!("must be an odd number and less than {}", cells),
            });
        }
        Ok(())
    }

    /// Field width as a grid index bound. Only meaningful after validation.
    pub fn width(&self) -> usize {
        self.field_width as usize
    }

    /// Field height as a grid index bound. Only meaningful after validation.
    pub fn height(&self) -> usize {
        self.field_height as usize
    }

    /// Diamond count. Only meaningful after validation.
    pub fn diamonds(&self) -> u32 {
        self.diamonds_quantity as u32
    }

    /// Whether `(x, y)` addresses a cell of this field.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.field_width && y >= 0 && y < self.field_height
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

    #[test]
    fn test_valid_params() {
        assert!(params(2, 2, 1).validate().is_ok());
        assert!(params(6, 6, 35).validate().is_ok());
        assert!(params(3, 4, 7).validate().is_ok());
    }

    #[test]
    fn test_width_bounds() {
        assert!(matches!(
            params(1, 3, 1).validate(),
            Err(GameError::Validation {
                field: "fieldWidth",
                ..
            })
        ));
        assert!(matches!(
            params(7, 3, 1).validate(),
            Err(GameError::Validation {
                field: "fieldWidth",
                ..
            })
        ));
    }

    #[test]
    fn test_height_bounds() {
        assert!(matches!(
            params(3, 0, 1).validate(),
            Err(GameError::Validation {
                field: "fieldHeight",
                ..
            })
        ));
        assert!(matches!(
            params(3, -2, 1).validate(),
            Err(GameError::Validation {
                field: "fieldHeight",
                ..
            })
        ));
    }

    #[test]
    fn test_even_diamond_count_rejected() {
        // Scenario C: 4 diamonds on a 3x3 field
        assert!(matches!(
            params(3, 3, 4).validate(),
            Err(GameError::Validation {
                field: "diamondsQuantity",
                ..
            })
        ));
    }

    #[test]
    fn test_diamond_count_must_fit_field() {
        // Odd but not below the cell count
        assert!(params(2, 2, 5).validate().is_err());
        assert!(params(3, 3, 9).validate().is_err());
        assert!(params(2, 2, -1).validate().is_err());
    }

    #[test]
    fn test_in_bounds() {
        let p = params(3, 2, 1);
        assert!(p.in_bounds(0, 0));
        assert!(p.in_bounds(2, 1));
        assert!(!p.in_bounds(-1, 0));
        assert!(!p.in_bounds(3, 0));
        assert!(!p.in_bounds(0, 2));
    }

    #[test]
    fn test_wire_field_names() {
        let p = params(4, 5, 3);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["fieldWidth"], 4);
        assert_eq!(json["fieldHeight"], 5);
        assert_eq!(json["diamondsQuantity"], 3);
    }
}
