//! Core data model for the battery slider.
//! Charge is the only persistent value; bounds are read fresh on every pointer event.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SliderError;

pub const DEFAULT_CHARGE: u8 = 72;
pub const MAX_CHARGE: u8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Charge(u8);

impl Charge {
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_CHARGE))
    }

    /// Rounds a fractional percentage, saturating at both ends.
    pub fn from_percentage(pct: f64) -> Self {
        // `as` saturates, and NaN lands on 0
        Self::new(pct.round().clamp(0.0, MAX_CHARGE as f64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn remaining(self) -> u8 {
        MAX_CHARGE - self.0
    }
}

impl Default for Charge {
    fn default() -> Self {
        Self(DEFAULT_CHARGE)
    }
}

impl From<u8> for Charge {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Charge> for u8 {
    fn from(charge: Charge) -> Self {
        charge.0
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

impl DragPhase {
    pub fn is_dragging(self) -> bool {
        matches!(self, DragPhase::Dragging)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Maps a client x coordinate onto the track.
    ///
    /// Anything left of the track is 0, anything right of it is 100. A zero-width
    /// track divides by 1 instead, which always yields 0. Negative or non-finite
    /// rectangles are rejected rather than guessed at.
    pub fn charge_at(&self, client_x: f64) -> Result<Charge, SliderError> {
        if !client_x.is_finite() {
            return Err(SliderError::NonFiniteCoordinate(client_x));
        }
        if !self.left.is_finite() || !self.width.is_finite() || self.width < 0.0 {
            return Err(SliderError::InvalidBounds {
                left: self.left,
                width: self.width,
            });
        }
        let x = (client_x - self.left).clamp(0.0, self.width);
        Ok(Charge::from_percentage(x / self.width.max(1.0) * 100.0))
    }
}
