use crate::prelude::DataPoint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Full beam state at one element border. Only the position is read; the
/// solver's moment, tension, basis and force fields are ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FullState {
    #[serde(deserialize_with = "finite_coordinate")]
    pub x: f64,
    #[serde(deserialize_with = "finite_coordinate")]
    pub y: f64,
}

fn finite_coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(D::Error::custom(format!("coordinate {value} is not finite")))
    }
}

/// Single point record of a solution, as emitted by the solver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    pub full: FullState,
}

impl Element {
    #[cfg(test)]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            full: FullState { x, y },
        }
    }

    pub fn point(&self) -> DataPoint {
        DataPoint::new(self.full.x, self.full.y)
    }
}

/// Ordered elements drawn as one polyline.
pub type SegmentGroup = Vec<Element>;
