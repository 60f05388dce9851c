use crate::bounded::{BoundedValue, check_bounds};
use crate::error::BoundsError;

/// Construction parameters for a spinner.
///
/// With the `serde` feature enabled this can be read from any serde format;
/// missing fields fall back to `Default`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpinnerConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub decimal_places: u32,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            decimal_places: 0,
        }
    }
}

impl SpinnerConfig {
    pub fn new(min: f64, max: f64, step: f64, decimal_places: u32) -> Self {
        Self {
            min,
            max,
            step,
            decimal_places,
        }
    }

    pub fn validate(&self) -> Result<(), BoundsError> {
        check_bounds(self.min, self.max, self.step)
    }

    pub fn build(&self) -> BoundedValue {
        BoundedValue::new(self.min, self.max, self.step, self.decimal_places)
    }
}
