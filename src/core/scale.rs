use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Axis ceiling used when the observed maximum is zero or negative.
pub const MIN_AXIS_CEILING: f64 = 10.0;

/// Picks a round axis ceiling strictly above `value`.
///
/// The leading decimal digit of `value` is incremented and then forced even,
/// so the ceiling is 2, 4, 6, 8 or 10 times the power of ten at or below
/// `value`. Even leading digits keep the half-way gridline a clean number.
///
/// Digit and exponent come from the shortest decimal form of `value`, so
/// magnitudes far from 1 (including subnormals) pick the same digit a reader
/// sees. Ceilings past the `f64` range saturate at `f64::MAX`.
///
/// ```
/// use simplecharts::round_max;
///
/// assert_eq!(round_max(10.0), 20.0);
/// assert_eq!(round_max(9.0), 10.0);
/// assert_eq!(round_max(0.003), 0.004);
/// assert_eq!(round_max(2e-11), 4e-11);
/// ```
#[must_use]
pub fn round_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return MIN_AXIS_CEILING;
    }
    let Some((digit, exponent)) = leading_digit_and_exponent(value) else {
        return MIN_AXIS_CEILING;
    };

    let head = leading_head(digit);
    let ceiling = format!("{head}e{exponent}")
        .parse::<f64>()
        .unwrap_or(f64::INFINITY);
    if !ceiling.is_finite() {
        f64::MAX
    } else if ceiling > value {
        ceiling
    } else {
        // Only the smallest subnormals round a one-digit ceiling back down.
        f64::from_bits(value.to_bits() + 1)
    }
}

/// First significant digit and decimal exponent of a positive finite `value`.
fn leading_digit_and_exponent(value: f64) -> Option<(u32, i32)> {
    let repr = format!("{value:e}");
    let (mantissa, exponent) = repr.split_once('e')?;
    let digit = mantissa.chars().next()?.to_digit(10)?;
    Some((digit, exponent.parse().ok()?))
}

fn leading_head(digit: u32) -> u32 {
    let head = digit + 1;
    if head % 2 == 1 { head + 1 } else { head }
}

/// Linear value axis from zero to a round ceiling, mapped onto the canvas height.
///
/// Y is measured downward from the canvas top, so value zero sits on the
/// bottom edge and `max_value` on the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    max_value: f64,
    canvas_height: f64,
}

impl ValueScale {
    pub fn new(max_value: f64, canvas_height: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis maximum must be finite and > 0".to_owned(),
            ));
        }
        if !canvas_height.is_finite() || canvas_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "canvas height must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            max_value,
            canvas_height,
        })
    }

    /// Builds the scale from an observed data maximum, rounding it up first.
    pub fn from_observed_max(observed: f64, canvas_height: f64) -> ChartResult<Self> {
        Self::new(round_max(observed), canvas_height)
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn canvas_height(self) -> f64 {
        self.canvas_height
    }

    /// Pixel extent of `value`. Negative values yield negative heights.
    #[must_use]
    pub fn value_to_height(self, value: f64) -> f64 {
        self.canvas_height * (value / self.max_value)
    }

    /// Y coordinate of `value` measured from the canvas top.
    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.canvas_height - self.value_to_height(value)
    }

    /// Value printed on the middle gridline.
    ///
    /// Whole-number ceilings use floor division so labels stay integral;
    /// fractional ceilings are halved exactly.
    #[must_use]
    pub fn middle_value(self) -> f64 {
        if self.max_value.fract() == 0.0 {
            (self.max_value / 2.0).floor()
        } else {
            self.max_value / 2.0
        }
    }

    /// Gridline positions as `(y, value)` pairs: bottom, middle, top.
    #[must_use]
    pub fn gridlines(self) -> [(f64, f64); 3] {
        [
            (self.canvas_height, 0.0),
            (self.canvas_height / 2.0, self.middle_value()),
            (0.0, self.max_value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_exponent_follow_shortest_decimal_form() {
        assert_eq!(leading_digit_and_exponent(1000.0), Some((1, 3)));
        assert_eq!(leading_digit_and_exponent(999.0), Some((9, 2)));
        assert_eq!(leading_digit_and_exponent(0.001), Some((1, -3)));
        assert_eq!(leading_digit_and_exponent(2e-11), Some((2, -11)));
        assert_eq!(leading_digit_and_exponent(1e-309), Some((1, -309)));
    }

    #[test]
    fn head_is_forced_even() {
        assert_eq!(leading_head(1), 2);
        assert_eq!(leading_head(2), 4);
        assert_eq!(leading_head(9), 10);
    }
}
