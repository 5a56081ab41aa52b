// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roast timer type.
//!
//! The roaster counts down in tenths of a minute and carries the timer on the
//! wire as a single byte holding those tenths.

use std::fmt;

use crate::error::ValueError;

/// Time left on the roaster timer, in minutes.
///
/// A settable value lies strictly between 0.0 and 10.0. The zero value exists
/// only as the power-up state and cannot be set explicitly.
///
/// # Examples
///
/// ```
/// use sr700_lib::types::TimeRemaining;
///
/// let time = TimeRemaining::new(4.5).unwrap();
/// assert_eq!(time.tenths(), 45);
///
/// assert!(TimeRemaining::new(0.0).is_err());
/// assert!(TimeRemaining::new(10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TimeRemaining(f64);

impl TimeRemaining {
    /// Exclusive lower bound in minutes.
    pub const MIN: f64 = 0.0;

    /// Exclusive upper bound in minutes.
    pub const MAX: f64 = 10.0;

    /// Timer value at power-up.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new timer value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TimeRemainingOutOfRange` unless `0.0 < minutes < 10.0`.
    /// NaN is rejected.
    pub fn new(minutes: f64) -> Result<Self, ValueError> {
        if !(minutes > Self::MIN && minutes < Self::MAX) {
            return Err(ValueError::TimeRemainingOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: minutes,
            });
        }
        Ok(Self(minutes))
    }

    /// Returns the timer value in minutes.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0
    }

    /// Returns the timer in tenths of a minute, truncated toward zero.
    ///
    /// This is the byte carried in the command packet.
    #[must_use]
    pub fn tenths(&self) -> u8 {
        // Range is [0.0, 10.0), so the product fits in 0..100
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenths = (self.0 * 10.0).trunc() as u8;
        tenths
    }
}

impl Default for TimeRemaining {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Accepts the power-up zero as well as any settable value, so a snapshot of
/// a freshly created state converts back.
impl TryFrom<f64> for TimeRemaining {
    type Error = ValueError;

    #[allow(clippy::float_cmp)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == Self::ZERO.0 {
            return Ok(Self::ZERO);
        }
        Self::new(value)
    }
}

impl From<TimeRemaining> for f64 {
    fn from(time: TimeRemaining) -> Self {
        time.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_remaining_valid() {
        for v in [0.1, 1.0, 5.5, 9.9, 9.99] {
            let time = TimeRemaining::new(v).unwrap();
            assert!((time.minutes() - v).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn time_remaining_invalid() {
        assert!(TimeRemaining::new(0.0).is_err());
        assert!(TimeRemaining::new(-1.0).is_err());
        assert!(TimeRemaining::new(10.0).is_err());
        assert!(TimeRemaining::new(11.0).is_err());
        assert!(TimeRemaining::new(f64::NAN).is_err());
    }

    #[test]
    fn tenths_truncates() {
        assert_eq!(TimeRemaining::ZERO.tenths(), 0);
        assert_eq!(TimeRemaining::new(0.1).unwrap().tenths(), 1);
        assert_eq!(TimeRemaining::new(4.5).unwrap().tenths(), 45);
        assert_eq!(TimeRemaining::new(9.99).unwrap().tenths(), 99);
    }

    #[test]
    fn display_one_decimal() {
        assert_eq!(TimeRemaining::new(3.0).unwrap().to_string(), "3.0");
        assert_eq!(TimeRemaining::ZERO.to_string(), "0.0");
    }

    #[test]
    fn deserialize_validates() {
        let time: TimeRemaining = serde_json::from_str("2.5").unwrap();
        assert_eq!(time.tenths(), 25);
        assert!(serde_json::from_str::<TimeRemaining>("12.0").is_err());
        assert!(serde_json::from_str::<TimeRemaining>("-0.5").is_err());
    }

    #[test]
    fn zero_converts_but_cannot_be_set() {
        assert_eq!(TimeRemaining::try_from(0.0).unwrap(), TimeRemaining::ZERO);
        assert!(TimeRemaining::new(0.0).is_err());
    }
}
