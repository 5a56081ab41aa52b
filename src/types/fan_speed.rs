// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type for the roasting chamber blower.

use std::fmt;

use crate::error::ValueError;

/// Fan speed of the roaster blower (1-9).
///
/// Higher values move more air through the chamber.
///
/// # Examples
///
/// ```
/// use sr700_lib::types::FanSpeed;
///
/// let speed = FanSpeed::new(5).unwrap();
/// assert_eq!(speed.value(), 5);
///
/// assert!(FanSpeed::new(0).is_err());
/// assert!(FanSpeed::new(10).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct FanSpeed(u8);

impl FanSpeed {
    /// Minimum speed value.
    pub const MIN: u8 = 1;

    /// Maximum speed value.
    pub const MAX: u8 = 9;

    /// Slowest fan setting, used at power-up.
    pub const LOWEST: Self = Self(Self::MIN);

    /// Fastest fan setting.
    pub const HIGHEST: Self = Self(Self::MAX);

    /// Creates a new fan speed value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::FanSpeedOutOfRange` if value is outside [1, 9].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::FanSpeedOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the speed value, which is also its wire byte.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for FanSpeed {
    fn default() -> Self {
        Self::LOWEST
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FanSpeed> for u8 {
    fn from(speed: FanSpeed) -> Self {
        speed.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_valid() {
        for v in 1..=9 {
            let speed = FanSpeed::new(v).unwrap();
            assert_eq!(speed.value(), v);
        }
    }

    #[test]
    fn fan_speed_invalid() {
        assert!(FanSpeed::new(0).is_err());
        assert!(FanSpeed::new(10).is_err());
        assert!(FanSpeed::new(u8::MAX).is_err());
    }

    #[test]
    fn fan_speed_error_reports_value() {
        let err = FanSpeed::new(10).unwrap_err();
        assert_eq!(
            err,
            ValueError::FanSpeedOutOfRange {
                min: 1,
                max: 9,
                actual: 10
            }
        );
    }

    #[test]
    fn fan_speed_default_is_lowest() {
        assert_eq!(FanSpeed::default().value(), 1);
        assert_eq!(FanSpeed::HIGHEST.value(), 9);
    }

    #[test]
    fn fan_speed_deserialize_validates() {
        let speed: FanSpeed = serde_json::from_str("7").unwrap();
        assert_eq!(speed.value(), 7);
        assert!(serde_json::from_str::<FanSpeed>("0").is_err());
        assert_eq!(serde_json::to_string(&speed).unwrap(), "7");
    }
}
