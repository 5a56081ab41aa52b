// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heater setting and chamber temperature types.

use std::fmt;

/// Heater power level.
///
/// The roaster takes any byte here; no range is enforced.
///
/// # Examples
///
/// ```
/// use sr700_lib::types::HeatSetting;
///
/// let heat = HeatSetting::new(3);
/// assert_eq!(heat.value(), 3);
/// assert_eq!(HeatSetting::default().value(), 0);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct HeatSetting(u8);

impl HeatSetting {
    /// Heater off.
    pub const OFF: Self = Self(0);

    /// Creates a heat setting.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw setting, which is also its wire byte.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for HeatSetting {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for HeatSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chamber temperature reported by the roaster, in degrees Fahrenheit.
///
/// Below its measurable range the roaster reports the sentinel `0xFF00`
/// instead of a reading; that value maps to [`Temperature::FLOOR`].
///
/// # Examples
///
/// ```
/// use sr700_lib::types::Temperature;
///
/// assert_eq!(Temperature::from_wire(0x0160).degrees(), 352);
/// assert_eq!(Temperature::from_wire(0xFF00), Temperature::FLOOR);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Temperature(u16);

impl Temperature {
    /// Lowest temperature the roaster can measure.
    pub const FLOOR: Self = Self(150);

    /// Wire value meaning "below the measurable range".
    pub const SENTINEL: u16 = 0xFF00;

    /// Creates a temperature from a reading in degrees.
    #[must_use]
    pub const fn new(degrees: u16) -> Self {
        Self(degrees)
    }

    /// Interprets the raw temperature field of a status packet.
    #[must_use]
    pub const fn from_wire(raw: u16) -> Self {
        if raw == Self::SENTINEL {
            Self::FLOOR
        } else {
            Self(raw)
        }
    }

    /// Returns the temperature in degrees.
    #[must_use]
    pub const fn degrees(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the reading is at the floor of the measurable range.
    #[must_use]
    pub const fn is_floor(&self) -> bool {
        self.0 == Self::FLOOR.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::FLOOR
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_setting_accepts_any_byte() {
        assert_eq!(HeatSetting::new(0), HeatSetting::OFF);
        assert_eq!(HeatSetting::new(255).value(), 255);
        assert_eq!(HeatSetting::from(2).value(), 2);
    }

    #[test]
    fn sentinel_maps_to_floor() {
        let temp = Temperature::from_wire(0xFF00);
        assert_eq!(temp.degrees(), 150);
        assert!(temp.is_floor());
    }

    #[test]
    fn regular_reading_is_literal() {
        assert_eq!(Temperature::from_wire(352).degrees(), 352);
        assert_eq!(Temperature::from_wire(0xFF01).degrees(), 0xFF01);
        assert_eq!(Temperature::from_wire(0).degrees(), 0);
    }

    #[test]
    fn default_is_floor() {
        assert_eq!(Temperature::default(), Temperature::FLOOR);
    }

    #[test]
    fn display() {
        assert_eq!(Temperature::new(420).to_string(), "420°F");
        assert_eq!(HeatSetting::new(3).to_string(), "3");
    }
}
