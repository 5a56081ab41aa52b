// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are discrete updates that can be applied to a
//! [`DeviceState`](super::DeviceState), either from the controlling
//! application or from status packets received from the roaster.
//!
//! # Examples
//!
//! ```
//! use sr700_lib::state::{DeviceState, StateChange};
//! use sr700_lib::types::{FanSpeed, OperatingMode};
//!
//! let mut state = DeviceState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::operating_mode(OperatingMode::Roasting)));
//! assert!(!state.apply(&StateChange::operating_mode(OperatingMode::Roasting)));
//!
//! let change = StateChange::batch(vec![
//!     StateChange::fan_speed(FanSpeed::new(4).unwrap()),
//!     StateChange::operating_mode(OperatingMode::Cooling),
//! ]);
//! assert!(state.apply(&change));
//! assert_eq!(state.fan_speed().value(), 4);
//! ```

use crate::types::{FanSpeed, HeatSetting, OperatingMode, Temperature, TimeRemaining};

/// Represents a change in device state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Operating mode changed.
    OperatingMode(OperatingMode),

    /// Fan speed changed.
    FanSpeed(FanSpeed),

    /// Timer changed.
    TimeRemaining(TimeRemaining),

    /// Heater level changed.
    HeatSetting(HeatSetting),

    /// Roaster reported a new chamber temperature.
    Temperature(Temperature),

    /// Multiple changes at once.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates an operating mode change.
    #[must_use]
    pub fn operating_mode(mode: OperatingMode) -> Self {
        Self::OperatingMode(mode)
    }

    /// Creates a fan speed change.
    #[must_use]
    pub fn fan_speed(speed: FanSpeed) -> Self {
        Self::FanSpeed(speed)
    }

    /// Creates a timer change.
    #[must_use]
    pub fn time_remaining(time: TimeRemaining) -> Self {
        Self::TimeRemaining(time)
    }

    /// Creates a heater level change.
    #[must_use]
    pub fn heat_setting(heat: HeatSetting) -> Self {
        Self::HeatSetting(heat)
    }

    /// Creates a temperature reading change.
    #[must_use]
    pub fn temperature(temp: Temperature) -> Self {
        Self::Temperature(temp)
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this change comes from the roaster rather than
    /// from the controlling application.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        match self {
            Self::Temperature(_) => true,
            Self::Batch(changes) => !changes.is_empty() && changes.iter().all(Self::is_reported),
            _ => false,
        }
    }

    /// Returns the number of individual changes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::len).sum(),
            _ => 1,
        }
    }

    /// Returns `true` if this is an empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
