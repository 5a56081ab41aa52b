// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::error::{PacketError, ValueError};
use crate::protocol::{self, CodecConfig, Packet};
use crate::types::{FanSpeed, HeatSetting, OperatingMode, Temperature, TimeRemaining};

use super::StateChange;

/// Tracked state of a roaster.
///
/// This struct holds the settings that are serialized into every command
/// packet, plus the last chamber temperature decoded from a status packet.
/// Setters validate their input and leave the state untouched on error.
///
/// # Mode transitions
///
/// Any mode may follow any other. The roaster itself expects
/// [`start_cool`](Self::start_cool) to follow [`start_roast`](Self::start_roast)
/// and misbehaves otherwise; that ordering is left to the caller.
///
/// # Examples
///
/// ```
/// use sr700_lib::state::DeviceState;
///
/// let mut state = DeviceState::new();
/// assert_eq!(state.fan_speed().value(), 1);
/// assert_eq!(state.current_temperature().degrees(), 150);
///
/// state.set_fan_speed(9).unwrap();
/// assert!(state.set_fan_speed(10).is_err());
/// assert_eq!(state.fan_speed().value(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    /// What the roaster is doing.
    operating_mode: OperatingMode,
    /// Blower speed (1-9).
    fan_speed: FanSpeed,
    /// Timer in minutes.
    time_remaining: TimeRemaining,
    /// Heater level.
    heat_setting: HeatSetting,
    /// Last temperature reported by the roaster.
    current_temperature: Temperature,
}

impl DeviceState {
    /// Creates a state with power-up defaults: idle, fan speed 1, timer 0.0,
    /// heater 0 and temperature at the measurable floor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Operating Mode ==========

    /// Gets the operating mode.
    #[must_use]
    pub fn operating_mode(&self) -> OperatingMode {
        self.operating_mode
    }

    /// Sets the operating mode.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) {
        if self.operating_mode != mode {
            tracing::debug!(from = %self.operating_mode, to = %mode, "Operating mode changed");
        }
        self.operating_mode = mode;
    }

    /// Puts the roaster in idle mode.
    pub fn go_idle(&mut self) {
        self.set_operating_mode(OperatingMode::Idle);
    }

    /// Starts roasting.
    pub fn start_roast(&mut self) {
        self.set_operating_mode(OperatingMode::Roasting);
    }

    /// Starts the cooling cycle. Only meaningful after [`start_roast`](Self::start_roast).
    pub fn start_cool(&mut self) {
        self.set_operating_mode(OperatingMode::Cooling);
    }

    /// Puts the roaster to sleep.
    ///
    /// Same as idle except the roaster display shows dashes instead of the timer.
    pub fn go_sleep(&mut self) {
        self.set_operating_mode(OperatingMode::Sleeping);
    }

    // ========== Fan Speed ==========

    /// Gets the fan speed.
    #[must_use]
    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    /// Sets the fan speed from a raw value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::FanSpeedOutOfRange` if value is outside [1, 9].
    pub fn set_fan_speed(&mut self, value: u8) -> Result<(), ValueError> {
        self.fan_speed = FanSpeed::new(value)?;
        Ok(())
    }

    // ========== Timer ==========

    /// Gets the time remaining.
    #[must_use]
    pub fn time_remaining(&self) -> TimeRemaining {
        self.time_remaining
    }

    /// Sets the time remaining in minutes.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TimeRemainingOutOfRange` unless `0.0 < minutes < 10.0`.
    pub fn set_time_remaining(&mut self, minutes: f64) -> Result<(), ValueError> {
        self.time_remaining = TimeRemaining::new(minutes)?;
        Ok(())
    }

    // ========== Heater ==========

    /// Gets the heat setting.
    #[must_use]
    pub fn heat_setting(&self) -> HeatSetting {
        self.heat_setting
    }

    /// Sets the heat setting.
    pub fn set_heat_setting(&mut self, value: u8) {
        self.heat_setting = HeatSetting::new(value);
    }

    // ========== Temperature ==========

    /// Gets the last temperature reported by the roaster.
    #[must_use]
    pub fn current_temperature(&self) -> Temperature {
        self.current_temperature
    }

    // ========== Packets ==========

    /// Builds the command packet for the current settings.
    #[must_use]
    pub fn to_packet(&self) -> Packet {
        protocol::encode(self)
    }

    /// Decodes a status packet and stores the reported temperature.
    ///
    /// # Errors
    ///
    /// Returns `PacketError` if the frame is malformed. The state is not
    /// modified in that case.
    pub fn apply_packet(
        &mut self,
        bytes: &[u8],
        config: &CodecConfig,
    ) -> Result<Temperature, PacketError> {
        let temperature = protocol::decode_with(bytes, config)?;
        self.apply(&StateChange::Temperature(temperature));
        Ok(temperature)
    }

    // ========== State Changes ==========

    /// Applies a state change.
    ///
    /// Returns `true` if the state actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        tracing::trace!(?change, "Applying state change");
        match change {
            StateChange::OperatingMode(mode) => {
                let changed = self.operating_mode != *mode;
                self.set_operating_mode(*mode);
                changed
            }
            StateChange::FanSpeed(speed) => replace(&mut self.fan_speed, *speed),
            StateChange::TimeRemaining(time) => replace(&mut self.time_remaining, *time),
            StateChange::HeatSetting(heat) => replace(&mut self.heat_setting, *heat),
            StateChange::Temperature(temp) => replace(&mut self.current_temperature, *temp),
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    any_changed |= self.apply(c);
                }
                any_changed
            }
        }
    }
}

/// Stores `value` in `slot`, returning whether it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
