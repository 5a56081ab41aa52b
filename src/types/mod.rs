// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for roaster control.
//!
//! This module provides type-safe representations of the settings carried in
//! roaster packets. Each type ensures values are within their valid ranges at
//! construction time, so an out-of-range setting never reaches the wire.
//!
//! # Types
//!
//! - [`OperatingMode`] - Idle/Roasting/Cooling/Sleeping with their wire codes
//! - [`FanSpeed`] - Blower speed (1-9)
//! - [`TimeRemaining`] - Timer in minutes, strictly between 0.0 and 10.0
//! - [`HeatSetting`] - Heater level (any byte)
//! - [`Temperature`] - Chamber temperature as reported by the roaster

mod fan_speed;
mod heat;
mod operating_mode;
mod time_remaining;

pub use fan_speed::FanSpeed;
pub use heat::{HeatSetting, Temperature};
pub use operating_mode::OperatingMode;
pub use time_remaining::TimeRemaining;
