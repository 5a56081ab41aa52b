// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! This module provides types for tracking and updating roaster state.
//! The [`DeviceState`] struct holds the settings sent to the roaster and the
//! last temperature it reported, while [`StateChange`] represents individual
//! changes that can be applied.
//!
//! # Examples
//!
//! ```
//! use sr700_lib::state::DeviceState;
//! use sr700_lib::types::OperatingMode;
//!
//! let mut state = DeviceState::new();
//! state.set_fan_speed(6)?;
//! state.set_time_remaining(8.5)?;
//! state.start_roast();
//!
//! assert_eq!(state.operating_mode(), OperatingMode::Roasting);
//! # Ok::<(), sr700_lib::ValueError>(())
//! ```

mod device_state;
mod state_change;

pub use device_state::DeviceState;
pub use state_change::StateChange;
