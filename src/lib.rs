// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SR700 Lib - A Rust library for the FreshRoast SR700 coffee roaster.
//!
//! The roaster is driven over a serial link with fixed 14-byte packets. The
//! host sends a command packet holding the operating mode, fan speed, timer
//! and heat setting; the roaster answers with a status packet carrying the
//! chamber temperature.
//!
//! # Overview
//!
//! - [`DeviceState`] holds validated settings and the last reported temperature
//! - [`protocol::encode`] and [`protocol::decode`] translate to and from packets
//! - [`Roaster`] runs one command/status round trip over a [`protocol::Transport`]
//!
//! Opening the serial port and deciding how often to poll the roaster are left
//! to the caller.
//!
//! # Quick Start
//!
//! ```
//! use sr700_lib::{DeviceState, protocol};
//!
//! let mut state = DeviceState::new();
//! state.set_fan_speed(5)?;
//! state.set_time_remaining(4.5)?;
//! state.set_heat_setting(3);
//! state.start_roast();
//!
//! let command = protocol::encode(&state);
//! assert_eq!(command.to_string(), "AA AA 61 74 63 04 02 05 2D 03 00 00 AA FA");
//!
//! let status = [
//!     0xAA, 0xAA, 0x61, 0x74, 0x63, 0x04, 0x02, 0x05, 0x2D, 0x03, 0x01, 0x60, 0xAA, 0xFA,
//! ];
//! let temperature = state.apply_packet(&status, &protocol::CodecConfig::default())?;
//! assert_eq!(temperature.degrees(), 352);
//! # Ok::<(), sr700_lib::Error>(())
//! ```

pub mod error;
pub mod protocol;
mod roaster;
pub mod state;
pub mod types;

pub use error::{Error, PacketError, Result, ValueError};
pub use protocol::{CodecConfig, Packet, SerialLink, Transport};
pub use roaster::{Roaster, RoasterBuilder};
pub use state::{DeviceState, StateChange};
pub use types::{FanSpeed, HeatSetting, OperatingMode, Temperature, TimeRemaining};
