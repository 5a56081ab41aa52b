// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roaster wire protocol.
//!
//! The roaster speaks in fixed 14-byte frames:
//!
//! | Offset | Size | Field | Value |
//! |--------|------|-------|-------|
//! | 0 | 2 | header | `AA AA` |
//! | 2 | 2 | temperature unit | `61 74` |
//! | 4 | 1 | flags | `63` |
//! | 5 | 2 | operating mode | see [`OperatingMode::code`](crate::types::OperatingMode::code) |
//! | 7 | 1 | fan speed | 1-9 |
//! | 8 | 1 | time remaining | tenths of a minute |
//! | 9 | 1 | heat setting | raw byte |
//! | 10 | 2 | temperature | `00 00` outbound, reading inbound |
//! | 12 | 2 | footer | `AA FA` |
//!
//! - [`encode`] builds a command packet from a [`DeviceState`](crate::state::DeviceState)
//! - [`decode`] / [`decode_with`] read the temperature from a status packet
//! - [`Transport`] and [`SerialLink`] move frames over an open byte stream

mod codec;
pub mod layout;
mod packet;
mod transport;

pub use codec::{CodecConfig, decode, decode_change, decode_with, encode};
pub use packet::Packet;
pub use transport::{SerialLink, Transport};
