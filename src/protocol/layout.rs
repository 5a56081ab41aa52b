// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Byte offsets and constant fields of the 14-byte roaster packet.
//!
//! Multi-byte fields are big-endian.

use std::ops::Range;

pub const PACKET_LEN: usize = 14;

pub const HEADER: [u8; 2] = [0xAA, 0xAA];
pub const HEADER_RANGE: Range<usize> = 0..2;

pub const TEMPERATURE_UNIT: [u8; 2] = [0x61, 0x74];
pub const TEMPERATURE_UNIT_RANGE: Range<usize> = 2..4;

pub const FLAGS: u8 = 0x63;
pub const FLAGS_OFFSET: usize = 4;

pub const MODE_RANGE: Range<usize> = 5..7;
pub const FAN_SPEED_OFFSET: usize = 7;
pub const TIME_REMAINING_OFFSET: usize = 8;
pub const HEAT_SETTING_OFFSET: usize = 9;

/// Zero in command packets; the reported temperature in status packets.
pub const TEMPERATURE_RANGE: Range<usize> = 10..12;

pub const FOOTER: [u8; 2] = [0xAA, 0xFA];
pub const FOOTER_RANGE: Range<usize> = 12..14;
