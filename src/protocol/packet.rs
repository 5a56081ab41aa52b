// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-size packet frame.

use std::fmt;
use std::ops::Range;

use crate::error::PacketError;
use crate::types::OperatingMode;

use super::layout;

/// A single 14-byte frame exchanged with the roaster.
///
/// Command packets (host to roaster) and status packets (roaster to host)
/// share this envelope. A `Packet` always has the right length; whether the
/// header and footer are correct is checked separately by
/// [`has_valid_envelope`](Self::has_valid_envelope).
///
/// # Examples
///
/// ```
/// use sr700_lib::protocol::Packet;
///
/// let bytes = [
///     0xAA, 0xAA, 0x61, 0x74, 0x63, 0x02, 0x01, 0x01, 0x00, 0x00, 0x01, 0x60, 0xAA, 0xFA,
/// ];
/// let packet = Packet::try_from(&bytes[..]).unwrap();
/// assert_eq!(packet.temperature_field(), 0x0160);
/// assert_eq!(packet.to_string(), "AA AA 61 74 63 02 01 01 00 00 01 60 AA FA");
///
/// assert!(Packet::try_from(&bytes[..13]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Packet([u8; layout::PACKET_LEN]);

impl Packet {
    /// Length of every packet in bytes.
    pub const LEN: usize = layout::PACKET_LEN;

    /// Wraps raw frame bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; layout::PACKET_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the frame bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; layout::PACKET_LEN] {
        &self.0
    }

    /// Consumes the packet and returns the frame bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; layout::PACKET_LEN] {
        self.0
    }

    /// Returns the two header bytes.
    #[must_use]
    pub fn header(&self) -> [u8; 2] {
        self.pair(layout::HEADER_RANGE)
    }

    /// Returns the two footer bytes.
    #[must_use]
    pub fn footer(&self) -> [u8; 2] {
        self.pair(layout::FOOTER_RANGE)
    }

    /// Returns the raw operating mode code.
    #[must_use]
    pub fn mode_code(&self) -> [u8; 2] {
        self.pair(layout::MODE_RANGE)
    }

    /// Returns the operating mode, if the code is one the roaster defines.
    #[must_use]
    pub fn operating_mode(&self) -> Option<OperatingMode> {
        OperatingMode::from_code(self.mode_code())
    }

    /// Returns the fan speed byte.
    #[must_use]
    pub const fn fan_speed(&self) -> u8 {
        self.0[layout::FAN_SPEED_OFFSET]
    }

    /// Returns the timer byte, in tenths of a minute.
    #[must_use]
    pub const fn time_remaining_tenths(&self) -> u8 {
        self.0[layout::TIME_REMAINING_OFFSET]
    }

    /// Returns the heat setting byte.
    #[must_use]
    pub const fn heat_setting(&self) -> u8 {
        self.0[layout::HEAT_SETTING_OFFSET]
    }

    /// Returns the raw big-endian temperature field, before sentinel handling.
    #[must_use]
    pub fn temperature_field(&self) -> u16 {
        u16::from_be_bytes(self.pair(layout::TEMPERATURE_RANGE))
    }

    /// Returns `true` if the header and footer bytes are correct.
    #[must_use]
    pub fn has_valid_envelope(&self) -> bool {
        self.header() == layout::HEADER && self.footer() == layout::FOOTER
    }

    /// Checks the header and footer bytes.
    ///
    /// # Errors
    ///
    /// Returns `PacketError::InvalidHeader` or `PacketError::InvalidFooter`
    /// naming the bytes that were found.
    pub fn verify_envelope(&self) -> Result<(), PacketError> {
        let header = self.header();
        if header != layout::HEADER {
            return Err(PacketError::InvalidHeader { actual: header });
        }
        let footer = self.footer();
        if footer != layout::FOOTER {
            return Err(PacketError::InvalidFooter { actual: footer });
        }
        Ok(())
    }

    fn pair(&self, range: Range<usize>) -> [u8; 2] {
        [self.0[range.start], self.0[range.start + 1]]
    }
}

impl TryFrom<&[u8]> for Packet {
    type Error = PacketError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let frame: [u8; layout::PACKET_LEN] =
            bytes.try_into().map_err(|_| PacketError::InvalidLength {
                expected: layout::PACKET_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(frame))
    }
}

impl From<[u8; layout::PACKET_LEN]> for Packet {
    fn from(bytes: [u8; layout::PACKET_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Packet> for [u8; layout::PACKET_LEN] {
    fn from(packet: Packet) -> Self {
        packet.0
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: [u8; 14] = [
        0xAA, 0xAA, 0x61, 0x74, 0x63, 0x04, 0x02, 0x05, 0x2D, 0x03, 0x01, 0x60, 0xAA, 0xFA,
    ];

    #[test]
    fn field_accessors() {
        let packet = Packet::from_bytes(STATUS);
        assert_eq!(packet.header(), [0xAA, 0xAA]);
        assert_eq!(packet.mode_code(), [0x04, 0x02]);
        assert_eq!(packet.operating_mode(), Some(OperatingMode::Roasting));
        assert_eq!(packet.fan_speed(), 5);
        assert_eq!(packet.time_remaining_tenths(), 45);
        assert_eq!(packet.heat_setting(), 3);
        assert_eq!(packet.temperature_field(), 352);
        assert_eq!(packet.footer(), [0xAA, 0xFA]);
    }

    #[test]
    fn try_from_checks_length() {
        assert!(Packet::try_from(&STATUS[..]).is_ok());

        let err = Packet::try_from(&STATUS[..10]).unwrap_err();
        assert_eq!(
            err,
            PacketError::InvalidLength {
                expected: 14,
                actual: 10
            }
        );

        let mut long = STATUS.to_vec();
        long.push(0);
        assert!(Packet::try_from(long.as_slice()).is_err());
        assert!(Packet::try_from(&[][..]).is_err());
    }

    #[test]
    fn envelope_checks() {
        let packet = Packet::from_bytes(STATUS);
        assert!(packet.has_valid_envelope());
        assert!(packet.verify_envelope().is_ok());

        let mut bad_header = STATUS;
        bad_header[1] = 0x00;
        assert_eq!(
            Packet::from_bytes(bad_header).verify_envelope(),
            Err(PacketError::InvalidHeader {
                actual: [0xAA, 0x00]
            })
        );

        let mut bad_footer = STATUS;
        bad_footer[13] = 0xFB;
        assert!(!Packet::from_bytes(bad_footer).has_valid_envelope());
        assert_eq!(
            Packet::from_bytes(bad_footer).verify_envelope(),
            Err(PacketError::InvalidFooter {
                actual: [0xAA, 0xFB]
            })
        );
    }

    #[test]
    fn unknown_mode_code() {
        let mut bytes = STATUS;
        bytes[5] = 0x00;
        assert_eq!(Packet::from_bytes(bytes).operating_mode(), None);
    }

    #[test]
    fn display_hex() {
        assert_eq!(
            Packet::from_bytes(STATUS).to_string(),
            "AA AA 61 74 63 04 02 05 2D 03 01 60 AA FA"
        );
    }
}
