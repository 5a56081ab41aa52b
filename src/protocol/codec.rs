// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between [`DeviceState`] and packets.
//!
//! Both directions are pure. Encoding is total: every [`DeviceState`] holds
//! validated values, so any state produces a well-formed command packet.
//! Decoding reads only the temperature field of a status packet.

use crate::error::PacketError;
use crate::state::{DeviceState, StateChange};
use crate::types::Temperature;

use super::Packet;
use super::layout;

/// Options controlling how status packets are decoded.
///
/// # Examples
///
/// ```
/// use sr700_lib::protocol::{self, CodecConfig};
///
/// // Header bytes are wrong, but the lenient decoder only needs the length.
/// let frame = [
///     0x00, 0x00, 0x61, 0x74, 0x63, 0x02, 0x01, 0x01, 0x00, 0x00, 0x01, 0x60, 0xAA, 0xFA,
/// ];
/// assert!(protocol::decode(&frame).is_err());
///
/// let temp = protocol::decode_with(&frame, &CodecConfig::lenient()).unwrap();
/// assert_eq!(temp.degrees(), 352);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    verify_envelope: bool,
}

impl CodecConfig {
    /// Header and footer are verified by default.
    pub const DEFAULT_VERIFY_ENVELOPE: bool = true;

    /// Creates the default, strict configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verify_envelope: Self::DEFAULT_VERIFY_ENVELOPE,
        }
    }

    /// Creates a configuration that checks only the frame length.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            verify_envelope: false,
        }
    }

    /// Sets whether header and footer bytes are verified.
    #[must_use]
    pub const fn with_verify_envelope(mut self, verify: bool) -> Self {
        self.verify_envelope = verify;
        self
    }

    /// Returns whether header and footer bytes are verified.
    #[must_use]
    pub const fn verify_envelope(&self) -> bool {
        self.verify_envelope
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the command packet for a device state.
///
/// The temperature field is always sent as zero; the roaster ignores it.
///
/// # Examples
///
/// ```
/// use sr700_lib::protocol;
/// use sr700_lib::state::DeviceState;
///
/// let packet = protocol::encode(&DeviceState::new());
/// assert_eq!(
///     packet.as_bytes(),
///     &[0xAA, 0xAA, 0x61, 0x74, 0x63, 0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0xAA, 0xFA]
/// );
/// ```
#[must_use]
pub fn encode(state: &DeviceState) -> Packet {
    let mut frame = [0u8; layout::PACKET_LEN];
    frame[layout::HEADER_RANGE].copy_from_slice(&layout::HEADER);
    frame[layout::TEMPERATURE_UNIT_RANGE].copy_from_slice(&layout::TEMPERATURE_UNIT);
    frame[layout::FLAGS_OFFSET] = layout::FLAGS;
    frame[layout::MODE_RANGE].copy_from_slice(&state.operating_mode().code());
    frame[layout::FAN_SPEED_OFFSET] = state.fan_speed().value();
    frame[layout::TIME_REMAINING_OFFSET] = state.time_remaining().tenths();
    frame[layout::HEAT_SETTING_OFFSET] = state.heat_setting().value();
    frame[layout::TEMPERATURE_RANGE].copy_from_slice(&[0x00, 0x00]);
    frame[layout::FOOTER_RANGE].copy_from_slice(&layout::FOOTER);

    let packet = Packet::from_bytes(frame);
    tracing::trace!(%packet, "Encoded command packet");
    packet
}

/// Decodes the temperature from a status packet, verifying the envelope.
///
/// Equivalent to [`decode_with`] using [`CodecConfig::default`].
///
/// # Errors
///
/// Returns `PacketError` if the frame is not 14 bytes long or its header or
/// footer is wrong.
pub fn decode(bytes: &[u8]) -> Result<Temperature, PacketError> {
    decode_with(bytes, &CodecConfig::default())
}

/// Decodes the temperature from a status packet.
///
/// The sentinel `FF 00` decodes to [`Temperature::FLOOR`] rather than its
/// literal value.
///
/// # Errors
///
/// Returns `PacketError::InvalidLength` if the frame is not 14 bytes long,
/// and, when the config verifies the envelope, `InvalidHeader` or
/// `InvalidFooter`.
pub fn decode_with(bytes: &[u8], config: &CodecConfig) -> Result<Temperature, PacketError> {
    let packet = Packet::try_from(bytes).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected status packet");
    })?;
    if config.verify_envelope() {
        packet.verify_envelope().inspect_err(|e| {
            tracing::warn!(%packet, error = %e, "Rejected status packet");
        })?;
    }

    let raw = packet.temperature_field();
    let temperature = Temperature::from_wire(raw);
    if raw == Temperature::SENTINEL {
        tracing::trace!("Temperature below measurable range");
    }
    tracing::trace!(%packet, %temperature, "Decoded status packet");
    Ok(temperature)
}

/// Decodes a status packet into the state change it implies.
///
/// # Errors
///
/// Same as [`decode_with`].
pub fn decode_change(bytes: &[u8], config: &CodecConfig) -> Result<StateChange, PacketError> {
    decode_with(bytes, config).map(StateChange::Temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperatingMode;

    fn status(temp: [u8; 2]) -> [u8; 14] {
        [
            0xAA, 0xAA, 0x61, 0x74, 0x63, 0x02, 0x01, 0x01, 0x00, 0x00, temp[0], temp[1], 0xAA,
            0xFA,
        ]
    }

    #[test]
    fn encode_default_state() {
        let packet = encode(&DeviceState::new());
        assert_eq!(
            packet.into_bytes(),
            [
                0xAA, 0xAA, 0x61, 0x74, 0x63, 0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0xAA, 0xFA
            ]
        );
    }

    #[test]
    fn encode_places_every_field() {
        let mut state = DeviceState::new();
        state.start_roast();
        state.set_fan_speed(9).unwrap();
        state.set_time_remaining(9.9).unwrap();
        state.set_heat_setting(3);

        let packet = encode(&state);
        assert_eq!(
            packet.into_bytes(),
            [
                0xAA, 0xAA, 0x61, 0x74, 0x63, 0x04, 0x02, 0x09, 0x63, 0x03, 0x00, 0x00, 0xAA, 0xFA
            ]
        );
    }

    #[test]
    fn encode_never_sends_temperature() {
        let mut state = DeviceState::new();
        state.apply(&StateChange::temperature(Temperature::new(400)));
        assert_eq!(encode(&state).temperature_field(), 0);
    }

    #[test]
    fn encode_mode_codes() {
        let cases = [
            (OperatingMode::Idle, [0x02, 0x01]),
            (OperatingMode::Roasting, [0x04, 0x02]),
            (OperatingMode::Cooling, [0x04, 0x04]),
            (OperatingMode::Sleeping, [0x08, 0x01]),
        ];
        for (mode, code) in cases {
            let mut state = DeviceState::new();
            state.set_operating_mode(mode);
            assert_eq!(encode(&state).mode_code(), code);
        }
    }

    #[test]
    fn encode_is_idempotent() {
        let mut state = DeviceState::new();
        state.start_cool();
        let first = encode(&state);
        state.start_cool();
        assert_eq!(encode(&state), first);
    }

    #[test]
    fn decode_reading() {
        assert_eq!(decode(&status([0x01, 0x60])).unwrap().degrees(), 352);
    }

    #[test]
    fn decode_sentinel() {
        let temp = decode(&status([0xFF, 0x00])).unwrap();
        assert_eq!(temp.degrees(), 150);
        assert_ne!(temp.degrees(), 65280);
    }

    #[test]
    fn decode_near_sentinel_is_literal() {
        assert_eq!(decode(&status([0xFF, 0x01])).unwrap().degrees(), 0xFF01);
        assert_eq!(decode(&status([0x00, 0xFF])).unwrap().degrees(), 0x00FF);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        let frame = status([0x01, 0x60]);
        assert!(matches!(
            decode(&frame[..13]),
            Err(PacketError::InvalidLength {
                expected: 14,
                actual: 13
            })
        ));
        assert!(decode_with(&frame[..13], &CodecConfig::lenient()).is_err());
    }

    #[test]
    fn decode_strict_rejects_bad_envelope() {
        let mut frame = status([0x01, 0x60]);
        frame[0] = 0x55;
        assert!(matches!(
            decode(&frame),
            Err(PacketError::InvalidHeader { .. })
        ));

        let mut frame = status([0x01, 0x60]);
        frame[12] = 0x00;
        assert!(matches!(
            decode(&frame),
            Err(PacketError::InvalidFooter { .. })
        ));
    }

    #[test]
    fn decode_lenient_ignores_envelope() {
        let mut frame = status([0x01, 0x60]);
        frame[0] = 0x55;
        frame[13] = 0x00;
        let temp = decode_with(&frame, &CodecConfig::lenient()).unwrap();
        assert_eq!(temp.degrees(), 352);
    }

    #[test]
    fn decode_change_wraps_temperature() {
        let change = decode_change(&status([0xFF, 0x00]), &CodecConfig::default()).unwrap();
        assert_eq!(change, StateChange::Temperature(Temperature::FLOOR));
    }

    #[test]
    fn config_builders() {
        assert!(CodecConfig::default().verify_envelope());
        assert!(!CodecConfig::lenient().verify_envelope());
        assert!(
            CodecConfig::lenient()
                .with_verify_envelope(true)
                .verify_envelope()
        );
    }
}
