// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the SR700 library.
//!
//! This module provides the error hierarchy for the two failure kinds of the
//! roaster protocol: rejected parameter values and malformed inbound frames.
//! Transport failures are carried through unchanged as I/O errors.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A setting was outside the range the roaster accepts.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ValueError),

    /// An inbound frame did not have the expected shape.
    #[error("malformed packet: {0}")]
    MalformedPacket(#[from] PacketError),

    /// The underlying byte stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values. The rejected value is never stored.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// Fan speed is outside the allowed range.
    #[error("fan speed {actual} is out of range [{min}, {max}]")]
    FanSpeedOutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// Time remaining is outside the open interval the timer supports.
    #[error("time remaining {actual} is out of range ({min}, {max})")]
    TimeRemainingOutOfRange {
        /// Exclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },
}

/// Errors related to decoding frames received from the roaster.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// Frame is not exactly one packet long.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required frame length.
        expected: usize,
        /// Length that was received.
        actual: usize,
    },

    /// Frame does not start with the packet header.
    #[error("invalid header {actual:02X?}")]
    InvalidHeader {
        /// The two bytes found at the header position.
        actual: [u8; 2],
    },

    /// Frame does not end with the packet footer.
    #[error("invalid footer {actual:02X?}")]
    InvalidFooter {
        /// The two bytes found at the footer position.
        actual: [u8; 2],
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::FanSpeedOutOfRange {
            min: 1,
            max: 9,
            actual: 10,
        };
        assert_eq!(err.to_string(), "fan speed 10 is out of range [1, 9]");
    }

    #[test]
    fn time_error_display() {
        let err = ValueError::TimeRemainingOutOfRange {
            min: 0.0,
            max: 10.0,
            actual: 11.0,
        };
        assert_eq!(err.to_string(), "time remaining 11 is out of range (0, 10)");
    }

    #[test]
    fn packet_error_display() {
        let err = PacketError::InvalidLength {
            expected: 14,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 14 bytes, got 3");

        let err = PacketError::InvalidHeader {
            actual: [0x00, 0xAB],
        };
        assert_eq!(err.to_string(), "invalid header [00, AB]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::FanSpeedOutOfRange {
            min: 1,
            max: 9,
            actual: 0,
        };
        let err: Error = value_err.clone().into();
        assert!(matches!(err, Error::InvalidParameter(e) if e == value_err));
    }

    #[test]
    fn error_from_packet_error() {
        let err: Error = PacketError::InvalidFooter {
            actual: [0x00, 0x00],
        }
        .into();
        assert!(matches!(err, Error::MalformedPacket(_)));
        assert_eq!(err.to_string(), "malformed packet: invalid footer [00, 00]");
    }
}
