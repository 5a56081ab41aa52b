// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating modes of the roaster and their wire codes.

use std::fmt;

/// Represents what the roaster is doing.
///
/// Each mode is sent as a fixed two-byte code in the command packet.
///
/// # Examples
///
/// ```
/// use sr700_lib::types::OperatingMode;
///
/// assert_eq!(OperatingMode::Idle.code(), [0x02, 0x01]);
/// assert_eq!(OperatingMode::Roasting.code(), [0x04, 0x02]);
/// assert_eq!(
///     OperatingMode::from_code([0x04, 0x04]),
///     Some(OperatingMode::Cooling)
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum OperatingMode {
    /// Powered and waiting; the display shows the timer.
    #[default]
    Idle,
    /// Heater and fan running.
    Roasting,
    /// Heater off, fan running. Only meaningful after [`Roasting`](Self::Roasting).
    Cooling,
    /// Like idle, but the display shows dashes instead of digits.
    Sleeping,
}

impl OperatingMode {
    /// All modes, in wire-code order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Roasting, Self::Cooling, Self::Sleeping];

    /// Returns the two-byte code carried in the command packet.
    #[must_use]
    pub const fn code(&self) -> [u8; 2] {
        match self {
            Self::Idle => [0x02, 0x01],
            Self::Roasting => [0x04, 0x02],
            Self::Cooling => [0x04, 0x04],
            Self::Sleeping => [0x08, 0x01],
        }
    }

    /// Looks up the mode for a two-byte code.
    ///
    /// Returns `None` for codes the roaster does not define.
    #[must_use]
    pub fn from_code(code: [u8; 2]) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    /// Returns a human readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Roasting => "roasting",
            Self::Cooling => "cooling",
            Self::Sleeping => "sleeping",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
