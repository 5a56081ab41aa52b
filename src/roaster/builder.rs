// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roaster builder.

use crate::protocol::{CodecConfig, Transport};
use crate::state::DeviceState;

use super::Roaster;

/// Builder for creating a [`Roaster`].
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use sr700_lib::Roaster;
/// use sr700_lib::protocol::{CodecConfig, SerialLink};
/// use sr700_lib::state::DeviceState;
///
/// let mut state = DeviceState::new();
/// state.set_fan_speed(3).unwrap();
///
/// let roaster = Roaster::builder(SerialLink::new(Cursor::new(Vec::<u8>::new())))
///     .with_state(state)
///     .with_codec_config(CodecConfig::lenient())
///     .build();
///
/// assert_eq!(roaster.state().fan_speed().value(), 3);
/// assert!(!roaster.codec_config().verify_envelope());
/// ```
#[derive(Debug)]
pub struct RoasterBuilder<T: Transport> {
    transport: T,
    state: Option<DeviceState>,
    codec: CodecConfig,
}

impl<T: Transport> RoasterBuilder<T> {
    /// Creates a new builder for the given transport.
    pub(crate) fn new(transport: T) -> Self {
        Self {
            transport,
            state: None,
            codec: CodecConfig::default(),
        }
    }

    /// Starts from the given state instead of the power-up defaults.
    #[must_use]
    pub fn with_state(mut self, state: DeviceState) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets how status packets are decoded.
    #[must_use]
    pub fn with_codec_config(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }

    /// Returns the initial state, if one was set.
    #[must_use]
    pub fn state(&self) -> Option<&DeviceState> {
        self.state.as_ref()
    }

    /// Builds the roaster.
    ///
    /// If no state was set, defaults to [`DeviceState::new()`].
    #[must_use]
    pub fn build(self) -> Roaster<T> {
        let state = self.state.unwrap_or_default();
        tracing::debug!(
            mode = %state.operating_mode(),
            verify_envelope = self.codec.verify_envelope(),
            "Created roaster session"
        );
        Roaster::new(self.transport, state, self.codec)
    }
}
