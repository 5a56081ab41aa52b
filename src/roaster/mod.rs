// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Roaster session over a frame transport.
//!
//! A [`Roaster`] pairs a [`Transport`] with the [`DeviceState`] it serializes.
//! Each call to [`Roaster::exchange`] is one command/status round trip; how
//! often to call it is up to the caller.
//!
//! ```no_run
//! use std::fs::OpenOptions;
//!
//! use sr700_lib::Roaster;
//! use sr700_lib::protocol::SerialLink;
//!
//! # fn example() -> sr700_lib::Result<()> {
//! let port = OpenOptions::new().read(true).write(true).open("/dev/ttyUSB0")?;
//! let mut roaster = Roaster::builder(SerialLink::new(port)).build();
//!
//! roaster.set_fan_speed(5)?;
//! roaster.set_time_remaining(9.0)?;
//! roaster.start_roast();
//!
//! let temperature = roaster.exchange()?;
//! println!("chamber at {temperature}");
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::RoasterBuilder;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, ValueError};
use crate::protocol::{self, CodecConfig, Packet, Transport};
use crate::state::{DeviceState, StateChange};
use crate::types::{OperatingMode, Temperature};

/// A roaster reachable through a [`Transport`].
///
/// The device state sits behind a shared lock so another thread (a UI, a
/// roast profile runner) can adjust settings through
/// [`state_handle`](Self::state_handle) while this value drives the link.
/// Every access takes the lock for the duration of one field write or one
/// encode/apply.
#[derive(Debug)]
pub struct Roaster<T: Transport> {
    transport: T,
    codec: CodecConfig,
    state: Arc<RwLock<DeviceState>>,
}

impl<T: Transport> Roaster<T> {
    /// Creates a builder for a roaster on the given transport.
    #[must_use]
    pub fn builder(transport: T) -> RoasterBuilder<T> {
        RoasterBuilder::new(transport)
    }

    pub(crate) fn new(transport: T, state: DeviceState, codec: CodecConfig) -> Self {
        Self {
            transport,
            codec,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns a snapshot of the current device state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state.read().clone()
    }

    /// Returns a handle to the shared device state.
    #[must_use]
    pub fn state_handle(&self) -> Arc<RwLock<DeviceState>> {
        Arc::clone(&self.state)
    }

    /// Returns the codec configuration in use.
    #[must_use]
    pub fn codec_config(&self) -> &CodecConfig {
        &self.codec
    }

    /// Returns a reference to the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consumes the roaster and returns the transport.
    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }

    // ========== Settings ==========

    /// Sets the fan speed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::FanSpeedOutOfRange` if value is outside [1, 9].
    pub fn set_fan_speed(&self, value: u8) -> Result<(), ValueError> {
        self.state.write().set_fan_speed(value)
    }

    /// Sets the time remaining in minutes.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::TimeRemainingOutOfRange` unless `0.0 < minutes < 10.0`.
    pub fn set_time_remaining(&self, minutes: f64) -> Result<(), ValueError> {
        self.state.write().set_time_remaining(minutes)
    }

    /// Sets the heat setting.
    pub fn set_heat_setting(&self, value: u8) {
        self.state.write().set_heat_setting(value);
    }

    /// Sets the operating mode.
    pub fn set_operating_mode(&self, mode: OperatingMode) {
        self.state.write().set_operating_mode(mode);
    }

    /// Puts the roaster in idle mode.
    pub fn go_idle(&self) {
        self.state.write().go_idle();
    }

    /// Starts roasting.
    pub fn start_roast(&self) {
        self.state.write().start_roast();
    }

    /// Starts the cooling cycle. Only meaningful after [`start_roast`](Self::start_roast).
    pub fn start_cool(&self) {
        self.state.write().start_cool();
    }

    /// Puts the roaster to sleep.
    pub fn go_sleep(&self) {
        self.state.write().go_sleep();
    }

    /// Returns the last temperature reported by the roaster.
    #[must_use]
    pub fn current_temperature(&self) -> Temperature {
        self.state.read().current_temperature()
    }

    // ========== Link ==========

    /// Sends a command packet for the current settings.
    ///
    /// Returns the packet that was sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the transport fails.
    pub fn send_state(&mut self) -> Result<Packet, Error> {
        let packet = protocol::encode(&self.state.read());
        self.transport.send(&packet)?;
        Ok(packet)
    }

    /// Receives one status packet and stores the reported temperature.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the transport fails and `Error::MalformedPacket`
    /// if the frame is rejected. The state is not modified in either case.
    pub fn receive_status(&mut self) -> Result<Temperature, Error> {
        let frame = self.transport.receive()?;
        let temperature = protocol::decode_with(&frame, &self.codec)?;
        self.state
            .write()
            .apply(&StateChange::Temperature(temperature));
        Ok(temperature)
    }

    /// Performs one round trip: sends the current settings, then receives a
    /// status packet and stores the reported temperature.
    ///
    /// # Errors
    ///
    /// Same as [`send_state`](Self::send_state) and
    /// [`receive_status`](Self::receive_status).
    pub fn exchange(&mut self) -> Result<Temperature, Error> {
        let sent = self.send_state()?;
        let temperature = self.receive_status()?;
        tracing::debug!(
            mode = ?sent.operating_mode(),
            fan_speed = sent.fan_speed(),
            %temperature,
            "Exchanged packets with roaster"
        );
        Ok(temperature)
    }
}
