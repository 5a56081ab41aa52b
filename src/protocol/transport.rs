// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame transport over an already-open byte stream.
//!
//! Opening the serial port and deciding when to talk to the roaster are the
//! caller's business. This module only moves whole frames.

use std::io::{self, Read, Write};

use super::Packet;
use super::layout;

/// Moves whole frames to and from the roaster.
///
/// Implement this for transports that are not plain byte streams; any
/// [`Read`] + [`Write`] stream can use [`SerialLink`].
pub trait Transport {
    /// Sends one command packet.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn send(&mut self, packet: &Packet) -> io::Result<()>;

    /// Receives one status frame.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the read fails or the stream ends
    /// before a full frame arrives.
    fn receive(&mut self) -> io::Result<[u8; layout::PACKET_LEN]>;
}

/// [`Transport`] over a byte stream such as an open serial port handle.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use sr700_lib::protocol::{Packet, SerialLink, Transport};
///
/// let mut link = SerialLink::new(Cursor::new(Vec::<u8>::new()));
/// link.send(&Packet::from_bytes([0; 14])).unwrap();
/// assert_eq!(link.get_ref().get_ref().len(), 14);
/// ```
#[derive(Debug)]
pub struct SerialLink<T> {
    stream: T,
}

impl<T: Read + Write> SerialLink<T> {
    /// Wraps an open stream.
    #[must_use]
    pub fn new(stream: T) -> Self {
        Self { stream }
    }

    /// Returns a reference to the underlying stream.
    #[must_use]
    pub fn get_ref(&self) -> &T {
        &self.stream
    }

    /// Returns a mutable reference to the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.stream
    }

    /// Unwraps the link, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.stream
    }
}

impl<T: Read + Write> Transport for SerialLink<T> {
    fn send(&mut self, packet: &Packet) -> io::Result<()> {
        self.stream.write_all(packet.as_bytes())?;
        self.stream.flush()?;
        tracing::trace!(%packet, "Sent packet");
        Ok(())
    }

    fn receive(&mut self) -> io::Result<[u8; layout::PACKET_LEN]> {
        let mut frame = [0u8; layout::PACKET_LEN];
        self.stream.read_exact(&mut frame)?;
        tracing::trace!(packet = %Packet::from_bytes(frame), "Received packet");
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn send_writes_whole_frame() {
        let mut link = SerialLink::new(Cursor::new(Vec::<u8>::new()));
        let packet = Packet::from_bytes([0xAB; 14]);
        link.send(&packet).unwrap();
        link.send(&packet).unwrap();
        assert_eq!(link.into_inner().into_inner(), vec![0xAB; 28]);
    }

    #[test]
    fn receive_reads_one_frame_at_a_time() {
        let mut bytes: Vec<u8> = (0..14).collect();
        bytes.extend(100..114);
        let mut link = SerialLink::new(Cursor::new(bytes));

        assert_eq!(link.receive().unwrap()[0], 0);
        assert_eq!(link.receive().unwrap()[13], 113);
    }

    #[test]
    fn receive_short_stream_fails() {
        let mut link = SerialLink::new(Cursor::new(vec![0xAA; 5]));
        let err = link.receive().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
