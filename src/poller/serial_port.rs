// src/poller/serial_port.rs

use super::SensorPoller;
use crate::common::{
    error::ConnectionError,
    hal_traits::{PollTimer, SerialChannel},
    types::FieldSelection,
};
use log::info;
use serialport::{ClearBuffer, SerialPort};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Read, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Timeout handed to the OS driver for each read. Kept short so the
/// poller's response deadline is what bounds a cycle.
const PORT_READ_TIMEOUT: Duration = Duration::from_millis(10);

/// Bytes pulled from the driver per read call.
const RX_CHUNK_LEN: usize = 64;

/// A real serial device, opened through the `serialport` crate.
pub struct SerialPortChannel {
    port: Box<dyn SerialPort>,
    rx: VecDeque<u8>,
}

impl SerialPortChannel {
    /// Opens `path` at `baud_rate` (8N1, no flow control).
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, ConnectionError> {
        let port = serialport::new(path, baud_rate)
            .timeout(PORT_READ_TIMEOUT)
            .open()
            .map_err(|source| ConnectionError {
                path: path.to_string(),
                baud_rate,
                source,
            })?;

        info!("opened {path} at {baud_rate} baud");
        Ok(Self::from_port(port))
    }

    /// Wraps an already opened port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        SerialPortChannel {
            port,
            rx: VecDeque::with_capacity(RX_CHUNK_LEN),
        }
    }
}

impl fmt::Debug for SerialPortChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialPortChannel")
            .field("port", &self.port.name())
            .field("buffered", &self.rx.len())
            .finish()
    }
}

/// Driver timeouts and interrupted syscalls mean "nothing yet", not failure.
fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

fn nb_from_io<T>(result: io::Result<T>) -> nb::Result<T, io::Error> {
    match result {
        Ok(v) => Ok(v),
        Err(e) if is_transient(&e) => Err(nb::Error::WouldBlock),
        Err(e) => Err(nb::Error::Other(e)),
    }
}

impl SerialChannel for SerialPortChannel {
    type Error = io::Error;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if let Some(byte) = self.rx.pop_front() {
            return Ok(byte);
        }

        let mut chunk = [0u8; RX_CHUNK_LEN];
        match nb_from_io(self.port.read(&mut chunk))? {
            0 => Err(nb::Error::WouldBlock),
            n => {
                self.rx.extend(&chunk[1..n]);
                Ok(chunk[0])
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        match nb_from_io(self.port.write(&[byte]))? {
            0 => Err(nb::Error::WouldBlock),
            _ => Ok(()),
        }
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        nb_from_io(self.port.flush())
    }

    fn discard_buffers(&mut self) -> Result<(), Self::Error> {
        self.rx.clear();
        self.port.clear(ClearBuffer::All).map_err(io::Error::from)
    }
}

impl PollTimer for SerialPortChannel {
    type Instant = Instant;

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(us as u64));
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

impl SensorPoller<SerialPortChannel> {
    /// Opens the device at `device_path` and returns a poller ready for `poll()`.
    ///
    /// No data is exchanged until the first poll.
    pub fn open(
        device_path: &str,
        baud_rate: u32,
        enabled_fields: FieldSelection,
    ) -> Result<Self, ConnectionError> {
        let channel = SerialPortChannel::open(device_path, baud_rate)?;
        Ok(SensorPoller::new(channel, enabled_fields).with_baud_rate(baud_rate))
    }
}
