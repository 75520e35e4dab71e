//! Byte-stream transports for the command session.
//!
//! The protocol layer sees an abstract duplex byte stream; the concrete
//! transports adapt a TCP connection or a local serial port to
//! single-byte polling reads with short timeouts, so the session loop
//! never stalls waiting for input.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use thiserror::Error;

/// Read timeout for byte polling. Short enough to keep the session loop
/// responsive against the 200 ms motion cadence.
const READ_POLL_TIMEOUT: Duration = Duration::from_millis(5);

/// Write timeout for responses.
const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Errors surfaced by a transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Low-level I/O error (socket or serial port failure).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Peer closed the connection.
    #[error("peer disconnected")]
    Disconnected,
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Abstract duplex byte stream carrying commands in and responses out.
pub trait ByteTransport {
    /// Read one byte if available. `Ok(None)` means no byte arrived
    /// within the polling window.
    fn read_byte(&mut self) -> TransportResult<Option<u8>>;

    /// Write a complete response.
    fn write_all(&mut self, bytes: &[u8]) -> TransportResult<()>;
}

/// Transport over an accepted TCP connection.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Wrap an accepted connection, configuring the polling timeouts.
    pub fn new(stream: TcpStream) -> TransportResult<Self> {
        stream.set_read_timeout(Some(READ_POLL_TIMEOUT))?;
        stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
        Ok(Self { stream })
    }
}

impl ByteTransport for TcpTransport {
    fn read_byte(&mut self) -> TransportResult<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.stream.read(&mut buf) {
            Ok(0) => Err(TransportError::Disconnected),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> TransportResult<()> {
        self.stream.write_all(bytes)?;
        self.stream.flush()?;
        Ok(())
    }
}

/// Transport over a local serial port.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    /// Open `path` at `baud_rate` with the polling read timeout.
    pub fn open(path: &str, baud_rate: u32) -> TransportResult<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(READ_POLL_TIMEOUT)
            .open()?;
        Ok(Self { port })
    }
}

impl ByteTransport for SerialTransport {
    fn read_byte(&mut self) -> TransportResult<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> TransportResult<()> {
        self.port.write_all(bytes)?;
        self.port.flush()?;
        Ok(())
    }
}
