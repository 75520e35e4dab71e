//! LX200 telescope mount emulator.
//!
//! Emulates a mount controller well enough that planetarium software and
//! observatory drivers can talk to it: a command processor speaking the
//! LX200 wire protocol, a phase state machine that slews the simulated
//! pointing direction along great circles and tracks sidereally when idle,
//! and a status indicator. Everything is driven by a single cooperative
//! poll loop against an injected monotonic millisecond clock, so the whole
//! device can be exercised in tests without hardware or wall-clock time.
//!
//! # Example
//!
//! ```
//! use emulator::{CommandProcessor, Mount, MountPhase};
//!
//! let mut mount = Mount::new();
//! let mut processor = CommandProcessor::new();
//!
//! // Point at Vega and request a slew
//! let mut reply = Vec::new();
//! for byte in b":Sr18:36:56#:Sd+38*47:01#:MS#" {
//!     if let Some(bytes) = processor.submit(*byte, 0, &mut mount) {
//!         reply.extend(bytes);
//!     }
//! }
//!
//! assert_eq!(reply, b"1#1#0#");
//! assert_eq!(mount.phase(), MountPhase::PendingSlew);
//! ```

pub mod clock;
pub mod indicator;
pub mod mount;
pub mod processor;
pub mod session;
pub mod transport;

pub use clock::{MonotonicClock, SystemClock};
pub use indicator::{IndicatorOutput, LogIndicator, StatusIndicator};
pub use mount::{Mount, MountPhase};
pub use processor::CommandProcessor;
pub use session::run_session;
pub use transport::{
    ByteTransport, SerialTransport, TcpTransport, TransportError, TransportResult,
};
