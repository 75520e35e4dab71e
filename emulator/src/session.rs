//! Poll-driven command session.
//!
//! One cooperative loop services a connected transport: drain the inbound
//! bytes into the command processor (responses go straight back out),
//! advance the mount, refresh the status indicator, sleep briefly. No
//! step blocks, so an abort command always takes effect before the next
//! scheduled motion step.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::clock::MonotonicClock;
use crate::indicator::{IndicatorOutput, StatusIndicator};
use crate::mount::Mount;
use crate::processor::CommandProcessor;
use crate::transport::{ByteTransport, TransportError, TransportResult};

/// Scheduler pass interval.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Service one connection until the peer disconnects.
///
/// The mount, indicator, and clock outlive the session: a reconnecting
/// client finds the mount wherever the previous session left it. The
/// command buffer does not survive the session; a fresh connection starts
/// clean.
pub fn run_session(
    transport: &mut dyn ByteTransport,
    mount: &mut Mount,
    indicator: &mut StatusIndicator,
    output: &mut dyn IndicatorOutput,
    clock: &dyn MonotonicClock,
) -> TransportResult<()> {
    let mut processor = CommandProcessor::new();

    loop {
        loop {
            match transport.read_byte() {
                Ok(Some(byte)) => {
                    if let Some(response) = processor.submit(byte, clock.now_ms(), mount) {
                        transport.write_all(&response)?;
                    }
                }
                Ok(None) => break,
                Err(TransportError::Disconnected) => {
                    debug!("peer disconnected");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }

        mount.tick(clock.now_ms());
        let level = indicator.update(mount.phase(), clock.now_ms());
        output.set_level(level);

        thread::sleep(POLL_INTERVAL);
    }
}
