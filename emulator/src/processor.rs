//! Command processor: byte accumulation and dispatch.
//!
//! Collects inbound bytes until the terminator, parses the accumulated
//! text as an LX200 command, applies it to the mount, and produces the
//! response bytes. Per the protocol there is no error path: every
//! terminated command answers, and unrecognized input is acknowledged
//! with a bare terminator.

use lx200::{
    format_dec, format_ra, Command, FIRMWARE_VERSION, MOUNT_STATUS, SYNC_RESPONSE, TERMINATOR,
};
use tracing::{debug, trace};

use crate::mount::Mount;

/// Commands longer than this without a terminator reset the buffer.
///
/// The longest defined command (`:Sd+DD*MM:SS`) is 12 bytes; the cap only
/// exists so a stream that never terminates cannot grow the buffer
/// without bound.
pub const MAX_COMMAND_LEN: usize = 64;

/// Accumulates inbound bytes and dispatches terminated commands against a
/// [`Mount`].
#[derive(Debug, Default)]
pub struct CommandProcessor {
    buffer: String,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Feed one inbound byte.
    ///
    /// Returns the response to write back if the byte completed a command.
    /// A buffer overflow drops the accumulated text and answers with a
    /// bare terminator (reset-and-acknowledge).
    pub fn submit(&mut self, byte: u8, now_ms: u64, mount: &mut Mount) -> Option<Vec<u8>> {
        if byte == TERMINATOR as u8 {
            let text = std::mem::take(&mut self.buffer);
            return Some(self.dispatch(text.trim(), now_ms, mount));
        }
        if self.buffer.len() >= MAX_COMMAND_LEN {
            debug!("command buffer overflow, resetting");
            self.buffer.clear();
            return Some(framed(""));
        }
        // Latin-1 view of the byte, like the rest of the wire
        self.buffer.push(byte as char);
        None
    }

    fn dispatch(&mut self, text: &str, now_ms: u64, mount: &mut Mount) -> Vec<u8> {
        let command = Command::parse(text);
        trace!("dispatch {:?} as {:?}", text, command);
        match command {
            Command::GetRa => framed(&format_ra(mount.current().ra_hours)),
            Command::GetDec => framed(&format_dec(mount.current().dec_degrees)),
            Command::SetTargetRa(ra_hours) => {
                mount.set_target_ra(ra_hours);
                framed("1")
            }
            Command::SetTargetDec(dec_degrees) => {
                mount.set_target_dec(dec_degrees);
                framed("1")
            }
            Command::SlewToTarget => {
                mount.start_slew(now_ms);
                framed("0")
            }
            Command::SyncToTarget => {
                mount.sync_to_target();
                framed(SYNC_RESPONSE)
            }
            Command::GetMountStatus => framed(MOUNT_STATUS),
            Command::GetFirmwareVersion => framed(FIRMWARE_VERSION),
            Command::Abort => {
                mount.abort(now_ms);
                framed("")
            }
            Command::Unrecognized => framed(""),
        }
    }
}

fn framed(body: &str) -> Vec<u8> {
    format!("{body}{TERMINATOR}").into_bytes()
}
