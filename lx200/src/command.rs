//! Command grammar: typed view of one terminated LX200 command string.

use tracing::debug;

use crate::sexagesimal::{parse_dec, parse_ra};

/// Terminator character ending every command and framed response.
pub const TERMINATOR: char = '#';

/// Confirmation text returned by a sync (`:CM`).
pub const SYNC_RESPONSE: &str = "Coordinates matched";

/// Mount status returned by `:GW`: German equatorial, tracking, aligned.
pub const MOUNT_STATUS: &str = "GT2";

/// Firmware version returned by `:GVN`.
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A parsed LX200 command.
///
/// Matching is case-sensitive. `:Sr`, `:Sd` and `:Q` match by prefix (the
/// `:Q` family covers every motion-stop variant); the rest are exact.
/// Anything else parses to [`Command::Unrecognized`], which the protocol
/// acknowledges rather than rejects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `:GR` — report current right ascension
    GetRa,
    /// `:GD` — report current declination
    GetDec,
    /// `:Sr<HH:MM:SS>` — set target right ascension, in hours
    SetTargetRa(f64),
    /// `:Sd<sDD*MM:SS>` — set target declination, in degrees
    SetTargetDec(f64),
    /// `:MS` — slew to the current target
    SlewToTarget,
    /// `:CM` — sync: adopt the target as the current position
    SyncToTarget,
    /// `:GW` — report mount status
    GetMountStatus,
    /// `:GVN` — report firmware version
    GetFirmwareVersion,
    /// `:Q` and variants — abort any commanded motion
    Abort,
    /// Anything else; acknowledged with a bare terminator
    Unrecognized,
}

impl Command {
    /// Parse one command string, terminator already stripped.
    ///
    /// Surrounding whitespace is ignored. Coordinate payloads are parsed
    /// leniently; see [`crate::sexagesimal`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some(payload) = text.strip_prefix(":Sr") {
            return Command::SetTargetRa(parse_ra(payload));
        }
        if let Some(payload) = text.strip_prefix(":Sd") {
            return Command::SetTargetDec(parse_dec(payload));
        }
        if text.starts_with(":Q") {
            return Command::Abort;
        }
        match text {
            ":GR" => Command::GetRa,
            ":GD" => Command::GetDec,
            ":MS" => Command::SlewToTarget,
            ":CM" => Command::SyncToTarget,
            ":GW" => Command::GetMountStatus,
            ":GVN" => Command::GetFirmwareVersion,
            _ => {
                debug!("unrecognized command: {:?}", text);
                Command::Unrecognized
            }
        }
    }
}
