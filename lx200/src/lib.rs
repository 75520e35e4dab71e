//! LX200 Serial Command Protocol
//!
//! This crate implements the wire grammar of the Meade LX200 protocol, a
//! line-oriented ASCII command/response protocol used to control telescope
//! mounts.
//!
//! # Protocol Overview
//!
//! Commands are short ASCII strings starting with `:` and terminated with
//! `#`. There is no framing beyond the terminator character: no length
//! prefixes, no checksums. The protocol never reports a fault — input that
//! matches no command is acknowledged with a bare `#`.
//!
//! ## Command Set
//!
//! | Command | Meaning | Response |
//! |---------|---------|----------|
//! | `:GR#` | get right ascension | `HH:MM:SS#` |
//! | `:GD#` | get declination | `sDD*MM:SS#` |
//! | `:Sr<HH:MM:SS>#` | set target right ascension | `1#` |
//! | `:Sd<sDD*MM:SS>#` | set target declination | `1#` |
//! | `:MS#` | slew to target | `0#` |
//! | `:CM#` | sync to target | confirmation text + `#` |
//! | `:GW#` | get mount status | status string + `#` |
//! | `:GVN#` | get firmware version | version string + `#` |
//! | `:Q...#` | abort motion | `#` |
//!
//! ## Coordinate Text Forms
//!
//! Right ascension travels as `HH:MM:SS` (hours), declination as
//! `sDD*MM:SS` (signed degrees). Formatting truncates toward zero at whole
//! seconds; parsing is lenient and reads malformed numeric fields as zero,
//! mirroring the embedded firmware this protocol grew up on.

pub mod command;
pub mod sexagesimal;

pub use command::{Command, FIRMWARE_VERSION, MOUNT_STATUS, SYNC_RESPONSE, TERMINATOR};
pub use sexagesimal::{format_dec, format_ra, parse_dec, parse_ra};
