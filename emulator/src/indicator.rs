//! Slew status indicator.
//!
//! Derives a binary on/off level from the mount phase: steady on while
//! tracking, slow blink while a slew is pending, fast blink while
//! slewing. No timing source of its own; the caller supplies the shared
//! monotonic clock reading.

use tracing::trace;

use crate::mount::MountPhase;

/// Toggle period while a slew is pending, in milliseconds.
pub const PENDING_BLINK_INTERVAL_MS: u64 = 1000;

/// Toggle period while slewing, in milliseconds.
pub const SLEWING_BLINK_INTERVAL_MS: u64 = 300;

/// Write-only binary output device driven by the indicator.
///
/// Abstracts the physical LED so the session loop can run headless and
/// tests can record the level sequence.
pub trait IndicatorOutput {
    fn set_level(&mut self, on: bool);
}

/// Indicator output that logs level changes.
#[derive(Debug, Default)]
pub struct LogIndicator {
    last: Option<bool>,
}

impl IndicatorOutput for LogIndicator {
    fn set_level(&mut self, on: bool) {
        if self.last != Some(on) {
            trace!("indicator {}", if on { "on" } else { "off" });
            self.last = Some(on);
        }
    }
}

/// Blink-phase state for the status indicator.
#[derive(Debug)]
pub struct StatusIndicator {
    lit: bool,
    last_toggle_ms: u64,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            lit: true,
            last_toggle_ms: 0,
        }
    }

    /// Desired output level for the given phase at `now_ms`.
    pub fn update(&mut self, phase: MountPhase, now_ms: u64) -> bool {
        let interval = match phase {
            MountPhase::Tracking => {
                self.lit = true;
                self.last_toggle_ms = now_ms;
                return true;
            }
            MountPhase::PendingSlew => PENDING_BLINK_INTERVAL_MS,
            MountPhase::Slewing => SLEWING_BLINK_INTERVAL_MS,
        };
        if now_ms.saturating_sub(self.last_toggle_ms) >= interval {
            self.lit = !self.lit;
            self.last_toggle_ms = now_ms;
        }
        self.lit
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
