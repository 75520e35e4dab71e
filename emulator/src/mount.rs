//! Mount pointing state machine.
//!
//! Owns the simulated pointing direction, the commanded target, and the
//! mount phase. [`Mount::tick`] advances the simulation against an
//! injected monotonic timestamp: sidereal tracking while idle, a fixed
//! start delay after a slew command (actuator settle and ramp-up), then
//! constant-angular-speed great-circle motion until arrival.

use celestial::{normalize_ra_hours, slew_step, Equatorial, POLARIS};
use tracing::{debug, info};

/// Delay between a slew command and the start of motion, in milliseconds.
///
/// Models actuator settle/ramp-up latency.
pub const SLEW_START_DELAY_MS: u64 = 10_000;

/// Cadence of motion steps while slewing, in milliseconds.
pub const MOTION_STEP_INTERVAL_MS: u64 = 200;

/// Slew rate in degrees of arc per second.
pub const SLEW_RATE_DEG_PER_SEC: f64 = 2.0;

/// Maximum angular step per motion tick, in degrees.
pub const MAX_STEP_DEG: f64 = SLEW_RATE_DEG_PER_SEC * MOTION_STEP_INTERVAL_MS as f64 / 1000.0;

/// Cadence of sidereal tracking steps, in milliseconds.
pub const SIDEREAL_STEP_INTERVAL_MS: u64 = 1000;

/// Right ascension added per sidereal step, in hours (15 arcseconds of arc
/// per second, the sky's apparent rate).
pub const SIDEREAL_STEP_HOURS: f64 = 1.0 / 3600.0;

/// Mount phase; exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPhase {
    /// Idle, counteracting apparent sky rotation
    Tracking,
    /// Slew commanded, waiting out the start delay
    PendingSlew,
    /// Moving toward the target
    Slewing,
}

/// The simulated mount: pointing state, target, phase, and step timing.
///
/// `current` is mutated only here; the target is written through the
/// set-target entry points and read when motion steps toward it. All
/// timestamps are monotonic milliseconds supplied by the caller.
#[derive(Debug, Clone)]
pub struct Mount {
    current: Equatorial,
    target: Equatorial,
    phase: MountPhase,
    slew_issued_ms: u64,
    last_motion_ms: u64,
    last_sidereal_ms: u64,
}

impl Mount {
    /// Power-on state: parked on Polaris, target coincident, tracking.
    pub fn new() -> Self {
        Self {
            current: POLARIS,
            target: POLARIS,
            phase: MountPhase::Tracking,
            slew_issued_ms: 0,
            last_motion_ms: 0,
            last_sidereal_ms: 0,
        }
    }

    /// The simulated mount attitude.
    pub fn current(&self) -> Equatorial {
        self.current
    }

    /// The last commanded destination.
    pub fn target(&self) -> Equatorial {
        self.target
    }

    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    // ==================== Command Entry Points ====================

    /// Set the target right ascension, in hours.
    ///
    /// Wrapped into `[0, 24)` so that an arrival snap cannot plant an
    /// out-of-range RA in `current`.
    pub fn set_target_ra(&mut self, ra_hours: f64) {
        self.target.ra_hours = normalize_ra_hours(ra_hours);
    }

    /// Set the target declination, in degrees. Not range-checked; the
    /// protocol trusts the caller and the slew math tolerates the rest.
    pub fn set_target_dec(&mut self, dec_degrees: f64) {
        self.target.dec_degrees = dec_degrees;
    }

    /// Request a slew to the current target.
    ///
    /// Motion begins once [`SLEW_START_DELAY_MS`] has elapsed. Issuing a
    /// new request while a slew is pending or underway re-arms the delay.
    pub fn start_slew(&mut self, now_ms: u64) {
        info!(
            "slew requested: ra {:.4}h dec {:.4}deg",
            self.target.ra_hours, self.target.dec_degrees
        );
        self.phase = MountPhase::PendingSlew;
        self.slew_issued_ms = now_ms;
    }

    /// Adopt the target as the current position immediately (sync),
    /// bypassing the slew entirely.
    pub fn sync_to_target(&mut self) {
        self.current = self.target;
    }

    /// Abort any commanded motion and resume tracking. Idempotent.
    pub fn abort(&mut self, now_ms: u64) {
        if self.phase != MountPhase::Tracking {
            info!("slew aborted");
        }
        self.enter_tracking(now_ms);
    }

    // ==================== Scheduler Tick ====================

    /// Advance the simulation to `now_ms`.
    ///
    /// Call once per scheduler pass. Every step is O(1) apart from the
    /// sidereal catch-up, which applies one increment per full second
    /// elapsed since the previous pass.
    pub fn tick(&mut self, now_ms: u64) {
        match self.phase {
            MountPhase::Tracking => self.step_sidereal(now_ms),
            MountPhase::PendingSlew => {
                if now_ms.saturating_sub(self.slew_issued_ms) >= SLEW_START_DELAY_MS {
                    debug!("start delay elapsed, slewing");
                    self.phase = MountPhase::Slewing;
                    self.last_motion_ms = now_ms;
                }
            }
            MountPhase::Slewing => {
                if now_ms.saturating_sub(self.last_motion_ms) >= MOTION_STEP_INTERVAL_MS {
                    self.last_motion_ms = now_ms;
                    let (stepped, arrived) = slew_step(self.current, self.target, MAX_STEP_DEG);
                    self.current = stepped;
                    if arrived {
                        info!(
                            "target reached: ra {:.4}h dec {:.4}deg",
                            self.current.ra_hours, self.current.dec_degrees
                        );
                        self.enter_tracking(now_ms);
                    }
                }
            }
        }
    }

    fn enter_tracking(&mut self, now_ms: u64) {
        self.phase = MountPhase::Tracking;
        // Re-arm so the first sidereal step lands a full second from now
        self.last_sidereal_ms = now_ms;
    }

    fn step_sidereal(&mut self, now_ms: u64) {
        while now_ms.saturating_sub(self.last_sidereal_ms) >= SIDEREAL_STEP_INTERVAL_MS {
            self.last_sidereal_ms += SIDEREAL_STEP_INTERVAL_MS;
            self.current.ra_hours =
                normalize_ra_hours(self.current.ra_hours + SIDEREAL_STEP_HOURS);
        }
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}
