//! End-to-end goto scenarios: commands in, responses out, time stepped by
//! hand through the mount's tick entry point.

use approx::assert_relative_eq;
use emulator::mount::{
    MOTION_STEP_INTERVAL_MS, SIDEREAL_STEP_HOURS, SLEW_START_DELAY_MS,
};
use emulator::{CommandProcessor, Mount, MountPhase, StatusIndicator};

fn submit_line(
    processor: &mut CommandProcessor,
    mount: &mut Mount,
    now_ms: u64,
    line: &str,
) -> String {
    let mut out = Vec::new();
    for byte in line.bytes() {
        if let Some(bytes) = processor.submit(byte, now_ms, mount) {
            out.extend(bytes);
        }
    }
    String::from_utf8(out).unwrap()
}

/// Run motion ticks until the mount returns to tracking, with a step
/// bound generous enough for any same-sky slew.
fn tick_until_tracking(mount: &mut Mount, mut now_ms: u64) -> u64 {
    for _ in 0..5000 {
        if mount.phase() == MountPhase::Tracking {
            return now_ms;
        }
        now_ms += MOTION_STEP_INTERVAL_MS;
        mount.tick(now_ms);
    }
    panic!("mount did not reach the target");
}

#[test]
fn test_full_goto_sequence() {
    let mut mount = Mount::new();
    let mut processor = CommandProcessor::new();

    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":Sr10:00:00#"), "1#");
    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":Sd+45*00:00#"), "1#");
    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":MS#"), "0#");
    assert_eq!(mount.phase(), MountPhase::PendingSlew);

    // Start delay holds the mount still
    mount.tick(SLEW_START_DELAY_MS - 1);
    assert_eq!(mount.phase(), MountPhase::PendingSlew);
    mount.tick(SLEW_START_DELAY_MS);
    assert_eq!(mount.phase(), MountPhase::Slewing);

    tick_until_tracking(&mut mount, SLEW_START_DELAY_MS);
    assert_relative_eq!(mount.current().ra_hours, 10.0, epsilon = 1e-9);
    assert_relative_eq!(mount.current().dec_degrees, 45.0, epsilon = 1e-9);
}

#[test]
fn test_abort_stops_slew_short_of_target() {
    let mut mount = Mount::new();
    let mut processor = CommandProcessor::new();

    submit_line(&mut processor, &mut mount, 0, ":Sr10:00:00#:Sd+45*00:00#:MS#");
    mount.tick(SLEW_START_DELAY_MS);
    let mut now = SLEW_START_DELAY_MS;
    for _ in 0..10 {
        now += MOTION_STEP_INTERVAL_MS;
        mount.tick(now);
    }
    assert_eq!(mount.phase(), MountPhase::Slewing);

    assert_eq!(submit_line(&mut processor, &mut mount, now, ":Q#"), "#");
    assert_eq!(mount.phase(), MountPhase::Tracking);

    // Well short of the target, and no further motion steps
    let stopped = mount.current();
    assert!(stopped.separation_degrees(&mount.target()) > 1.0);
    mount.tick(now + MOTION_STEP_INTERVAL_MS);
    assert_eq!(mount.current().ra_hours, stopped.ra_hours);
    assert_eq!(mount.current().dec_degrees, stopped.dec_degrees);
}

#[test]
fn test_position_reports_at_power_on() {
    let mut mount = Mount::new();
    let mut processor = CommandProcessor::new();

    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":GR#"), "02:31:49#");
    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":GD#"), "+89*15:51#");
}

#[test]
fn test_sidereal_tracking_advances_and_wraps() {
    let mut mount = Mount::new();
    let mut processor = CommandProcessor::new();

    // Park just under the 24h wrap via sync
    submit_line(&mut processor, &mut mount, 0, ":Sr23:59:59#:Sd+10*00:00#:CM#");
    let start_ra = mount.current().ra_hours;

    mount.tick(1000);
    assert_relative_eq!(
        mount.current().ra_hours,
        (start_ra + SIDEREAL_STEP_HOURS).rem_euclid(24.0),
        epsilon = 1e-9
    );

    mount.tick(3000);
    let expected = (start_ra + 3.0 * SIDEREAL_STEP_HOURS).rem_euclid(24.0);
    assert!((0.0..24.0).contains(&mount.current().ra_hours));
    assert_relative_eq!(mount.current().ra_hours, expected, epsilon = 1e-9);
}

#[test]
fn test_sync_bypasses_slew_and_repeats_cleanly() {
    let mut mount = Mount::new();
    let mut processor = CommandProcessor::new();

    submit_line(&mut processor, &mut mount, 0, ":Sr05:15:30#:Sd-20*45:10#");
    let first = submit_line(&mut processor, &mut mount, 0, ":CM#");
    assert!(first.ends_with('#'));
    assert_eq!(mount.phase(), MountPhase::Tracking);

    let after_first = mount.current();
    submit_line(&mut processor, &mut mount, 0, ":CM#");
    assert_eq!(mount.current().ra_hours, after_first.ra_hours);
    assert_eq!(mount.current().dec_degrees, after_first.dec_degrees);

    // Reported position matches what was synced, to formatting precision
    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":GR#"), "05:15:30#");
    assert_eq!(submit_line(&mut processor, &mut mount, 0, ":GD#"), "-20*45:10#");
}

#[test]
fn test_indicator_follows_phases_through_a_goto() {
    let mut mount = Mount::new();
    let mut processor = CommandProcessor::new();
    let mut indicator = StatusIndicator::new();

    assert!(indicator.update(mount.phase(), 0));

    submit_line(&mut processor, &mut mount, 0, ":Sr10:00:00#:Sd+45*00:00#:MS#");
    // Pending: slow blink toggles after a full second
    assert!(indicator.update(mount.phase(), 500));
    assert!(!indicator.update(mount.phase(), 1000));

    mount.tick(SLEW_START_DELAY_MS);
    // Slewing: fast blink toggles within 300 ms
    assert!(indicator.update(mount.phase(), SLEW_START_DELAY_MS + 300));

    let arrived_at = tick_until_tracking(&mut mount, SLEW_START_DELAY_MS);
    assert!(indicator.update(mount.phase(), arrived_at));
}
