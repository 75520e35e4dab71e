//! Great-circle slew stepping.
//!
//! Advances a pointing direction toward a target by a bounded angular step
//! along the shortest path on the sphere. The step blends the two unit
//! vectors linearly and renormalizes the result; the blend is a
//! first-order approximation of spherical interpolation, and the
//! renormalization is what keeps the direction on the sphere over many
//! steps.

use crate::equatorial::Equatorial;

/// Separation below which a step snaps exactly onto the target, in degrees.
///
/// Prevents infinite micro-stepping and jitter at the destination.
pub const ARRIVAL_THRESHOLD_DEG: f64 = 0.05;

/// Advance `current` toward `target` by at most `max_step_degrees` of arc.
///
/// Returns the stepped direction and whether the target has been reached.
/// On arrival the returned direction is exactly `target`, so repeated
/// stepping settles rather than oscillating.
///
/// Never produces NaN for finite inputs: the dot product is clamped before
/// the inverse cosine, near-coincident directions take the arrival
/// short-circuit, and a degenerate blend (exactly antipodal inputs with a
/// half-separation step) falls back to finishing the move.
///
/// # Example
///
/// ```
/// use celestial::{slew_step, Equatorial};
///
/// let start = Equatorial::new(0.0, 0.0);
/// let target = Equatorial::new(6.0, 0.0);
/// let (stepped, arrived) = slew_step(start, target, 0.4);
/// assert!(!arrived);
/// assert!(stepped.separation_degrees(&target) < start.separation_degrees(&target));
/// ```
pub fn slew_step(
    current: Equatorial,
    target: Equatorial,
    max_step_degrees: f64,
) -> (Equatorial, bool) {
    let from = current.unit_vector();
    let to = target.unit_vector();

    let separation_rad = from.dot(&to).clamp(-1.0, 1.0).acos();
    if separation_rad.to_degrees() < ARRIVAL_THRESHOLD_DEG {
        return (target, true);
    }

    let fraction = (max_step_degrees.to_radians() / separation_rad).min(1.0);
    match from.lerp(&to, fraction).try_normalize(f64::EPSILON) {
        Some(stepped) => (Equatorial::from_unit_vector(stepped), false),
        // Antipodal blend collapses to the zero vector; no great circle is
        // preferred over another, so finish the move
        None => (target, true),
    }
}
