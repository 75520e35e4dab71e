//! Equatorial pointing directions and unit-vector conversions.
//!
//! Right ascension is kept in hours, declination in degrees. Conversions
//! to Cartesian coordinates place the +z axis at the north celestial pole
//! and the +x axis at RA 0h on the celestial equator.

use nalgebra::Vector3;

/// Degrees of arc per hour of right ascension.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Park direction at power-on: Polaris.
pub const POLARIS: Equatorial = Equatorial {
    ra_hours: 2.5303,
    dec_degrees: 89.2642,
};

/// A pointing direction on the celestial sphere.
///
/// `ra_hours` is normalized into `[0, 24)` by [`Equatorial::new`] and by
/// every conversion in this crate. `dec_degrees` is carried as given; the
/// protocol trusts the caller to supply a declination in `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension in hours
    pub ra_hours: f64,
    /// Declination in degrees
    pub dec_degrees: f64,
}

impl Equatorial {
    /// Create a direction, wrapping the right ascension into `[0, 24)`.
    pub fn new(ra_hours: f64, dec_degrees: f64) -> Self {
        Self {
            ra_hours: normalize_ra_hours(ra_hours),
            dec_degrees,
        }
    }

    /// Convert to a Cartesian unit vector.
    pub fn unit_vector(&self) -> Vector3<f64> {
        let ra_rad = (self.ra_hours * DEGREES_PER_HOUR).to_radians();
        let dec_rad = self.dec_degrees.to_radians();
        Vector3::new(
            dec_rad.cos() * ra_rad.cos(),
            dec_rad.cos() * ra_rad.sin(),
            dec_rad.sin(),
        )
    }

    /// Recover a direction from a Cartesian unit vector.
    ///
    /// The input must already be unit length. `z` is clamped before the
    /// arcsine so accumulated rounding cannot push it past the poles; at a
    /// pole the azimuth is ill-defined and `atan2` picks an arbitrary but
    /// finite right ascension.
    pub fn from_unit_vector(v: Vector3<f64>) -> Self {
        let dec_degrees = v.z.clamp(-1.0, 1.0).asin().to_degrees();
        let ra_hours = normalize_ra_hours(v.y.atan2(v.x).to_degrees() / DEGREES_PER_HOUR);
        Self {
            ra_hours,
            dec_degrees,
        }
    }

    /// Great-circle separation to another direction, in degrees.
    ///
    /// The dot product is clamped to `[-1, 1]` before the inverse cosine to
    /// guard against floating-point overshoot at near-identical or
    /// antipodal directions.
    pub fn separation_degrees(&self, other: &Equatorial) -> f64 {
        let dot = self.unit_vector().dot(&other.unit_vector()).clamp(-1.0, 1.0);
        dot.acos().to_degrees()
    }
}

/// Wrap an hour angle into `[0, 24)`.
///
/// # Example
///
/// ```
/// use celestial::normalize_ra_hours;
///
/// assert_eq!(normalize_ra_hours(24.5), 0.5);
/// assert_eq!(normalize_ra_hours(-1.0), 23.0);
/// ```
pub fn normalize_ra_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    // rem_euclid of a tiny negative value can round up to the modulus itself
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}
