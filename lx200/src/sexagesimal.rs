//! Sexagesimal text forms for right ascension and declination.
//!
//! Formatting truncates toward zero at whole seconds. Parsing is lenient:
//! a numeric field that fails to parse is read as zero and the rest of the
//! value is still assembled. Embedded LX200 firmware never rejects input,
//! and clients depend on that.

/// Format right ascension hours as `HH:MM:SS`.
///
/// # Example
///
/// ```
/// use lx200::format_ra;
///
/// assert_eq!(format_ra(10.0), "10:00:00");
/// assert_eq!(format_ra(2.5303), "02:31:49");
/// ```
pub fn format_ra(ra_hours: f64) -> String {
    let total_seconds = whole_seconds(ra_hours);
    format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}

/// Format declination degrees as `sDD*MM:SS` with an explicit sign.
///
/// # Example
///
/// ```
/// use lx200::format_dec;
///
/// assert_eq!(format_dec(45.0), "+45*00:00");
/// assert_eq!(format_dec(-0.5), "-00*30:00");
/// ```
pub fn format_dec(dec_degrees: f64) -> String {
    let sign = if dec_degrees < 0.0 { '-' } else { '+' };
    let total_seconds = whole_seconds(dec_degrees.abs());
    format!(
        "{}{:02}*{:02}:{:02}",
        sign,
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}

/// Parse `HH:MM:SS` right ascension text into hours.
///
/// Three integers split on `:`; missing or malformed fields are read as
/// zero.
pub fn parse_ra(text: &str) -> f64 {
    let mut fields = text.trim().splitn(3, ':');
    let hours = next_field(&mut fields);
    let minutes = next_field(&mut fields);
    let seconds = next_field(&mut fields);
    hours + minutes / 60.0 + seconds / 3600.0
}

/// Parse `sDD*MM:SS` declination text into degrees.
///
/// The leading sign is optional; degrees split from the rest on `*`,
/// minutes from seconds on `:`. Missing or malformed fields are read as
/// zero.
pub fn parse_dec(text: &str) -> f64 {
    let text = text.trim();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    let (degrees_text, rest) = rest.split_once('*').unwrap_or((rest, ""));
    let (minutes_text, seconds_text) = rest.split_once(':').unwrap_or((rest, ""));

    let magnitude = parse_field(degrees_text)
        + parse_field(minutes_text) / 60.0
        + parse_field(seconds_text) / 3600.0;
    sign * magnitude
}

// Truncate to whole seconds. The nudge absorbs representation error so a
// value assembled from exact sexagesimal fields cannot truncate one second
// low; it is far below the protocol's resolution.
fn whole_seconds(value: f64) -> u64 {
    (value * 3600.0 + 1e-6) as u64
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>) -> f64 {
    fields.next().map_or(0.0, parse_field)
}

fn parse_field(text: &str) -> f64 {
    text.trim().parse::<i64>().map_or(0.0, |v| v as f64)
}
