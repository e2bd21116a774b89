//! Waypoint file payloads in the `QGC WPL 110` text format.
//!
//! Each data line carries twelve tab-separated fields:
//! index, current, frame, command, param1..param4, latitude, longitude, altitude,
//! autocontinue.

/// Header line accepted by the mission parser.
pub const HEADER: &str = "QGC WPL 110";

/// Formats one data line with the given command and position.
pub fn line(index: u32, command: i32, latitude: f64, longitude: f64, altitude: f64) -> String {
    format!(
        "{}\t0\t3\t{}\t0\t0\t0\t0\t{}\t{}\t{}\t1",
        index, command, latitude, longitude, altitude
    )
}

/// Builds a complete waypoint file from data lines.
pub fn file(lines: &[String]) -> String {
    let mut out = String::from(HEADER);
    for l in lines {
        out.push('\n');
        out.push_str(l);
    }
    out.push('\n');
    out
}

/// Three waypoints walking east along the equator, one degree apart.
pub fn three_waypoints() -> String {
    file(&[
        line(0, 16, 0.0, 0.0, 50.0),
        line(1, 16, 0.0, 1.0, 50.0),
        line(2, 16, 0.0, 2.0, 50.0),
    ])
}

/// Two good lines with a short five-field line between them.
pub fn with_short_line() -> String {
    file(&[
        line(0, 16, 0.0, 0.0, 50.0),
        "1\t0\t3\t16\t0".to_string(),
        line(2, 16, 0.0, 1.0, 50.0),
    ])
}
