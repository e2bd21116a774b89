//! Parser for the QGroundControl `QGC WPL` waypoint text format.
//!
//! The first non-blank line is a header such as `QGC WPL 110`. Every following
//! non-blank line describes one waypoint as at least twelve whitespace-separated
//! fields:
//!
//! ```text
//! index  current  frame  command  param1  param2  param3  param4  lat  lon  alt  autocontinue
//! ```
//!
//! The index, current and frame columns are accepted but not interpreted. Sequence
//! numbers are assigned densely over accepted lines, so a mission always numbers
//! `0..n` regardless of what the file's own index column says. The command column
//! may be written as a decimal (`16.0`) and is truncated to an integer.

use std::str::FromStr;

use crate::server::{
    error::mission::MissionFormatError,
    model::waypoint::{ParsedMission, ParsedWaypoint},
};

const HEADER_MARKER: &str = "QGC WPL";
const MIN_FIELDS: usize = 12;

/// How the parser treats data lines it cannot use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip lines with fewer than twelve fields without consuming a sequence number.
    /// Numeric fields that are unparseable or not finite read as zero.
    #[default]
    Lenient,
    /// Reject the whole file at the first short line or bad numeric field.
    Strict,
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(s.to_string()),
        }
    }
}

/// Parses a waypoint file into an ordered mission for `drone_id`.
///
/// Invalid UTF-8 is replaced rather than rejected; line numbers in errors are 1-based
/// positions in `content`, counting blank lines.
///
/// # Arguments
/// - `content` - Raw file bytes
/// - `drone_id` - Drone every parsed waypoint is tagged with
/// - `source_file` - File name recorded as each waypoint's provenance
/// - `mode` - Treatment of short or unparseable data lines
///
/// # Returns
/// - `Ok(ParsedMission)` - Header version, waypoints in file order, skipped line count
/// - `Err(MissionFormatError::EmptyInput)` - Only blank lines
/// - `Err(MissionFormatError::BadHeader)` - First line is not `QGC WPL <version>`
/// - `Err(MissionFormatError::MalformedLine)` - Strict mode, line with fewer than 12 fields
/// - `Err(MissionFormatError::InvalidField)` - Strict mode, numeric field unparseable or not finite
pub fn parse_waypoint_file(
    content: &[u8],
    drone_id: i32,
    source_file: &str,
    mode: ParseMode,
) -> Result<ParsedMission, MissionFormatError> {
    let text = String::from_utf8_lossy(content);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_start_matches('\u{feff}').trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(MissionFormatError::EmptyInput)?;
    let format_version = parse_header(header)?;

    let mut waypoints = Vec::new();
    let mut skipped_lines = 0;

    for (line_number, line) in lines {
        let sequence_number = waypoints.len() as i32;

        match parse_line(line_number, line, sequence_number, drone_id, source_file, mode) {
            Ok(waypoint) => waypoints.push(waypoint),
            Err(err) if mode == ParseMode::Lenient => {
                tracing::warn!(
                    "Skipping waypoint line in {} for drone {}: {}",
                    source_file,
                    drone_id,
                    err
                );
                skipped_lines += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(ParsedMission {
        format_version,
        waypoints,
        skipped_lines,
    })
}

/// Extracts the version token from a `QGC WPL <version>` header.
fn parse_header(header: &str) -> Result<String, MissionFormatError> {
    header
        .strip_prefix(HEADER_MARKER)
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_string)
        .ok_or(MissionFormatError::BadHeader)
}

fn parse_line(
    line_number: usize,
    line: &str,
    sequence_number: i32,
    drone_id: i32,
    source_file: &str,
    mode: ParseMode,
) -> Result<ParsedWaypoint, MissionFormatError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(MissionFormatError::MalformedLine {
            line: line_number,
            fields: fields.len(),
        });
    }

    let field = |index: usize, name: &'static str| -> Result<f64, MissionFormatError> {
        parse_field(line_number, fields[index], name, mode)
    };

    Ok(ParsedWaypoint {
        drone_id,
        sequence_number,
        command: field(3, "command")?.trunc() as i32,
        param1: field(4, "param1")?,
        param2: field(5, "param2")?,
        param3: field(6, "param3")?,
        param4: field(7, "param4")?,
        latitude: field(8, "latitude")?,
        longitude: field(9, "longitude")?,
        altitude: field(10, "altitude")?,
        auto_continue: field(11, "autocontinue")? != 0.0,
        source_file: source_file.to_string(),
    })
}

/// Reads one numeric field. `nan` and `inf` count as invalid.
fn parse_field(
    line: usize,
    value: &str,
    field: &'static str,
    mode: ParseMode,
) -> Result<f64, MissionFormatError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ if mode == ParseMode::Lenient => {
            tracing::warn!(
                "Line {} has an invalid {} value '{}', reading it as 0",
                line,
                field,
                value
            );
            Ok(0.0)
        }
        _ => Err(MissionFormatError::InvalidField {
            line,
            field,
            value: value.to_string(),
        }),
    }
}
