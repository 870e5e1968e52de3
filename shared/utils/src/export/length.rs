//! Length Resolver
//!
//! Module length comes from the generic length key, except for the angled
//! transfer module whose length is fixed by its alignment angle. Every angle
//! cell after the module row is tried; the generic key is the fallback when
//! none carries a known angle.

use conveyor_ledger_models::AttributeKey;

use super::lookup::{find_key, key_hits};
use super::parser::ParsedFile;

/// Module whose length is derived from the alignment angle.
pub const ANGLED_MODULE_CODE: &str = "AT-RM8320-E2";

/// Alignment angle in degrees to module length in millimeters.
const ANGLE_LENGTHS: [(i64, i64); 4] = [(30, 542), (45, 813), (60, 1084), (90, 1626)];

/// Resolve the length in millimeters for the module at `start_row`.
pub fn resolve_length(file: &ParsedFile, start_row: usize, module_code: &str) -> Option<i64> {
    if module_code == ANGLED_MODULE_CODE {
        let angled = key_hits(file, start_row, AttributeKey::AlignmentAngle.token())
            .filter_map(|hit| hit.adjacent)
            .filter_map(parse_integral)
            .find_map(length_for_angle);

        if angled.is_some() {
            return angled;
        }
    }

    find_key(file, start_row, AttributeKey::ModuleLength.token())
        .and_then(|hit| hit.adjacent)
        .and_then(parse_length)
}

pub fn length_for_angle(angle: i64) -> Option<i64> {
    ANGLE_LENGTHS
        .iter()
        .find(|(a, _)| *a == angle)
        .map(|(_, length)| *length)
}

/// Digits with at most one decimal point, truncated toward zero.
fn parse_length(raw: &str) -> Option<i64> {
    let value = raw.trim();
    let digits = value.replacen('.', "", 1);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<f64>().ok().map(|v| v.trunc() as i64)
}

/// Numeric text that holds a whole number, e.g. `45` or `45.0`.
fn parse_integral(raw: &str) -> Option<i64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0).then(|| value as i64)
}
