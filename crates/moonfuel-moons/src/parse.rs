//! Reader for the `<x=-1, y=0, z=2>` moon listing.

use crate::error::MoonError;
use crate::system::Moon;
use crate::vector::{Axis, Vec3};

/// Largest coordinate magnitude accepted from a listing. Keeps pairwise
/// distances, velocities, and energy products far from i64 limits.
pub const MAX_COORDINATE: i64 = i32::MAX as i64;

/// Parse one moon per non-blank line. Velocities start at zero.
pub fn parse_moons(text: &str) -> Result<Vec<Moon>, MoonError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_position(line, i + 1).map(Moon::at_rest))
        .collect()
}

/// Parse a single `<x=.., y=.., z=..>` position. `line` is 1-based and only
/// used for error reporting.
pub fn parse_position(text: &str, line: usize) -> Result<Vec3, MoonError> {
    let err = |detail: String| MoonError::Parse { line, detail };

    let inner = text
        .trim()
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| err(format!("expected `<x=.., y=.., z=..>`, got `{}`", text.trim())))?;

    let mut parts = inner.split(',');
    let mut position = Vec3::ZERO;
    for axis in Axis::ALL {
        let part = parts
            .next()
            .ok_or_else(|| err(format!("missing {axis} coordinate")))?;
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| err(format!("expected `{axis}=<int>`, got `{}`", part.trim())))?;
        if key.trim() != axis.key() {
            return Err(err(format!(
                "expected key `{axis}`, got `{}`",
                key.trim()
            )));
        }
        let coordinate: i64 = value
            .trim()
            .parse()
            .map_err(|e| err(format!("bad {axis} coordinate `{}`: {e}", value.trim())))?;
        if coordinate.unsigned_abs() > MAX_COORDINATE.unsigned_abs() {
            return Err(err(format!(
                "{axis} coordinate {coordinate} is outside +/-{MAX_COORDINATE}"
            )));
        }
        position[axis] = coordinate;
    }

    if let Some(extra) = parts.next() {
        return Err(err(format!("unexpected trailing field `{}`", extra.trim())));
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sample_listing() {
        let moons = parse_moons("<x=-1, y=0, z=2>\n<x=2, y=-10, z=-7>\n").unwrap();
        assert_eq!(moons.len(), 2);
        assert_eq!(moons[0].position, Vec3::new(-1, 0, 2));
        assert_eq!(moons[1].position, Vec3::new(2, -10, -7));
        assert!(moons.iter().all(|m| m.velocity == Vec3::ZERO));
    }

    #[test]
    fn tolerates_whitespace_and_blank_lines() {
        let moons = parse_moons("\n  < x = 3 ,y=-4,  z=5 >  \n\n").unwrap();
        assert_eq!(moons.len(), 1);
        assert_eq!(moons[0].position, Vec3::new(3, -4, 5));
    }

    #[test]
    fn empty_input_has_no_moons() {
        assert!(parse_moons("").unwrap().is_empty());
    }

    #[test]
    fn missing_brackets_reports_line() {
        let err = parse_moons("<x=1, y=2, z=3>\nx=1, y=2, z=3").unwrap_err();
        match err {
            MoonError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse, got: {other:?}"),
        }
    }

    #[test]
    fn wrong_key_order_fails() {
        let err = parse_position("<y=1, x=2, z=3>", 1).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("expected key `x`"), "got: {msg}");
    }

    #[test]
    fn non_integer_coordinate_fails() {
        assert!(parse_position("<x=1.5, y=2, z=3>", 1).is_err());
    }

    #[test]
    fn missing_and_extra_fields_fail() {
        assert!(parse_position("<x=1, y=2>", 1).is_err());
        assert!(parse_position("<x=1, y=2, z=3, w=4>", 1).is_err());
    }

    #[test]
    fn coordinate_bound_is_inclusive() {
        let max = format!("<x={MAX_COORDINATE}, y=-{MAX_COORDINATE}, z=0>");
        assert_eq!(
            parse_position(&max, 1).unwrap(),
            Vec3::new(MAX_COORDINATE, -MAX_COORDINATE, 0)
        );
    }

    #[test]
    fn oversized_coordinates_fail() {
        let err = parse_moons(
            "<x=-5000000000000000000, y=0, z=0>\n<x=5000000000000000000, y=0, z=0>",
        )
        .unwrap_err();
        match err {
            MoonError::Parse { line, detail } => {
                assert_eq!(line, 1);
                assert!(detail.contains("outside"), "got: {detail}");
            }
            other => panic!("expected Parse, got: {other:?}"),
        }
        assert!(parse_position("<x=-9223372036854775808, y=0, z=0>", 3).is_err());
        assert!(parse_position("<x=0, y=0, z=2147483648>", 3).is_err());
    }
}
