use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Region of the dial face a target point falls into, as seen from the
/// center in image coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialSector {
    /// Below and left of the center: the start side of the sweep.
    BelowLeft,
    /// Below and right of the center: the end side of the sweep.
    BelowRight,
    /// Everything else: both upper quadrants and the horizontal axis.
    Upper,
}

/// A gauge-convention angle together with the sector that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialAngle {
    /// Angle in degrees, nominally in `[0, 360)`.
    pub degrees: f32,
    pub sector: DialSector,
}

/// Encode the position of `target` relative to `center` as a dial angle.
///
/// This is not the standard polar angle. The quadrants are remapped so that
/// angles increase clockwise from a reference near the start tick of a
/// bottom-anchored scale:
///
/// * below-left of the center maps to `90 - res`,
/// * below-right maps to `270 + res`,
/// * everywhere else returns `res` unmodified,
///
/// where `res = atan(|ylen| / |xlen|)` in degrees. The two upper quadrants
/// share the fallback branch and are therefore indistinguishable; a dial with
/// its sweep anchored at the bottom never places the needle there, so the
/// convention is kept as-is rather than extended.
///
/// A target straight above or below the center (`xlen == 0`) is a boundary
/// case of the arctangent; `res` is pinned to 90° and flows through the
/// fallback branch.
pub fn encode_dial_angle(center: Point2<f32>, target: Point2<f32>) -> DialAngle {
    let xlen = target.x - center.x;
    let ylen = center.y - target.y;

    let res = if xlen == 0.0 {
        90.0
    } else {
        (ylen.abs() / xlen.abs()).atan().to_degrees()
    };

    if xlen < 0.0 && ylen < 0.0 {
        DialAngle {
            degrees: 90.0 - res,
            sector: DialSector::BelowLeft,
        }
    } else if xlen > 0.0 && ylen < 0.0 {
        DialAngle {
            degrees: 270.0 + res,
            sector: DialSector::BelowRight,
        }
    } else {
        DialAngle {
            degrees: res,
            sector: DialSector::Upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f32 = 1e-4;

    fn origin() -> Point2<f32> {
        Point2::new(0.0, 0.0)
    }

    #[test]
    fn horizontal_targets_fall_into_the_fallback_branch() {
        let left = encode_dial_angle(origin(), Point2::new(-1.0, 0.0));
        assert_eq!(left.sector, DialSector::Upper);
        assert_relative_eq!(left.degrees, 0.0, epsilon = EPS);

        let right = encode_dial_angle(origin(), Point2::new(1.0, 0.0));
        assert_eq!(right.sector, DialSector::Upper);
        assert_relative_eq!(right.degrees, 0.0, epsilon = EPS);
    }

    #[test]
    fn below_left_diagonal_maps_to_45() {
        // Image coordinates: y grows downward, so (-1, 1) is below-left.
        let a = encode_dial_angle(origin(), Point2::new(-1.0, 1.0));
        assert_eq!(a.sector, DialSector::BelowLeft);
        assert_relative_eq!(a.degrees, 45.0, epsilon = EPS);
    }

    #[test]
    fn below_right_diagonal_maps_to_315() {
        let a = encode_dial_angle(origin(), Point2::new(1.0, 1.0));
        assert_eq!(a.sector, DialSector::BelowRight);
        assert_relative_eq!(a.degrees, 315.0, epsilon = EPS);
    }

    #[test]
    fn upper_quadrants_share_the_fallback_branch() {
        let up_left = encode_dial_angle(origin(), Point2::new(-1.0, -1.0));
        let up_right = encode_dial_angle(origin(), Point2::new(1.0, -1.0));
        assert_eq!(up_left.sector, DialSector::Upper);
        assert_eq!(up_right.sector, DialSector::Upper);
        // The convention does not distinguish the two.
        assert_relative_eq!(up_left.degrees, up_right.degrees, epsilon = EPS);
        assert_relative_eq!(up_left.degrees, 45.0, epsilon = EPS);
    }

    #[test]
    fn vertical_targets_resolve_to_90() {
        let above = encode_dial_angle(origin(), Point2::new(0.0, -3.0));
        assert_eq!(above.sector, DialSector::Upper);
        assert_relative_eq!(above.degrees, 90.0, epsilon = EPS);

        let below = encode_dial_angle(origin(), Point2::new(0.0, 3.0));
        assert_eq!(below.sector, DialSector::Upper);
        assert_relative_eq!(below.degrees, 90.0, epsilon = EPS);
    }

    #[test]
    fn offset_center_matches_translated_origin() {
        let a = encode_dial_angle(Point2::new(100.0, 100.0), Point2::new(80.0, 120.0));
        let b = encode_dial_angle(origin(), Point2::new(-20.0, 20.0));
        assert_eq!(a.sector, b.sector);
        assert_relative_eq!(a.degrees, b.degrees, epsilon = EPS);
    }
}
