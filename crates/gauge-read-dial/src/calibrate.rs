use gauge_read_core::{encode_dial_angle, Calibration, Contour, DialSector};
use log::debug;
use nalgebra::Point2;

/// Scan small contours and tighten the calibration bounds.
///
/// Contours at or above `area_threshold` are ignored. A below-left centroid
/// is a candidate lower bound and only ever raises `min_angle`; a below-right
/// centroid is a candidate upper bound and only ever lowers `max_angle`.
/// Contours in the fallback sector leave the bounds alone, and so does an
/// empty scan: the initial calibration doubles as the answer for a gauge
/// with no detectable tick marks.
pub fn track_calibration(
    contours: &[Contour],
    center: Point2<f32>,
    area_threshold: f32,
    initial: Calibration,
) -> Calibration {
    let mut cal = initial;
    for contour in contours {
        if contour.area() >= area_threshold {
            continue;
        }
        let Some(centroid) = contour.centroid() else {
            continue;
        };
        let angle = encode_dial_angle(center, centroid);
        match angle.sector {
            DialSector::BelowLeft if angle.degrees > cal.min_angle => {
                cal.min_angle = angle.degrees;
            }
            DialSector::BelowRight if angle.degrees < cal.max_angle => {
                cal.max_angle = angle.degrees;
            }
            _ => {}
        }
    }
    debug!(
        "calibration bounds: {:.1}..{:.1} deg",
        cal.min_angle, cal.max_angle
    );
    cal
}
