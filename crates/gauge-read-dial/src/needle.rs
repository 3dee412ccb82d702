use gauge_read_core::{encode_dial_angle, Contour};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Strategy for picking the needle among the small contours.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedleSelection {
    /// First qualifying contour in enumeration order.
    ///
    /// Historical behavior. It does not distinguish the needle from a tick
    /// mark by shape, length, or position, which makes it fragile on busy
    /// dial faces with many small features.
    #[default]
    FirstQualifying,
    /// Qualifying contour with the greatest perimeter. The needle silhouette
    /// is usually the longest thin feature on the face.
    LongestContour,
}

/// Dial angle of the needle contour, or 0 when no contour qualifies.
///
/// Only contours below `area_threshold` are considered; the selected
/// contour's centroid is encoded relative to `center`.
pub fn needle_angle(
    contours: &[Contour],
    center: Point2<f32>,
    area_threshold: f32,
    selection: NeedleSelection,
) -> f32 {
    let mut qualifying = contours
        .iter()
        .filter(|c| !c.is_empty() && c.area() < area_threshold);

    let picked = match selection {
        NeedleSelection::FirstQualifying => qualifying.next(),
        NeedleSelection::LongestContour => qualifying.max_by(|a, b| {
            a.perimeter()
                .partial_cmp(&b.perimeter())
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    };

    picked
        .and_then(|c| c.centroid())
        .map(|centroid| encode_dial_angle(center, centroid).degrees)
        .unwrap_or(0.0)
}
