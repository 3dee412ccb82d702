use gauge_read_core::Contour;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::edges::canny;
use imageproc::geometry::approximate_polygon_dp;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Zero-tolerance Douglas-Peucker pass: collapses collinear raster runs so
/// a boundary is a polyline over its corners, without moving any point.
const SIMPLIFY_EPSILON: f64 = 0.0;

/// Canny hysteresis thresholds for the contour pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EdgeParams {
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 20.0,
            high_threshold: 200.0,
        }
    }
}

/// Trace external contours of the Canny edge map.
///
/// Holes are not traced. No area filtering happens here: the calibration
/// tracker and the needle extractor each apply their own cutoff.
pub fn extract_contours(img: &GrayImage, params: &EdgeParams) -> Vec<Contour> {
    let edges = canny(img, params.low_threshold, params.high_threshold);
    find_contours::<u32>(&edges)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(|c| {
            let simplified = approximate_polygon_dp(&c.points, SIMPLIFY_EPSILON, true);
            Contour::new(
                simplified
                    .iter()
                    .map(|p| Point2::new(p.x as f32, p.y as f32))
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    #[test]
    fn blank_image_has_no_contours() {
        let img = GrayImage::from_pixel(64, 64, Luma([255u8]));
        assert!(extract_contours(&img, &EdgeParams::default()).is_empty());
    }

    #[test]
    fn dark_blob_traces_one_external_contour() {
        let mut img = GrayImage::from_pixel(64, 64, Luma([255u8]));
        draw_filled_rect_mut(&mut img, Rect::at(20, 20).of_size(12, 12), Luma([0u8]));

        let contours = extract_contours(&img, &EdgeParams::default());
        assert!(!contours.is_empty());

        // The outer boundary encloses the blob; its centroid sits inside it.
        let c = &contours[0];
        let centroid = c.centroid().unwrap();
        assert!(centroid.x > 18.0 && centroid.x < 34.0);
        assert!(centroid.y > 18.0 && centroid.y < 34.0);
    }
}
