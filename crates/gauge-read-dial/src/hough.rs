use gauge_read_core::Circle;
use image::GrayImage;
use imageproc::edges::canny;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Parameters of the circular Hough transform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HoughCircleParams {
    /// Accumulator cell size in pixels (1 = one cell per pixel).
    pub accumulator_resolution: f32,
    /// Minimum distance between accepted circle centers, in pixels.
    pub min_center_distance: f32,
    /// Upper hysteresis threshold of the edge pass; the lower threshold is
    /// half of it.
    pub edge_threshold: f32,
    /// Minimum accumulator votes for a center candidate.
    pub min_votes: u32,
    /// Radius search band as fractions of the image height. A dial face
    /// photographed for reading fills roughly the frame, hence the tight
    /// default band.
    pub min_radius_frac: f32,
    pub max_radius_frac: f32,
}

impl Default for HoughCircleParams {
    fn default() -> Self {
        Self {
            accumulator_resolution: 1.0,
            min_center_distance: 20.0,
            edge_threshold: 100.0,
            min_votes: 50,
            min_radius_frac: 0.35,
            max_radius_frac: 0.50,
        }
    }
}

/// One circle candidate voted up by the transform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HoughCircle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub votes: u32,
}

/// 3x3 Sobel pair at one pixel, clamping at the image border.
fn sobel_at(img: &GrayImage, x: u32, y: u32) -> (f32, f32) {
    let (w, h) = img.dimensions();
    let px = |dx: i64, dy: i64| -> i64 {
        let sx = (x as i64 + dx).clamp(0, w as i64 - 1);
        let sy = (y as i64 + dy).clamp(0, h as i64 - 1);
        img.get_pixel(sx as u32, sy as u32)[0] as i64
    };
    let gx = px(1, -1) + 2 * px(1, 0) + px(1, 1) - px(-1, -1) - 2 * px(-1, 0) - px(-1, 1);
    let gy = px(-1, 1) + 2 * px(0, 1) + px(1, 1) - px(-1, -1) - 2 * px(0, -1) - px(1, -1);
    (gx as f32, gy as f32)
}

/// Gradient-guided circular Hough transform.
///
/// Every Canny edge pixel votes along its Sobel gradient direction, both
/// ways, for every radius in the search band. Center candidates are accepted
/// greedily in vote order subject to `min_center_distance`; each accepted
/// center then gets the modal edge-pixel distance within the band as its
/// radius. Candidates are returned in descending vote order.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_circles(img: &GrayImage, params: &HoughCircleParams) -> Vec<HoughCircle> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let min_radius = (height as f32 * params.min_radius_frac).round().max(1.0) as i64;
    let max_radius = (height as f32 * params.max_radius_frac).round() as i64;
    if max_radius < min_radius {
        return Vec::new();
    }

    let edges = canny(img, 0.5 * params.edge_threshold, params.edge_threshold);

    let dp = params.accumulator_resolution.max(1.0);
    let acc_w = (width as f32 / dp).ceil() as usize;
    let acc_h = (height as f32 / dp).ceil() as usize;
    let mut acc = vec![0u32; acc_w * acc_h];
    let mut edge_points: Vec<(f32, f32)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if edges.get_pixel(x, y)[0] == 0 {
                continue;
            }
            edge_points.push((x as f32, y as f32));

            let (dx, dy) = sobel_at(img, x, y);
            let mag = (dx * dx + dy * dy).sqrt();
            if mag < 1.0 {
                // Edge without a usable orientation; it still participates
                // in radius estimation above.
                continue;
            }
            let ux = dx / mag;
            let uy = dy / mag;

            // The gradient points across the rim but its sign depends on
            // which side is brighter, so vote both ways.
            for dir in [-1.0f32, 1.0] {
                for r in min_radius..=max_radius {
                    let cx = x as f32 + dir * ux * r as f32;
                    let cy = y as f32 + dir * uy * r as f32;
                    let ax = (cx / dp).round();
                    let ay = (cy / dp).round();
                    if ax < 0.0 || ay < 0.0 || ax >= acc_w as f32 || ay >= acc_h as f32 {
                        continue;
                    }
                    acc[ay as usize * acc_w + ax as usize] += 1;
                }
            }
        }
    }

    let mut bins: Vec<(u32, usize, usize)> = acc
        .iter()
        .enumerate()
        .filter(|&(_, &votes)| votes >= params.min_votes)
        .map(|(idx, &votes)| (votes, idx % acc_w, idx / acc_w))
        .collect();
    bins.sort_by(|a, b| b.0.cmp(&a.0));

    let min_dist_sq = params.min_center_distance * params.min_center_distance;
    let mut centers: Vec<(f32, f32, u32)> = Vec::new();
    for (votes, bx, by) in bins {
        let cx = bx as f32 * dp;
        let cy = by as f32 * dp;
        let separated = centers.iter().all(|&(ox, oy, _)| {
            let ddx = cx - ox;
            let ddy = cy - oy;
            ddx * ddx + ddy * ddy >= min_dist_sq
        });
        if separated {
            centers.push((cx, cy, votes));
        }
    }

    let radius_bins = (max_radius - min_radius + 1) as usize;
    let mut out = Vec::new();
    for (cx, cy, votes) in centers {
        let mut hist = vec![0u32; radius_bins];
        for &(px, py) in &edge_points {
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt().round() as i64;
            if d >= min_radius && d <= max_radius {
                hist[(d - min_radius) as usize] += 1;
            }
        }
        let (best_bin, &support) = match hist.iter().enumerate().max_by_key(|&(_, &c)| c) {
            Some(best) => best,
            None => continue,
        };
        if support == 0 {
            continue;
        }
        out.push(HoughCircle {
            cx,
            cy,
            radius: (min_radius + best_bin as i64) as f32,
            votes,
        });
    }

    out
}

/// Average all candidates into a single circle, truncating each component
/// to integer pixel coordinates.
///
/// Near-duplicate detections around the true dial edge are common and
/// cluster tightly; the per-component mean de-duplicates them. Two genuinely
/// distinct circles average to a wrong answer, which the single-dial
/// assumption accepts.
pub fn average_candidates(candidates: &[HoughCircle]) -> Option<Circle> {
    if candidates.is_empty() {
        return None;
    }
    let n = candidates.len() as f32;
    let (sx, sy, sr) = candidates.iter().fold((0.0f32, 0.0f32, 0.0f32), |acc, c| {
        (acc.0 + c.cx, acc.1 + c.cy, acc.2 + c.radius)
    });
    Some(Circle::new(
        (sx / n) as i32,
        (sy / n) as i32,
        (sr / n) as i32,
    ))
}
