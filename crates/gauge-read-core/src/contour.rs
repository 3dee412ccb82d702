use nalgebra::Point2;

/// Closed boundary of a connected region in an edge map.
///
/// Points are ordered along the boundary. The contour is immutable once
/// traced; area and centroid are derived on demand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    points: Vec<Point2<f32>>,
}

impl Contour {
    pub fn new(points: Vec<Point2<f32>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Absolute planar area enclosed by the boundary (shoelace formula).
    ///
    /// A degenerate boundary (fewer than three points, or a one-pixel-wide
    /// stroke traced on both sides) has near-zero area.
    pub fn area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let n = self.points.len();
        let mut acc = 0.0f32;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            acc += a.x * b.y - b.x * a.y;
        }
        0.5 * acc.abs()
    }

    /// Arithmetic mean of the boundary points.
    ///
    /// This is the point mean, not a moment centroid; for the small tick and
    /// needle contours the tracker cares about, the two coincide closely.
    pub fn centroid(&self) -> Option<Point2<f32>> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point2::new(sx / n, sy / n))
    }

    /// Total boundary length, closing the loop back to the first point.
    pub fn perimeter(&self) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let n = self.points.len();
        let mut acc = 0.0f32;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            acc += (b - a).norm();
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Contour {
        Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn unit_square_area_and_centroid() {
        let c = unit_square();
        assert_relative_eq!(c.area(), 1.0);
        let centroid = c.centroid().unwrap();
        assert_relative_eq!(centroid.x, 0.5);
        assert_relative_eq!(centroid.y, 0.5);
    }

    #[test]
    fn unit_square_perimeter() {
        assert_relative_eq!(unit_square().perimeter(), 4.0);
    }

    #[test]
    fn degenerate_boundaries_have_zero_area() {
        assert_eq!(Contour::default().area(), 0.0);
        let stroke = Contour::new(vec![Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)]);
        assert_eq!(stroke.area(), 0.0);
    }

    #[test]
    fn empty_contour_has_no_centroid() {
        assert!(Contour::default().centroid().is_none());
    }
}
