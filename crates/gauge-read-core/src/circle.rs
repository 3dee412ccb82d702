use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Bounding circle of a dial face, in integer pixel coordinates.
///
/// Invariant: `radius > 0` for any circle produced by the locator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl Circle {
    pub fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// Center as an image-space point.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.cx as f32, self.cy as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_converts_to_image_space() {
        let c = Circle::new(11, 9, 6);
        assert_eq!(c.center(), Point2::new(11.0, 9.0));
    }
}
