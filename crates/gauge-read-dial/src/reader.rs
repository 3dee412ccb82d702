use gauge_read_core::{map_angle_to_value, ValueRange};
use image::GrayImage;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::calibrate::track_calibration;
use crate::edges::extract_contours;
use crate::error::DialReadError;
use crate::hough::{average_candidates, detect_circles};
use crate::needle::needle_angle;
use crate::types::{DialReaderParams, DialReading};

/// Full gauge reading pipeline over a grayscale image.
///
/// The pipeline is synchronous and stateless across reads: each call owns
/// its intermediates and nothing is shared between invocations.
pub struct DialReader {
    params: DialReaderParams,
}

impl DialReader {
    pub fn new(params: DialReaderParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &DialReaderParams {
        &self.params
    }

    /// Read the gauge: locate the dial face, trace contours, calibrate the
    /// sweep, extract the needle angle, and map it into `range`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, img), fields(width = img.width(), height = img.height()))
    )]
    pub fn read(&self, img: &GrayImage, range: ValueRange) -> Result<DialReading, DialReadError> {
        let candidates = detect_circles(img, &self.params.hough);
        let circle = average_candidates(&candidates).ok_or(DialReadError::NoCircleDetected)?;
        debug!(
            "dial face at ({}, {}), radius {} (averaged over {} candidates)",
            circle.cx,
            circle.cy,
            circle.radius,
            candidates.len()
        );

        let contours = extract_contours(img, &self.params.edges);
        debug!("traced {} external contours", contours.len());

        let center = circle.center();
        let calibration = track_calibration(
            &contours,
            center,
            self.params.area_threshold,
            self.params.initial_calibration,
        );
        let needle = needle_angle(&contours, center, self.params.area_threshold, self.params.needle);
        let value = map_angle_to_value(needle, calibration, range)?;

        Ok(DialReading {
            value,
            needle_angle: needle,
            calibration,
            circle,
        })
    }
}

impl Default for DialReader {
    fn default() -> Self {
        Self::new(DialReaderParams::default())
    }
}
