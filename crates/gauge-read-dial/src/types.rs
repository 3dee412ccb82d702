use gauge_read_core::{Calibration, Circle};
use serde::{Deserialize, Serialize};

use crate::edges::EdgeParams;
use crate::hough::HoughCircleParams;
use crate::needle::NeedleSelection;

/// Parameters for a full dial read.
///
/// Every threshold the pipeline uses lives here, with the stock constants as
/// defaults, so callers working at a different image resolution can re-tune
/// without code changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DialReaderParams {
    #[serde(default)]
    pub hough: HoughCircleParams,
    #[serde(default)]
    pub edges: EdgeParams,
    /// Contours at or above this area (px²) are treated as rim or numeral
    /// geometry and ignored by both the calibration tracker and the needle
    /// extractor. Not adaptive to resolution.
    #[serde(default = "default_area_threshold")]
    pub area_threshold: f32,
    /// Bounds the tracker starts from; returned verbatim when no tick
    /// contour tightens them.
    #[serde(default)]
    pub initial_calibration: Calibration,
    #[serde(default)]
    pub needle: NeedleSelection,
}

fn default_area_threshold() -> f32 {
    15.0
}

impl Default for DialReaderParams {
    fn default() -> Self {
        Self {
            hough: HoughCircleParams::default(),
            edges: EdgeParams::default(),
            area_threshold: default_area_threshold(),
            initial_calibration: Calibration::default(),
            needle: NeedleSelection::default(),
        }
    }
}

/// Result of a dial read.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DialReading {
    /// Interpolated gauge value.
    pub value: f32,
    /// Needle angle in the dial convention.
    pub needle_angle: f32,
    /// Calibration the value was mapped against.
    pub calibration: Calibration,
    /// Dial face located by the circle transform.
    pub circle: Circle,
}
