use serde::{Deserialize, Serialize};

/// Angular positions of the gauge's printed scale extremes, in the dial
/// angle convention of [`crate::encode_dial_angle`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub min_angle: f32,
    pub max_angle: f32,
}

impl Calibration {
    pub fn new(min_angle: f32, max_angle: f32) -> Self {
        Self {
            min_angle,
            max_angle,
        }
    }

    /// Angular width of the sweep.
    #[inline]
    pub fn span(&self) -> f32 {
        self.max_angle - self.min_angle
    }

    /// A zero-span calibration makes the value map undefined.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }
}

impl Default for Calibration {
    /// Standard half-turn sweep: start tick at 90°, end tick at 270°.
    fn default() -> Self {
        Self {
            min_angle: 90.0,
            max_angle: 270.0,
        }
    }
}

/// Caller-supplied physical scale endpoints of the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

/// Errors from the angle-to-value scale map.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ScaleError {
    #[error("degenerate calibration: min and max angle coincide at {angle} degrees")]
    DegenerateCalibration { angle: f32 },
}

/// Linearly interpolate a measured dial angle into the caller's value range.
///
/// The map is affine and order-preserving for a positive angular span:
/// `angle == min_angle` yields exactly `range.min` and `angle == max_angle`
/// yields exactly `range.max`. A zero angular span fails with
/// [`ScaleError::DegenerateCalibration`]; a zero *value* span is allowed and
/// collapses every reading to `range.min`.
pub fn map_angle_to_value(
    angle: f32,
    calibration: Calibration,
    range: ValueRange,
) -> Result<f32, ScaleError> {
    let old_range = calibration.span();
    if old_range == 0.0 {
        return Err(ScaleError::DegenerateCalibration {
            angle: calibration.min_angle,
        });
    }
    let new_range = range.span();
    Ok((angle - calibration.min_angle) * new_range / old_range + range.min)
}
