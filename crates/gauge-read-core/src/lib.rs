//! Core geometry and scale types for analog gauge reading.
//!
//! This crate is intentionally small and purely geometric: the circle and
//! contour primitives, the gauge-convention angle codec, and the linear
//! angle-to-value scale map. It does *not* depend on any image type or
//! concrete detector.

mod angle;
mod circle;
mod contour;
mod logger;
mod scale;

pub use angle::{encode_dial_angle, DialAngle, DialSector};
pub use circle::Circle;
pub use contour::Contour;
pub use scale::{map_angle_to_value, Calibration, ScaleError, ValueRange};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
