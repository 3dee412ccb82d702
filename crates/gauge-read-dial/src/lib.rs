//! Analog dial gauge reading pipeline.
//!
//! The pipeline reads the value indicated by the needle of an analog dial
//! gauge from a single grayscale image, given the gauge's numeric range:
//!
//! 1. locate the dial's bounding circle with a circular Hough transform
//!    ([`detect_circles`] + [`average_candidates`]),
//! 2. trace external contours of the Canny edge map ([`extract_contours`]),
//! 3. tighten the angular calibration from small tick contours
//!    ([`track_calibration`]),
//! 4. extract the needle angle under a selection policy ([`needle_angle`]),
//! 5. map the angle into the caller's value range.
//!
//! [`DialReader`] wires the stages together; every threshold it uses is a
//! field of [`DialReaderParams`] with the stock constants as defaults.

mod calibrate;
mod edges;
mod error;
mod hough;
mod needle;
mod reader;
mod types;

pub use calibrate::track_calibration;
pub use edges::{extract_contours, EdgeParams};
pub use error::DialReadError;
pub use hough::{average_candidates, detect_circles, HoughCircle, HoughCircleParams};
pub use needle::{needle_angle, NeedleSelection};
pub use reader::DialReader;
pub use types::{DialReaderParams, DialReading};
