//! High-level facade crate for the `gauge-read-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - end-to-end helpers that decode an image, convert it to grayscale, and
//!   run the dial reading pipeline
//! - a `gauge-read` binary (feature `cli`, on by default)
//!
//! ## Quickstart
//!
//! ```no_run
//! use gauge_read::core::ValueRange;
//! use gauge_read::{read_gauge_path, DialReaderParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reading = read_gauge_path(
//!     "gauge.png",
//!     ValueRange::new(0.0, 160.0),
//!     &DialReaderParams::default(),
//! )?;
//! println!("reading: {:.2}", reading.value);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `gauge_read::core`: circle/contour geometry, the dial angle codec, and
//!   the angle-to-value scale map.
//! - `gauge_read::dial`: the pipeline stages (Hough circle locator, contour
//!   extraction, calibration tracker, needle extraction) and `DialReader`.

pub use gauge_read_core as core;
pub use gauge_read_dial as dial;

pub use gauge_read_core::{Calibration, Circle, Contour, ValueRange};
pub use gauge_read_dial::{DialReader, DialReaderParams, DialReading, NeedleSelection};

mod read;

pub use read::{read_gauge_bytes, read_gauge_image, read_gauge_path, ReadGaugeError};
