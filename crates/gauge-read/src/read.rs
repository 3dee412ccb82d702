use std::path::Path;

use image::ImageReader;

use gauge_read_core::ValueRange;
use gauge_read_dial::{DialReadError, DialReader, DialReaderParams, DialReading};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level reading helpers.
#[derive(thiserror::Error, Debug)]
pub enum ReadGaugeError {
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid gauge range: min={min}, max={max} (both endpoints must be finite)")]
    InvalidRange { min: f32, max: f32 },

    #[error(transparent)]
    Dial(#[from] DialReadError),
}

fn check_range(range: ValueRange) -> Result<(), ReadGaugeError> {
    if range.min.is_finite() && range.max.is_finite() {
        Ok(())
    } else {
        Err(ReadGaugeError::InvalidRange {
            min: range.min,
            max: range.max,
        })
    }
}

/// Read a gauge from an already-decoded grayscale image.
pub fn read_gauge_image(
    img: &image::GrayImage,
    range: ValueRange,
    params: &DialReaderParams,
) -> Result<DialReading, ReadGaugeError> {
    check_range(range)?;
    Ok(DialReader::new(params.clone()).read(img, range)?)
}

/// Decode an image from raw bytes (any supported format), convert it to
/// grayscale, and read the gauge.
pub fn read_gauge_bytes(
    bytes: &[u8],
    range: ValueRange,
    params: &DialReaderParams,
) -> Result<DialReading, ReadGaugeError> {
    check_range(range)?;
    let img = image::load_from_memory(bytes)?.to_luma8();
    Ok(DialReader::new(params.clone()).read(&img, range)?)
}

/// Open an image file, convert it to grayscale, and read the gauge.
#[cfg_attr(feature = "tracing", instrument(level = "info", skip_all))]
pub fn read_gauge_path(
    path: impl AsRef<Path>,
    range: ValueRange,
    params: &DialReaderParams,
) -> Result<DialReading, ReadGaugeError> {
    check_range(range)?;
    let img = ImageReader::open(path)?.decode()?.to_luma8();
    Ok(DialReader::new(params.clone()).read(&img, range)?)
}
