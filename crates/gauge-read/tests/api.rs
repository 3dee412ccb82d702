use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};
use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};

use gauge_read::dial::DialReadError;
use gauge_read::{
    read_gauge_bytes, read_gauge_image, DialReaderParams, ReadGaugeError, ValueRange,
};

fn blank(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([255u8]))
}

fn synthetic_dial() -> GrayImage {
    let mut img = blank(200, 200);
    for r in 78..=81 {
        draw_hollow_circle_mut(&mut img, (100, 100), r, Luma([0u8]));
    }
    for offset in -1..=1 {
        let dx = offset as f32;
        draw_line_segment_mut(&mut img, (95.0 + dx, 105.0), (60.0 + dx, 140.0), Luma([0u8]));
    }
    img
}

fn dial_params() -> DialReaderParams {
    // The drawn needle contour is far larger than photographed fragments.
    DialReaderParams {
        area_threshold: 600.0,
        ..DialReaderParams::default()
    }
}

#[test]
fn blank_image_reports_no_circle() {
    let err = read_gauge_image(
        &blank(160, 160),
        ValueRange::new(0.0, 10.0),
        &DialReaderParams::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReadGaugeError::Dial(DialReadError::NoCircleDetected)
    ));
}

#[test]
fn non_finite_range_is_rejected_before_the_pipeline() {
    let err = read_gauge_image(
        &blank(160, 160),
        ValueRange::new(f32::NAN, 10.0),
        &DialReaderParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReadGaugeError::InvalidRange { .. }));
}

#[test]
fn garbage_bytes_are_an_image_error() {
    let err = read_gauge_bytes(
        b"definitely not an image",
        ValueRange::new(0.0, 1.0),
        &DialReaderParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReadGaugeError::Image(_)));
}

#[test]
fn synthetic_dial_reads_through_the_facade() {
    let reading = read_gauge_image(
        &synthetic_dial(),
        ValueRange::new(0.0, 100.0),
        &dial_params(),
    )
    .unwrap();
    assert!(
        reading.needle_angle > 35.0 && reading.needle_angle < 55.0,
        "needle angle = {}",
        reading.needle_angle
    );
}

#[test]
fn encoded_bytes_round_trip_through_the_decoder() {
    let mut png = Vec::new();
    synthetic_dial()
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();

    let reading = read_gauge_bytes(&png, ValueRange::new(0.0, 100.0), &dial_params()).unwrap();
    assert!(
        reading.needle_angle > 35.0 && reading.needle_angle < 55.0,
        "needle angle = {}",
        reading.needle_angle
    );
}
