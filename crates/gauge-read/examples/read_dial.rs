use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use log::{info, LevelFilter};

use gauge_read::core::{init_with_level, ValueRange};
use gauge_read::{read_gauge_path, DialReaderParams};

fn main() -> Result<(), Box<dyn Error>> {
    init_with_level(LevelFilter::Info)?;

    let mut args = env::args().skip(1);
    let image_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("testdata/gauge.png"));
    let min_value = parse_or(args.next(), 0.0)?;
    let max_value = parse_or(args.next(), 100.0)?;

    info!(
        "reading {} over range {min_value}..{max_value}",
        image_path.display()
    );

    let reading = read_gauge_path(
        &image_path,
        ValueRange::new(min_value, max_value),
        &DialReaderParams::default(),
    )?;
    println!("{}", serde_json::to_string_pretty(&reading)?);
    Ok(())
}

fn parse_or(arg: Option<String>, default: f32) -> Result<f32, Box<dyn Error>> {
    match arg {
        Some(raw) => Ok(f32::from_str(&raw)?),
        None => Ok(default),
    }
}
