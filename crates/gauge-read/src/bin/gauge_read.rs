use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use gauge_read::core::{init_with_level, ValueRange};
use gauge_read::{read_gauge_path, DialReaderParams};

/// Read an analog dial gauge from a photograph.
#[derive(Parser, Debug)]
#[command(name = "gauge-read", version, about)]
struct Args {
    /// Path to the gauge photograph.
    image: PathBuf,

    /// Gauge value at the start of the scale.
    #[arg(long, allow_hyphen_values = true)]
    min_value: f32,

    /// Gauge value at the end of the scale.
    #[arg(long, allow_hyphen_values = true)]
    max_value: f32,

    /// JSON file with `DialReaderParams` overrides.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Emit the full reading as JSON instead of the bare value.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = init_with_level(level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let params: DialReaderParams = match &args.params {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => DialReaderParams::default(),
    };

    let range = ValueRange::new(args.min_value, args.max_value);
    let reading = read_gauge_path(&args.image, range, &params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        println!("{}", reading.value);
    }
    Ok(())
}
