use std::path::PathBuf;

use line_profile::ProfileRequest;
use line_profile::api::ProfileChart;
use line_profile::core::{Axis, BYTES_PER_PIXEL, PixelBuffer, ProfileChannels};
use line_profile::telemetry::init_default_tracing;

const DEFAULT_OUTPUT_PATH: &str = "target/synthetic_profile.png";
const IMAGE_WIDTH: u32 = 256;
const IMAGE_HEIGHT: u32 = 64;
// Padded rows exercise the stride path.
const ROW_PADDING_BYTES: usize = 12;

#[derive(Debug)]
struct CliArgs {
    output_path: PathBuf,
    request: ProfileRequest,
    canvas_width: f64,
    canvas_height: f64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = init_default_tracing();
    let args = parse_args()?;

    let stride = IMAGE_WIDTH as usize * BYTES_PER_PIXEL + ROW_PADDING_BYTES;
    let data = synthetic_gradient(stride);
    let buffer = PixelBuffer::new(&data, IMAGE_WIDTH, IMAGE_HEIGHT, stride)
        .map_err(|err| format!("failed to wrap synthetic buffer: {err}"))?;

    let request = args.request.clamped_to(buffer);
    let profile = request
        .extract(buffer)
        .map_err(|err| format!("failed to extract {}: {err}", request.title()))?;

    let image = ProfileChart::default()
        .render(&profile, args.canvas_width, args.canvas_height)
        .map_err(|err| format!("failed to render chart: {err}"))?
        .ok_or_else(|| format!("{} has too few samples to chart", request.title()))?;

    if let Some(parent) = args.output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
    }
    image
        .save(&args.output_path)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output_path.display()))?;

    println!(
        "wrote {} ({} samples, {}x{})",
        args.output_path.display(),
        profile.len(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// Horizontal red ramp, vertical green ramp and a blue sawtooth.
fn synthetic_gradient(stride: usize) -> Vec<u8> {
    let mut data = vec![0_u8; stride * IMAGE_HEIGHT as usize];
    for row in 0..IMAGE_HEIGHT as usize {
        for col in 0..IMAGE_WIDTH as usize {
            let offset = row * stride + col * BYTES_PER_PIXEL;
            data[offset] = ((col * 8) % 256) as u8;
            data[offset + 1] = (row * 255 / (IMAGE_HEIGHT as usize - 1)) as u8;
            data[offset + 2] = col as u8;
            data[offset + 3] = 255;
        }
    }
    data
}

fn parse_args() -> Result<CliArgs, String> {
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut axis = Axis::Row;
    let mut index = IMAGE_HEIGHT / 2;
    let mut channels = ProfileChannels::Gray;
    let mut canvas_width = 640.0;
    let mut canvas_height = 320.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--output" => output_path = PathBuf::from(value("--output")?),
            "--row" => {
                axis = Axis::Row;
                index = parse_number(&value("--row")?)?;
            }
            "--column" => {
                axis = Axis::Column;
                index = parse_number(&value("--column")?)?;
            }
            "--rgb" => channels = ProfileChannels::Rgb,
            "--size" => {
                let raw = value("--size")?;
                let (width, height) = raw
                    .split_once('x')
                    .ok_or_else(|| format!("expected <width>x<height>, got `{raw}`"))?;
                canvas_width = parse_number::<f64>(width)?;
                canvas_height = parse_number::<f64>(height)?;
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin render_synthetic_profile -- [--row <n> | --column <n>] [--rgb] [--size <w>x<h>] [--output <path>]"
                );
                std::process::exit(0);
            }
            _ => return Err(format!("unknown argument `{arg}`")),
        }
    }

    Ok(CliArgs {
        output_path,
        request: ProfileRequest::new(axis, index, channels),
        canvas_width,
        canvas_height,
    })
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("`{raw}` is not a valid number"))
}
