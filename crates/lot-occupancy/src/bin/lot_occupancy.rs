use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;

use lot_occupancy::classify::{OccupancyClassifier, OnnxEngine};
use lot_occupancy::pipeline::LotSurveyor;
use lot_occupancy::report::SurveyReport;

/// Estimate parking-lot occupancy from a single camera frame.
#[derive(Parser, Debug)]
#[command(name = "lot-occupancy", version)]
struct Args {
    /// Input frame (JPEG or PNG).
    #[arg(long)]
    image: PathBuf,

    /// Spot geometry JSON: an array of quads, each four [x, y] corners
    /// ordered top-left, top-right, bottom-right, bottom-left.
    #[arg(long)]
    spots: PathBuf,

    /// ONNX classification model (two-class: occupied, vacant).
    #[arg(long)]
    model: PathBuf,

    /// Name of the model's input tensor.
    #[arg(long, default_value = "serving_default_sequential_1_input")]
    input_name: String,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log debug detail.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    lot_occupancy::core::init_with_level(level)?;

    let frame = lot_occupancy::decode::load_frame(&args.image)?;
    let quads = lot_occupancy::spots::load_spots_json(&args.spots)?;
    log::info!(
        "frame {}x{}, {} configured spots",
        frame.width,
        frame.height,
        quads.len()
    );

    let engine = Arc::new(OnnxEngine::from_file(&args.model, args.input_name.clone())?);
    let surveyor = LotSurveyor::new(OccupancyClassifier::new(engine));

    let survey = surveyor.survey(&frame.as_view(), &quads)?;
    let report = SurveyReport::new(args.image.to_string_lossy(), &survey);

    match &args.output {
        Some(path) => {
            report.write_json(path)?;
            println!("wrote report JSON to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
