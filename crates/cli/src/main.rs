use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use faceparts_core::correction::domain::landmark_corrector::CorrectionMode;
use faceparts_core::correction::infrastructure::corrector_factory::create_corrector;
use faceparts_core::detection::infrastructure::precomputed_landmarks::PrecomputedLandmarks;
use faceparts_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use faceparts_core::imaging::infrastructure::region_file_writer::RegionFileWriter;
use faceparts_core::pipeline::extract_regions_use_case::{ExtractRegionsUseCase, ImageReport};
use faceparts_core::pipeline::extraction_config::ExtractionConfig;
use faceparts_core::pipeline::infrastructure::threaded_batch_executor::ThreadedBatchExecutor;
use faceparts_core::pipeline::pipeline_logger::{PipelineLogger, StdoutPipelineLogger};
use faceparts_core::shared::constants::IMAGE_EXTENSIONS;

/// Forehead landmark correction and facial region extraction.
#[derive(Parser)]
#[command(name = "faceparts")]
struct Cli {
    /// Input image, or a directory of images.
    input: PathBuf,

    /// Directory for region crops and feature files.
    output: PathBuf,

    /// Predictor output: a JSON file, or a directory holding `<stem>.json`
    /// per image.
    #[arg(long)]
    landmarks: PathBuf,

    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Regions to extract (comma-separated), or "all".
    #[arg(long, value_delimiter = ',')]
    regions: Option<Vec<String>>,

    /// Forehead correction: enhanced or simple.
    #[arg(long)]
    mode: Option<CorrectionMode>,

    /// Also write the padded whole-face crop.
    #[arg(long)]
    crop_face: bool,

    /// Horizontal face crop padding as a share of image width (0.0-1.0).
    #[arg(long)]
    x_padding: Option<f64>,

    /// Vertical face crop padding as a share of image height (0.0-1.0).
    #[arg(long)]
    y_padding: Option<f64>,

    /// Worker threads (default: available parallelism).
    #[arg(long)]
    workers: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = build_config(&cli)?;
    let inputs = collect_images(&cli.input)?;
    if inputs.is_empty() {
        return Err(format!("No images found in {}", cli.input.display()).into());
    }
    log::info!(
        "Extracting {} regions from {} images with {} workers",
        config.selection().len(),
        inputs.len(),
        config.workers
    );

    let executor = ThreadedBatchExecutor::new(config.workers);
    let mut logger = StdoutPipelineLogger::default();
    let results = executor.run(
        inputs.clone(),
        |path| {
            process_image(&path, &cli.landmarks, &cli.output, &config).map_err(|e| e.to_string())
        },
        &mut logger,
    );

    let mut failures = 0;
    let mut written = 0;
    for (path, result) in inputs.iter().zip(results) {
        match result {
            Ok(report) => {
                report.record(&mut logger);
                if !report.face_found {
                    logger.info(&format!("No face found in {}", path.display()));
                }
                written += report.written.len();
            }
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                failures += 1;
            }
        }
    }
    logger.summary();
    log::info!("Wrote {written} files to {}", cli.output.display());

    if failures == inputs.len() {
        return Err(format!("All {failures} images failed").into());
    }
    Ok(())
}

fn process_image(
    input: &Path,
    landmarks: &Path,
    output: &Path,
    config: &ExtractionConfig,
) -> Result<ImageReport, Box<dyn std::error::Error>> {
    let landmarks_path = PrecomputedLandmarks::path_for_image(landmarks, input);
    let (detector, predictor) =
        PrecomputedLandmarks::from_json_file(&landmarks_path)?.into_adapters();

    let mut use_case = ExtractRegionsUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(RegionFileWriter::new(output)),
        Box::new(detector),
        Box::new(predictor),
        create_corrector(config.mode),
        config.selection(),
        config.face_padding(),
    );
    use_case.execute(input)
}

fn build_config(cli: &Cli) -> Result<ExtractionConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ExtractionConfig::from_json_file(path)?,
        None => ExtractionConfig::default(),
    };
    if let Some(regions) = &cli.regions {
        config.regions = regions.clone();
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if cli.crop_face {
        config.crop_face = true;
    }
    if let Some(x) = cli.x_padding {
        config.padding.x = x;
    }
    if let Some(y) = cli.y_padding {
        config.padding.y = y;
    }
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    config.validate()?;

    if config.selection().is_empty() {
        return Err(format!("No known regions in {:?}", config.regions).into());
    }
    Ok(config)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input not found: {}", cli.input.display()).into());
    }
    if !cli.landmarks.exists() {
        return Err(format!("Landmarks not found: {}", cli.landmarks.display()).into());
    }
    if cli.output.is_file() {
        return Err(format!("Output must be a directory: {}", cli.output.display()).into());
    }
    Ok(())
}

/// A single file is taken as given; a directory yields its images sorted
/// by name.
fn collect_images(input: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut images = Vec::new();
    for entry in std::fs::read_dir(input)? {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
