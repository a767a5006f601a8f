use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::DynamicImage;

use crate::correction::domain::landmark_corrector::{CorrectionReport, LandmarkCorrector};
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::landmark_predictor::LandmarkPredictor;
use crate::extraction::domain::face_crop::{CropPadding, FaceCrop};
use crate::extraction::domain::face_features::FaceFeatures;
use crate::extraction::domain::region_extractor::RegionExtractor;
use crate::extraction::domain::region_name::{RegionName, RegionSelection};
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::region_writer::RegionWriter;
use crate::pipeline::pipeline_logger::{
    PipelineLogger, METRIC_REGIONS, STAGE_CORRECT, STAGE_EXTRACT, STAGE_WRITE,
};
use crate::shared::gray_frame::GrayFrame;
use crate::shared::landmark_set::LandmarkSet;

/// Output of one successful extraction.
pub struct ExtractionResult {
    pub correction: CorrectionReport,
    pub regions: BTreeMap<RegionName, DynamicImage>,
    pub features: FaceFeatures,
    /// Padded whole-face crop, when requested.
    pub face: Option<DynamicImage>,
    pub timings: Vec<(&'static str, f64)>,
}

impl ExtractionResult {
    pub fn landmarks(&self) -> &LandmarkSet {
        &self.correction.landmarks
    }
}

/// What happened to one input file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageReport {
    pub face_found: bool,
    pub written: Vec<PathBuf>,
    pub timings: Vec<(&'static str, f64)>,
    pub regions: usize,
}

impl ImageReport {
    pub fn record(&self, logger: &mut dyn PipelineLogger) {
        for &(stage, ms) in &self.timings {
            logger.timing(stage, ms);
        }
        if self.face_found {
            logger.metric(METRIC_REGIONS, self.regions as f64);
        }
    }
}

/// Per-image pipeline: read → detect → predict → correct → extract → write.
///
/// Only the first detected face is processed. An image without faces is
/// skipped, not failed.
pub struct ExtractRegionsUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn RegionWriter>,
    detector: Box<dyn FaceDetector>,
    predictor: Box<dyn LandmarkPredictor>,
    corrector: Box<dyn LandmarkCorrector>,
    selection: RegionSelection,
    face_padding: Option<CropPadding>,
}

impl ExtractRegionsUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn RegionWriter>,
        detector: Box<dyn FaceDetector>,
        predictor: Box<dyn LandmarkPredictor>,
        corrector: Box<dyn LandmarkCorrector>,
        selection: RegionSelection,
        face_padding: Option<CropPadding>,
    ) -> Self {
        Self {
            reader,
            writer,
            detector,
            predictor,
            corrector,
            selection,
            face_padding,
        }
    }

    /// Runs detection, correction and extraction on an in-memory image.
    /// Returns `Ok(None)` when no face is found.
    pub fn extract(
        &mut self,
        image: &DynamicImage,
    ) -> Result<Option<ExtractionResult>, Box<dyn std::error::Error>> {
        let frame = GrayFrame::from_dynamic(image);

        let Some(face) = self.detector.detect(&frame)?.into_iter().next() else {
            return Ok(None);
        };
        let landmarks = self.predictor.predict(&frame, &face)?.merge()?;

        let t = Instant::now();
        let correction = self.corrector.correct(landmarks, &frame);
        let correct_ms = elapsed_ms(t);

        let t = Instant::now();
        let extractor = RegionExtractor::new(&correction.landmarks);
        let regions = extractor.extract(image, &self.selection);
        let features = FaceFeatures::measure(extractor.components(), extractor.clear_side());
        let face = self.face_padding.map(|padding| {
            FaceCrop::locate(&correction.landmarks, image.width(), image.height(), padding)
                .crop(image)
        });
        let extract_ms = elapsed_ms(t);

        Ok(Some(ExtractionResult {
            correction,
            regions,
            features,
            face,
            timings: vec![(STAGE_CORRECT, correct_ms), (STAGE_EXTRACT, extract_ms)],
        }))
    }

    /// Reads `input`, extracts its regions and writes them under the input's
    /// file stem.
    pub fn execute(&mut self, input: &Path) -> Result<ImageReport, Box<dyn std::error::Error>> {
        let image = self.reader.read(input)?;
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let Some(mut result) = self.extract(&image)? else {
            log::info!("No face found in {}", input.display());
            return Ok(ImageReport::default());
        };

        let t = Instant::now();
        let mut written = self.writer.write_regions(&stem, &result.regions)?;
        written.push(self.writer.write_features(&stem, &result.features)?);
        if let Some(face) = &result.face {
            written.push(self.writer.write_face(&stem, face)?);
        }
        result.timings.push((STAGE_WRITE, elapsed_ms(t)));

        log::info!(
            "{}: {} regions, forehead {}",
            input.display(),
            result.regions.len(),
            describe_correction(&result.correction)
        );

        Ok(ImageReport {
            face_found: true,
            regions: result.regions.len(),
            written,
            timings: result.timings,
        })
    }
}

fn describe_correction(report: &CorrectionReport) -> String {
    match report.forehead_clear {
        Some(true) => format!(
            "walked ({} of {} fell back)",
            report.fallback_count(),
            report.walks.len()
        ),
        Some(false) => "covered, lifted".to_string(),
        None => "lifted".to_string(),
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
