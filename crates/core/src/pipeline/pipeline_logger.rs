use std::collections::BTreeMap;
use std::time::Instant;

/// Stage names reported by the extraction pipeline.
pub const STAGE_CORRECT: &str = "correct";
pub const STAGE_EXTRACT: &str = "extract";
pub const STAGE_WRITE: &str = "write";

/// Metric name for the number of regions written per image.
pub const METRIC_REGIONS: &str = "regions";

/// Cross-cutting logger for batch progress and per-image stage timings.
pub trait PipelineLogger: Send {
    /// Report image-level progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took for one image.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a per-image metric (e.g. regions written).
    fn metric(&mut self, name: &str, value: f64);

    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events. Used by tests and library callers.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI logger aggregating per-stage timings and metrics into a summary.
///
/// Progress lines are throttled to every `throttle_images` images.
pub struct StdoutPipelineLogger {
    throttle_images: usize,
    timings: BTreeMap<String, Vec<f64>>,
    metrics: BTreeMap<String, Vec<f64>>,
    start_time: Instant,
    total_images: usize,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_images: usize) -> Self {
        Self {
            throttle_images: throttle_images.max(1),
            timings: BTreeMap::new(),
            metrics: BTreeMap::new(),
            start_time: Instant::now(),
            total_images: 0,
        }
    }

    /// Formatted summary, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let images = self.total_images;
        let mut lines = vec![format!(
            "Extraction summary ({images} images, {:.1}s total):",
            elapsed_ms / 1000.0
        )];

        for (stage, durations) in &self.timings {
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = average(durations);
            lines.push(format!(
                "  {stage:8}: avg {avg_ms:6.1}ms  total {total_ms:7.0}ms  ({} images)",
                durations.len()
            ));
        }

        for (name, values) in &self.metrics {
            let total: f64 = values.iter().sum();
            lines.push(format!("  {name}: avg {:.1}  total {total:.0}", average(values)));
        }

        if images > 0 && elapsed_ms > 0.0 {
            let rate = images as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {rate:.1} images/s"));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metrics_for(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(|v| v.as_slice())
    }
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_images = total;
        if total > 0 && (current % self.throttle_images == 0 || current == total) {
            let pct = current as f64 / total as f64 * 100.0;
            log::info!("Processed {current}/{total} images ({pct:.1}%)");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── NullPipelineLogger ──

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 10);
        logger.timing(STAGE_CORRECT, 5.0);
        logger.metric(METRIC_REGIONS, 16.0);
        logger.info("hello");
        logger.summary();
    }

    // ── StdoutPipelineLogger ──

    #[test]
    fn test_timing_records_values_per_stage() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.timing(STAGE_CORRECT, 20.0);
        logger.timing(STAGE_CORRECT, 30.0);
        logger.timing(STAGE_WRITE, 5.0);

        assert_eq!(logger.timings_for(STAGE_CORRECT).unwrap(), &[20.0, 30.0]);
        assert_eq!(logger.timings_for(STAGE_WRITE).unwrap(), &[5.0]);
        assert!(logger.timings_for(STAGE_EXTRACT).is_none());
    }

    #[test]
    fn test_metric_records_values() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.metric(METRIC_REGIONS, 16.0);
        logger.metric(METRIC_REGIONS, 3.0);

        let values = logger.metrics_for(METRIC_REGIONS).unwrap();
        assert_relative_eq!(average(values), 9.5);
    }

    #[test]
    fn test_summary_lists_stages_and_metrics() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.total_images = 2;
        logger.timing(STAGE_CORRECT, 2.0);
        logger.timing(STAGE_EXTRACT, 4.0);
        logger.metric(METRIC_REGIONS, 16.0);
        logger.metric(METRIC_REGIONS, 2.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Extraction summary (2 images"));
        assert!(summary.contains("correct"));
        assert!(summary.contains("extract"));
        assert!(summary.contains("regions: avg 9.0  total 18"));
        assert!(summary.contains("images/s"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutPipelineLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_progress_tracks_total() {
        let mut logger = StdoutPipelineLogger::new(10);
        for i in 1..=20 {
            logger.progress(i, 20);
        }
        assert_eq!(logger.total_images, 20);
    }

    #[test]
    fn test_info_leaves_summary_empty() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.info("no face in anna.jpg");
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_zero_throttle_is_clamped() {
        let logger = StdoutPipelineLogger::new(0);
        assert_eq!(logger.throttle_images, 1);
    }
}
