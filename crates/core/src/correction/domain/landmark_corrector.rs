use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::gray_frame::GrayFrame;
use crate::shared::landmark_set::LandmarkSet;

use super::forehead_point_enhancer::WalkOutcome;

/// Which forehead correction policy to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionMode {
    /// Skin-sampled pixel walk with consistency checks, falling back to
    /// [`CorrectionMode::Simple`] when the forehead is covered.
    #[default]
    Enhanced,
    /// Fixed fractional lifts of three forehead points.
    Simple,
}

impl CorrectionMode {
    pub const ALL: &[CorrectionMode] = &[CorrectionMode::Enhanced, CorrectionMode::Simple];

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionMode::Enhanced => "enhanced",
            CorrectionMode::Simple => "simple",
        }
    }
}

impl fmt::Display for CorrectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CorrectionMode::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown correction mode '{s}' (expected enhanced or simple)"))
    }
}

/// Result of one correction pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrectionReport {
    pub landmarks: LandmarkSet,
    /// Row count of the clamped forehead window.
    pub forehead_height: u32,
    /// `None` when the policy never sampled skin tone.
    pub forehead_clear: Option<bool>,
    /// One entry per walked point; empty unless the walk ran.
    pub walks: Vec<WalkOutcome>,
}

impl CorrectionReport {
    pub fn walked(&self) -> bool {
        !self.walks.is_empty()
    }

    pub fn fallback_count(&self) -> usize {
        self.walks.iter().filter(|w| w.fell_back).count()
    }
}

/// Turns raw predictor landmarks into corrected ones for a single image.
pub trait LandmarkCorrector: Send {
    fn correct(&self, landmarks: LandmarkSet, frame: &GrayFrame) -> CorrectionReport;
}
