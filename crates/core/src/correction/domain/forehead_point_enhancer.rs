//! Upward pixel walk that moves forehead landmarks onto the hairline.
//!
//! Each point climbs in fixed strides while the pixel under it stays inside
//! the skin band. The first out-of-band pixel is taken as the skin/hair
//! edge. Walks that would leave the image, or climb further than a fixed
//! share of the forehead height, fall back to a fixed lift of the original
//! point instead.

use serde::Serialize;

use crate::shared::constants::{WALK_FALLBACK_RATIO, WALK_MAX_EXCURSION_RATIO, WALK_STRIDE};
use crate::shared::gray_frame::GrayFrame;
use crate::shared::point::Point;

use super::skin_tone_profiler::SkinColorRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkState {
    /// Still on skin. A walk that ends here was stopped by the excursion bound.
    Searching,
    /// The next step would have crossed the top edge of the image.
    HitImageTop,
    /// Found a pixel outside the skin band.
    Converged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WalkOutcome {
    pub original: Point,
    pub point: Point,
    pub state: WalkState,
    pub steps: usize,
    /// The walked position was discarded in favour of the fallback lift.
    pub fell_back: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ForeheadPointEnhancer {
    stride: i32,
    fallback_ratio: f64,
    max_excursion_ratio: f64,
}

impl ForeheadPointEnhancer {
    pub fn new(stride: i32, fallback_ratio: f64, max_excursion_ratio: f64) -> Self {
        Self {
            stride: stride.max(1),
            fallback_ratio,
            max_excursion_ratio,
        }
    }

    /// The original point lifted by a fixed share of its own y.
    pub fn fallback(&self, original: Point) -> Point {
        let y = original.y as f64 - original.y as f64 * self.fallback_ratio;
        original.with_y(y as i32)
    }

    /// Walks `start` upward through `frame` while its pixel stays in `range`.
    ///
    /// Stops after at most `floor(max_excursion / stride)` steps, since any
    /// longer walk would be discarded by the excursion bound.
    pub fn walk(
        &self,
        frame: &GrayFrame,
        start: Point,
        range: SkinColorRange,
        forehead_height: u32,
    ) -> WalkOutcome {
        let max_excursion = forehead_height as f64 * self.max_excursion_ratio;
        let mut y = start.y;
        let mut steps = 0;

        let state = loop {
            match frame.pixel(start.x, y) {
                Some(v) if range.contains(v) => {}
                _ => break WalkState::Converged,
            }
            let next = y - self.stride;
            if next < 0 {
                break WalkState::HitImageTop;
            }
            if (start.y - next) as f64 > max_excursion {
                break WalkState::Searching;
            }
            y = next;
            steps += 1;
        };

        let fell_back = state != WalkState::Converged;
        let point = if fell_back {
            self.fallback(start)
        } else {
            start.with_y(y)
        };

        WalkOutcome {
            original: start,
            point,
            state,
            steps,
            fell_back,
        }
    }

    /// Walks every point independently against the same skin band.
    pub fn enhance<const N: usize>(
        &self,
        frame: &GrayFrame,
        points: [Point; N],
        skin_intensity: f64,
        forehead_height: u32,
    ) -> [WalkOutcome; N] {
        let range = SkinColorRange::for_intensity(skin_intensity);
        points.map(|p| {
            let outcome = self.walk(frame, p, range, forehead_height);
            log::debug!(
                "Forehead walk ({}, {}) -> {} after {} steps ({:?})",
                p.x,
                p.y,
                outcome.point.y,
                outcome.steps,
                outcome.state
            );
            outcome
        })
    }
}

impl Default for ForeheadPointEnhancer {
    fn default() -> Self {
        Self::new(WALK_STRIDE, WALK_FALLBACK_RATIO, WALK_MAX_EXCURSION_RATIO)
    }
}
