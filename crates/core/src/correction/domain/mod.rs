pub mod forehead_point_enhancer;
pub mod forehead_region;
pub mod landmark_corrector;
pub mod point_consistency_adjuster;
pub mod skin_tone_profiler;
