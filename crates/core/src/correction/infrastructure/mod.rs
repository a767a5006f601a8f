pub mod corrector_factory;
pub mod fractional_offset_corrector;
pub mod skin_walk_corrector;
