pub mod eyebrow_shape;
pub mod shape;
pub mod slope;
