pub mod clear_side;
pub mod face_components;
pub mod face_crop;
pub mod face_features;
pub mod region_extractor;
pub mod region_name;
