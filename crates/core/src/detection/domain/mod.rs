pub mod bounding_box;
pub mod face_detector;
pub mod landmark_predictor;
