pub mod constants;
pub mod gray_frame;
pub mod landmark_set;
pub mod pixel_box;
pub mod point;
