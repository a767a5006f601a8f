pub mod image_reader;
pub mod region_writer;
