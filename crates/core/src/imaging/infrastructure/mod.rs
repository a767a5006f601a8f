pub mod image_file_reader;
pub mod region_file_writer;
