pub mod extract_regions_use_case;
pub mod extraction_config;
pub mod infrastructure;
pub mod pipeline_logger;
