pub mod analysis_config;
pub mod brief;
pub mod client;
pub mod content;
pub mod source;
