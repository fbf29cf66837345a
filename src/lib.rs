pub mod assessment;
pub mod config;
pub mod output;
pub mod scoring;
