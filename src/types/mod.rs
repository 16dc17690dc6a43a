pub mod config;
pub mod model;
pub mod report;
pub mod scoring;
pub mod submission;
