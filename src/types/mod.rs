pub mod config;
pub mod profile;
pub mod report;
pub mod repository;
pub mod scoring;
