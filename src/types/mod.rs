pub mod account;
pub mod config;
pub mod scoring;
pub mod report;
