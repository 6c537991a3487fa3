//! Strategy dispatch library: application logic shared by both binaries.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
