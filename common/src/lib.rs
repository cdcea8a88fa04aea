// Common library for shared code across the api and web handlers

pub mod config;
pub mod db;
pub mod errors;
pub mod response;
pub mod telemetry;
