pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod report;
pub mod state;
pub mod store;
pub mod telemetry;
