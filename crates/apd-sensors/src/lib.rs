//! APD Sensors
//!
//! Built-in host sensors, their configuration, and the catalog used by the
//! `sensors` tool.

pub mod catalog;
pub mod config;
pub mod sensors;

pub use catalog::{get_sensors, registry, CONTAINER};
pub use config::SensorsConfig;
