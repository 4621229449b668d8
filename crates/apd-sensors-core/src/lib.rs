//! APD Sensors Core Library
//!
//! Provides the sensor contract shared by every data source, the registry
//! that maps `container:Member` paths to sensor types, and the report writer
//! used by the `sensors` tool.

pub mod error;
pub mod probe;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod sensor;
pub mod units;

pub use error::{Error, ResolveError, Result};
pub use probe::Probe;
pub use registry::{Container, ItemKind, Member, Registry};
pub use resolver::{SensorPath, PATH_DELIMITER};
pub use sensor::{DynSensor, Sensor, UNKNOWN};
