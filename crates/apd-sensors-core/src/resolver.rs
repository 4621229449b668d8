//! Resolution of `container:Member` sensor paths.

use crate::registry::{Member, Registry};
use crate::sensor::DynSensor;
use crate::ResolveError;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Separates the container from the member in a sensor path.
pub const PATH_DELIMITER: char = ':';

/// A parsed sensor path such as `apd.sensors:CPULoad`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorPath {
    /// Dotted container name.
    pub container: String,
    /// Member name within the container.
    pub member: String,
}

impl FromStr for SensorPath {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, ResolveError> {
        let mut segments = s.split(PATH_DELIMITER);
        match (segments.next(), segments.next(), segments.next()) {
            (Some(container), Some(member), None) => Ok(SensorPath {
                container: container.to_string(),
                member: member.to_string(),
            }),
            _ => Err(ResolveError::MalformedPath(s.to_string())),
        }
    }
}

impl fmt::Display for SensorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.container, PATH_DELIMITER, self.member)
    }
}

impl Registry {
    /// Resolves a sensor path to a freshly built sensor.
    ///
    /// Fails with exactly one [`ResolveError`]; nothing is constructed unless
    /// every check passes.
    pub fn resolve(&self, path: &str) -> Result<Box<dyn DynSensor>, ResolveError> {
        let path: SensorPath = path.parse()?;
        debug!("Resolving sensor {}", path);

        let container = self
            .container(&path.container)
            .ok_or_else(|| ResolveError::ContainerNotFound(path.container.clone()))?;

        let member = container
            .get(&path.member)
            .ok_or_else(|| ResolveError::MemberNotFound {
                container: path.container.clone(),
                member: path.member.clone(),
            })?;

        match member {
            Member::Sensor(factory) => {
                let sensor = factory();
                debug!("Resolved {} to sensor '{}'", path, sensor.title());
                Ok(sensor)
            }
            Member::Contract => Err(ResolveError::NotASensor {
                found: format!("abstract sensor contract {}", path),
            }),
            Member::Item(kind) => Err(ResolveError::NotASensor {
                found: format!("{} {}", kind, path),
            }),
        }
    }
}
