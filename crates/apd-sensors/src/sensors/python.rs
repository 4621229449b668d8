//! Python interpreter version sensor.

use crate::config::PythonConfig;
use apd_sensors_core::{Error, Probe, Result, Sensor, UNKNOWN};
use std::io;
use std::process::Command;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Prints `sys.version_info` as space-separated fields.
const VERSION_SCRIPT: &str = "import sys; print(*sys.version_info)";

/// Release level of an interpreter build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseLevel {
    Alpha,
    Beta,
    Candidate,
    Final,
}

impl ReleaseLevel {
    /// Version suffix for pre-releases, `None` for final releases.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ReleaseLevel::Alpha => Some("a"),
            ReleaseLevel::Beta => Some("b"),
            ReleaseLevel::Candidate => Some("rc"),
            ReleaseLevel::Final => None,
        }
    }
}

impl FromStr for ReleaseLevel {
    type Err = VersionParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(ReleaseLevel::Alpha),
            "beta" => Ok(ReleaseLevel::Beta),
            "candidate" => Ok(ReleaseLevel::Candidate),
            "final" => Ok(ReleaseLevel::Final),
            _ => Err(VersionParseError::ReleaseLevel(s.to_string())),
        }
    }
}

/// Errors parsing interpreter version output.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionParseError {
    /// Wrong number of fields.
    #[error("expected 5 version fields, got {0}")]
    FieldCount(usize),

    /// A numeric field did not parse.
    #[error("invalid version number: {0}")]
    Number(String),

    /// Unrecognised release level.
    #[error("invalid release level: {0}")]
    ReleaseLevel(String),
}

/// Structured interpreter version, e.g. 3.13.0 alpha 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub release_level: ReleaseLevel,
    pub serial: u32,
}

impl FromStr for VersionInfo {
    type Err = VersionParseError;

    /// Parses `major minor micro releaselevel serial`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(VersionParseError::FieldCount(fields.len()));
        }

        let number = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|_| VersionParseError::Number(field.to_string()))
        };

        Ok(VersionInfo {
            major: number(fields[0])?,
            minor: number(fields[1])?,
            micro: number(fields[2])?,
            release_level: fields[3].parse()?,
            serial: number(fields[4])?,
        })
    }
}

/// Version of the configured Python interpreter.
pub struct PythonVersion {
    interpreter: String,
}

impl PythonVersion {
    /// Creates a sensor for the given interpreter configuration.
    pub fn new(config: &PythonConfig) -> Self {
        Self {
            interpreter: config.interpreter.clone(),
        }
    }

    fn probe(&self) -> Probe<VersionInfo> {
        debug!("Querying version of {}", self.interpreter);
        let output = match Command::new(&self.interpreter)
            .args(["-c", VERSION_SCRIPT])
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Probe::unavailable(format!("{} not found", self.interpreter));
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Probe::unavailable(format!("no permission to run {}", self.interpreter));
            }
            Err(e) => return Probe::Failed(e.into()),
        };

        if !output.status.success() {
            return Probe::Failed(Error::data_source(
                Self::TITLE,
                format!(
                    "{} exited with {}: {}",
                    self.interpreter,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            ));
        }

        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse::<VersionInfo>()
            .map_err(|e| Error::data_source(Self::TITLE, e.to_string()))
            .into()
    }
}

impl Default for PythonVersion {
    fn default() -> Self {
        Self::new(&PythonConfig::default())
    }
}

impl Sensor for PythonVersion {
    type Value = Option<VersionInfo>;
    const TITLE: &'static str = "Python Version";

    fn value(&self) -> Result<Self::Value> {
        self.probe().into_value()
    }

    fn format(value: &Self::Value) -> String {
        let Some(version) = value else {
            return UNKNOWN.to_string();
        };
        match version.release_level.suffix() {
            Some(suffix) if version.micro == 0 => format!(
                "{}.{}.{}{}{}",
                version.major, version.minor, version.micro, suffix, version.serial
            ),
            _ => format!("{}.{}", version.major, version.minor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(s: &str) -> Option<VersionInfo> {
        Some(s.parse().unwrap())
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(
            "3 12 1 final 0".parse::<VersionInfo>().unwrap(),
            VersionInfo {
                major: 3,
                minor: 12,
                micro: 1,
                release_level: ReleaseLevel::Final,
                serial: 0,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "3 12".parse::<VersionInfo>(),
            Err(VersionParseError::FieldCount(2))
        );
        assert_eq!(
            "3 x 0 final 0".parse::<VersionInfo>(),
            Err(VersionParseError::Number("x".into()))
        );
        assert_eq!(
            "3 12 0 gamma 0".parse::<VersionInfo>(),
            Err(VersionParseError::ReleaseLevel("gamma".into()))
        );
    }

    #[test]
    fn test_format_final_release() {
        assert_eq!(PythonVersion::format(&version("3 12 1 final 0")), "3.12");
        assert_eq!(PythonVersion::format(&version("3 12 0 final 0")), "3.12");
    }

    #[test]
    fn test_format_pre_release() {
        assert_eq!(PythonVersion::format(&version("3 13 0 alpha 2")), "3.13.0a2");
        assert_eq!(PythonVersion::format(&version("3 13 0 beta 1")), "3.13.0b1");
        assert_eq!(
            PythonVersion::format(&version("3 13 0 candidate 3")),
            "3.13.0rc3"
        );
    }

    #[test]
    fn test_format_pre_release_with_patch() {
        assert_eq!(PythonVersion::format(&version("3 12 1 alpha 1")), "3.12");
    }

    #[test]
    fn test_format_unknown() {
        assert_eq!(PythonVersion::format(&None), "Unknown");
    }

    #[test]
    fn test_missing_interpreter_is_unknown() {
        let sensor = PythonVersion::new(&PythonConfig {
            interpreter: "apd-sensors-no-such-python".to_string(),
        });
        assert_eq!(sensor.value().unwrap(), None);
    }

    #[test]
    fn test_non_executable_interpreter_is_unknown() {
        // Plain temp files are created without any execute bit.
        let file = tempfile::NamedTempFile::new().unwrap();
        let sensor = PythonVersion::new(&PythonConfig {
            interpreter: file.path().to_string_lossy().into_owned(),
        });
        assert_eq!(sensor.value().unwrap(), None);
    }
}
