//! Error types for the APD sensors core library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a sensor or writing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// A data source failed in a way that is not an expected absence.
    #[error("{sensor}: {message}")]
    DataSource {
        sensor: &'static str,
        message: String,
    },

    /// I/O error while reading a data source or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds a data source error for the given sensor title.
    pub fn data_source(sensor: &'static str, message: impl Into<String>) -> Self {
        Error::DataSource {
            sensor,
            message: message.into(),
        }
    }
}

/// Reasons a sensor path does not yield a sensor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path does not have exactly one `container:Member` delimiter.
    #[error("Sensor path must be in the format dotted.path.to.container:TypeName (got `{0}`)")]
    MalformedPath(String),

    /// No container is registered under the first segment.
    #[error("Could not find sensor container {0}")]
    ContainerNotFound(String),

    /// The container exists but has no member with that name.
    #[error("Could not find {member} in {container}")]
    MemberNotFound { container: String, member: String },

    /// The member exists but is not a concrete sensor type.
    #[error("Detected {found} is not recognised as a Sensor type")]
    NotASensor { found: String },
}
