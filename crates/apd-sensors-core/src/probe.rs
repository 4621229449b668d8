//! Capability probing for data sources that may legitimately be absent.

use crate::{Error, Result};
use tracing::debug;

/// Outcome of asking a data source for a reading.
#[derive(Debug)]
pub enum Probe<T> {
    /// The source answered.
    Available(T),
    /// The source is absent in an expected way (no peripheral, unsupported
    /// platform, no battery). Carries a human-readable reason.
    Unavailable(String),
    /// The source exists but failed unexpectedly.
    Failed(Error),
}

impl<T> Probe<T> {
    /// Shorthand for an expected absence.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Probe::Unavailable(reason.into())
    }

    /// Chains a further probe on an available value.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Probe<U>) -> Probe<U> {
        match self {
            Probe::Available(value) => f(value),
            Probe::Unavailable(reason) => Probe::Unavailable(reason),
            Probe::Failed(err) => Probe::Failed(err),
        }
    }

    /// Maps an available value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        self.and_then(|value| Probe::Available(f(value)))
    }

    /// Folds the probe into a sensor value: absence becomes `None`,
    /// failures are returned as errors.
    pub fn into_value(self) -> Result<Option<T>> {
        match self {
            Probe::Available(value) => Ok(Some(value)),
            Probe::Unavailable(reason) => {
                debug!("Data source unavailable: {}", reason);
                Ok(None)
            }
            Probe::Failed(err) => Err(err),
        }
    }
}

impl<T> From<Result<T>> for Probe<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Probe::Available(value),
            Err(err) => Probe::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_becomes_some() {
        let probe = Probe::Available(5);
        assert_eq!(probe.into_value().unwrap(), Some(5));
    }

    #[test]
    fn test_unavailable_becomes_none() {
        let probe: Probe<u8> = Probe::unavailable("no peripheral");
        assert_eq!(probe.into_value().unwrap(), None);
    }

    #[test]
    fn test_failed_propagates() {
        let probe: Probe<u8> = Probe::Failed(Error::data_source("Test", "boom"));
        assert!(probe.into_value().is_err());
    }

    #[test]
    fn test_and_then_short_circuits() {
        let probe: Probe<u8> = Probe::unavailable("missing");
        let chained = probe.and_then(|_| -> Probe<u8> { panic!("must not run") });
        assert!(matches!(chained, Probe::Unavailable(reason) if reason == "missing"));
    }

    #[test]
    fn test_map_and_from_result() {
        let probe: Probe<u8> = Ok(2).into();
        assert_eq!(probe.map(|v| v * 10).into_value().unwrap(), Some(20));
    }
}
