//! The sensor contract.
//!
//! A sensor reads a typed value from a live data source and renders any value
//! of that type as display text. Reading is impure and may yield an "unknown"
//! value; formatting is pure and total, so it can be tested without hardware.

use crate::Result;

/// Display text for a value the data source could not provide.
pub const UNKNOWN: &str = "Unknown";

/// Trait for all sensors.
pub trait Sensor {
    /// Raw value produced by this sensor.
    type Value;

    /// Section header shown above the sensor's output.
    const TITLE: &'static str;

    /// Reads the current value.
    ///
    /// Expected absence (no peripheral, unsupported platform) must be folded
    /// into `Self::Value`. Only unexpected data source failures are returned
    /// as errors.
    fn value(&self) -> Result<Self::Value>;

    /// Renders a value for display. Must not fail for any value that
    /// [`Sensor::value`] can return.
    fn format(value: &Self::Value) -> String;

    /// Reads and formats the current value.
    fn describe(&self) -> Result<String> {
        Ok(Self::format(&self.value()?))
    }
}

/// Object-safe view of a [`Sensor`], with the value type erased.
///
/// Every `Sensor` implements this, so heterogeneous sensors can share a
/// `Vec<Box<dyn DynSensor>>`.
pub trait DynSensor {
    /// Section header shown above the sensor's output.
    fn title(&self) -> &'static str;

    /// Reads and formats the current value.
    fn describe(&self) -> Result<String>;
}

impl<S: Sensor> DynSensor for S {
    fn title(&self) -> &'static str {
        S::TITLE
    }

    fn describe(&self) -> Result<String> {
        Sensor::describe(self)
    }
}
