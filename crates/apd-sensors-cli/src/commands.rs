//! Command handlers, writing to caller-supplied streams.

use anyhow::{Context, Result};
use apd_sensors_core::{report, DynSensor, Registry};
use console::style;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReturnCode {
    Ok = 0,
    /// The `develop` path did not resolve to a sensor.
    BadSensorPath = 17,
}

impl From<ReturnCode> for ExitCode {
    fn from(code: ReturnCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Prints every sensor in order.
pub fn show<W: Write>(out: &mut W, sensors: &[Box<dyn DynSensor>]) -> Result<ReturnCode> {
    report::write_report(out, sensors).context("Failed to read sensors")?;
    Ok(ReturnCode::Ok)
}

/// Resolves `path` and prints that one sensor.
///
/// A path that does not resolve is reported on `err` and nothing is written
/// to `out`.
pub fn develop<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    registry: &Registry,
    path: &str,
) -> Result<ReturnCode> {
    let sensor = match registry.resolve(path) {
        Ok(sensor) => sensor,
        Err(e) => {
            debug!("Resolution of '{}' failed: {:?}", path, e);
            writeln!(err, "{}", style(&e).red().bold())?;
            return Ok(ReturnCode::BadSensorPath);
        }
    };

    report::write_entry(out, sensor.as_ref())
        .with_context(|| format!("Failed to read sensor {}", path))?;
    Ok(ReturnCode::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apd_sensors_core::{Container, Sensor, UNKNOWN};

    #[derive(Default)]
    struct Hygrometer;

    impl Sensor for Hygrometer {
        type Value = Option<f64>;
        const TITLE: &'static str = "Hygrometer";

        fn value(&self) -> apd_sensors_core::Result<Option<f64>> {
            Ok(None)
        }

        fn format(value: &Option<f64>) -> String {
            value.map_or_else(|| UNKNOWN.to_string(), |v| format!("{:.1}", v))
        }
    }

    fn registry() -> Registry {
        Registry::new().with(
            Container::new("dev.sensors")
                .sensor::<Hygrometer>("Hygrometer")
                .contract("Sensor"),
        )
    }

    fn run_develop(path: &str) -> (ReturnCode, String, String) {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = develop(&mut out, &mut err, &registry(), path).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_develop_prints_resolved_sensor() {
        let (code, out, err) = run_develop("dev.sensors:Hygrometer");
        assert_eq!(code, ReturnCode::Ok);
        assert_eq!(out, "Hygrometer\nUnknown\n\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_develop_malformed_path() {
        let (code, out, err) = run_develop("dev.sensors.Hygrometer");
        assert_eq!(code, ReturnCode::BadSensorPath);
        assert!(out.is_empty());
        assert!(err.starts_with("Sensor path must be in the format"));
    }

    #[test]
    fn test_develop_failures_share_exit_code() {
        for path in [
            "dev.sensors",
            "dev.missing:Hygrometer",
            "dev.sensors:Barometer",
            "dev.sensors:Sensor",
        ] {
            let (code, out, err) = run_develop(path);
            assert_eq!(code, ReturnCode::BadSensorPath, "{}", path);
            assert!(out.is_empty(), "{}", path);
            assert!(!err.trim().is_empty(), "{}", path);
        }
    }

    #[test]
    fn test_show_prints_every_sensor() {
        console::set_colors_enabled(false);
        let sensors: Vec<Box<dyn DynSensor>> = vec![Box::new(Hygrometer), Box::new(Hygrometer)];
        let mut out = Vec::new();
        assert_eq!(show(&mut out, &sensors).unwrap(), ReturnCode::Ok);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hygrometer\nUnknown\n\nHygrometer\nUnknown\n\n"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ReturnCode::Ok as u8, 0);
        assert_eq!(ReturnCode::BadSensorPath as u8, 17);
    }
}
