//! AC power status sensor.

use apd_sensors_core::{Error, Probe, Result, Sensor, UNKNOWN};
use battery::State;
use std::error::Error as _;
use std::io;
use tracing::debug;

/// Derives the AC state from battery states.
///
/// A charging or full battery means external power is connected; a
/// discharging or empty one means it is not.
fn ac_connected(states: impl IntoIterator<Item = State>) -> Probe<bool> {
    let mut seen = 0;
    let mut discharging = false;
    for state in states {
        seen += 1;
        match state {
            State::Charging | State::Full => return Probe::Available(true),
            State::Discharging | State::Empty => discharging = true,
            _ => {}
        }
    }

    if discharging {
        Probe::Available(false)
    } else if seen == 0 {
        Probe::unavailable("no battery present")
    } else {
        Probe::unavailable("battery state unknown")
    }
}

/// Sorts a failed battery query into expected absence or a failure.
fn battery_failure(err: battery::Error) -> Probe<bool> {
    let kind = err
        .source()
        .and_then(|source| source.downcast_ref::<io::Error>())
        .map(io::Error::kind);
    failure_from_kind(kind, err.to_string())
}

/// Hosts without a power supply class, or without access to it, report
/// "Unknown" rather than failing.
fn failure_from_kind(kind: Option<io::ErrorKind>, message: String) -> Probe<bool> {
    match kind {
        Some(io::ErrorKind::NotFound) => Probe::unavailable("no power supply information"),
        Some(io::ErrorKind::PermissionDenied) => {
            Probe::unavailable("no permission to read power supply information")
        }
        _ => Probe::Failed(Error::data_source(AcStatus::TITLE, message)),
    }
}

/// Whether the host runs on external power.
#[derive(Default)]
pub struct AcStatus;

impl AcStatus {
    pub fn new() -> Self {
        Self
    }

    fn probe(&self) -> Probe<bool> {
        let manager = match battery::Manager::new() {
            Ok(manager) => manager,
            Err(e) => return Probe::unavailable(format!("battery support unavailable: {}", e)),
        };

        let batteries = match manager.batteries() {
            Ok(batteries) => batteries,
            Err(e) => return battery_failure(e),
        };

        let mut states = Vec::new();
        for entry in batteries {
            match entry {
                Ok(battery) => states.push(battery.state()),
                Err(e) => return battery_failure(e),
            }
        }
        debug!("Battery states: {:?}", states);

        ac_connected(states)
    }
}

impl Sensor for AcStatus {
    type Value = Option<bool>;
    const TITLE: &'static str = "AC Connected";

    fn value(&self) -> Result<Self::Value> {
        self.probe().into_value()
    }

    fn format(value: &Self::Value) -> String {
        match value {
            None => UNKNOWN.to_string(),
            Some(true) => "Connected".to_string(),
            Some(false) => "Not connected".to_string(),
        }
    }
}
