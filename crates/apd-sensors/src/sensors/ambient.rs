//! Ambient temperature and humidity sensors.
//!
//! Readings come from a DHT-family peripheral exposed by the kernel's IIO
//! `dht11` driver (which also handles DHT22). Each device lives under
//! `/sys/bus/iio/devices/iio:deviceN` with a `name` file and one file per
//! channel holding milli-units. Hosts without the peripheral are normal and
//! report "Unknown".

use crate::config::AmbientConfig;
use apd_sensors_core::{units, Error, Probe, Result, Sensor, UNKNOWN};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const TEMPERATURE_CHANNEL: &str = "in_temp_input";
const HUMIDITY_CHANNEL: &str = "in_humidityrelative_input";

/// Returns true for errors the driver raises when the one-wire exchange
/// with the peripheral fails. Retrying later usually succeeds.
fn is_bus_error(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::TimedOut
        || matches!(
            err.raw_os_error(),
            Some(libc::EIO) | Some(libc::ETIMEDOUT) | Some(libc::EAGAIN)
        )
}

/// Sorts a failed read into expected absence (bus errors, missing
/// permission) or an unexpected failure.
fn read_failure<T>(err: io::Error, what: &str) -> Probe<T> {
    if is_bus_error(&err) {
        Probe::unavailable(format!("reading {} failed: {}", what, err))
    } else if err.kind() == io::ErrorKind::PermissionDenied {
        Probe::unavailable(format!("no permission to read {}", what))
    } else {
        Probe::Failed(err.into())
    }
}

/// Locates and reads the ambient peripheral.
#[derive(Debug, Clone)]
pub struct AmbientProbe {
    iio_root: PathBuf,
    device_name: String,
}

impl AmbientProbe {
    pub fn new(config: &AmbientConfig) -> Self {
        Self {
            iio_root: config.iio_root.clone(),
            device_name: config.device_name.clone(),
        }
    }

    /// Finds the IIO device whose `name` matches the configured driver.
    pub fn find_device(&self) -> Probe<PathBuf> {
        let entries = match fs::read_dir(&self.iio_root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Probe::unavailable(format!("{} does not exist", self.iio_root.display()));
            }
            Err(e) => return read_failure(e, &self.iio_root.display().to_string()),
        };

        let mut devices: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
        devices.sort();

        for device in devices {
            let Ok(name) = fs::read_to_string(device.join("name")) else {
                continue;
            };
            if name.trim() == self.device_name {
                debug!("Found {} at {}", self.device_name, device.display());
                return Probe::Available(device);
            }
        }

        Probe::unavailable(format!("no {} device present", self.device_name))
    }

    /// Reads a channel of the device, in milli-units. `sensor` is the title
    /// reported if the reading is garbled.
    pub fn read_channel(&self, sensor: &'static str, channel: &str) -> Probe<i64> {
        self.find_device()
            .and_then(|device| read_milli(sensor, &device.join(channel), channel))
    }
}

impl Default for AmbientProbe {
    fn default() -> Self {
        Self::new(&AmbientConfig::default())
    }
}

fn read_milli(sensor: &'static str, path: &Path, channel: &str) -> Probe<i64> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return read_failure(e, channel),
    };

    match content.trim().parse::<i64>() {
        Ok(value) => Probe::Available(value),
        Err(_) => Probe::Failed(Error::data_source(
            sensor,
            format!("unexpected {} reading: {:?}", channel, content.trim()),
        )),
    }
}

/// Ambient temperature in degrees Celsius.
#[derive(Default)]
pub struct Temperature {
    probe: AmbientProbe,
}

impl Temperature {
    pub fn new(config: &AmbientConfig) -> Self {
        Self {
            probe: AmbientProbe::new(config),
        }
    }
}

impl Sensor for Temperature {
    type Value = Option<f64>;
    const TITLE: &'static str = "Ambient Temperature";

    fn value(&self) -> Result<Self::Value> {
        self.probe
            .read_channel(Self::TITLE, TEMPERATURE_CHANNEL)
            .map(|milli| milli as f64 / 1000.0)
            .into_value()
    }

    fn format(value: &Self::Value) -> String {
        match value {
            Some(celsius) => units::format_temperature(*celsius),
            None => UNKNOWN.to_string(),
        }
    }
}

/// Relative humidity as a ratio (1.0 = 100%).
#[derive(Default)]
pub struct RelativeHumidity {
    probe: AmbientProbe,
}

impl RelativeHumidity {
    pub fn new(config: &AmbientConfig) -> Self {
        Self {
            probe: AmbientProbe::new(config),
        }
    }
}

impl Sensor for RelativeHumidity {
    type Value = Option<f64>;
    const TITLE: &'static str = "Relative Humidity";

    fn value(&self) -> Result<Self::Value> {
        self.probe
            .read_channel(Self::TITLE, HUMIDITY_CHANNEL)
            .map(|milli_percent| milli_percent as f64 / 100_000.0)
            .into_value()
    }

    fn format(value: &Self::Value) -> String {
        match value {
            Some(ratio) => units::format_percent(*ratio),
            None => UNKNOWN.to_string(),
        }
    }
}
