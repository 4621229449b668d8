//! The built-in sensor list and the `apd.sensors` container.

use crate::config::SensorsConfig;
use crate::sensors::{
    AcStatus, CpuLoad, IpAddresses, PythonVersion, RamAvailable, RelativeHumidity, Temperature,
};
use apd_sensors_core::{Container, DynSensor, ItemKind, Registry};

/// Name of the container holding the built-in sensors.
pub const CONTAINER: &str = "apd.sensors";

/// All built-in sensors, in report order.
pub fn get_sensors(config: &SensorsConfig) -> Vec<Box<dyn DynSensor>> {
    vec![
        Box::new(PythonVersion::new(&config.python)),
        Box::new(IpAddresses::new()),
        Box::new(CpuLoad::new(&config.cpu)),
        Box::new(RamAvailable::new()),
        Box::new(AcStatus::new()),
        Box::new(Temperature::new(&config.ambient)),
        Box::new(RelativeHumidity::new(&config.ambient)),
    ]
}

/// The `apd.sensors` container.
pub fn container() -> Container {
    Container::new(CONTAINER)
        .contract("Sensor")
        .sensor::<PythonVersion>("PythonVersion")
        .sensor::<IpAddresses>("IPAddresses")
        .sensor::<CpuLoad>("CPULoad")
        .sensor::<RamAvailable>("RAMAvailable")
        .sensor::<AcStatus>("ACStatus")
        .sensor::<Temperature>("Temperature")
        .sensor::<RelativeHumidity>("RelativeHumidity")
        .item("SensorsConfig", ItemKind::Type)
        .item("get_sensors", ItemKind::Function)
        .item("UNKNOWN", ItemKind::Constant)
}

/// A registry containing the built-in container.
pub fn registry() -> Registry {
    Registry::new().with(container())
}
