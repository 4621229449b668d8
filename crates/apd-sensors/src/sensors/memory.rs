//! Available memory sensor.

use apd_sensors_core::{units, Result, Sensor};
use sysinfo::System;

/// Memory available for new allocations, in bytes.
#[derive(Default)]
pub struct RamAvailable;

impl RamAvailable {
    pub fn new() -> Self {
        Self
    }
}

impl Sensor for RamAvailable {
    type Value = u64;
    const TITLE: &'static str = "RAM Available";

    fn value(&self) -> Result<u64> {
        let mut sys = System::new();
        sys.refresh_memory();
        Ok(sys.available_memory())
    }

    fn format(value: &u64) -> String {
        units::format_bytes(u128::from(*value))
    }
}
