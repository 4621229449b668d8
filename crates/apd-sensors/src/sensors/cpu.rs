//! CPU usage sensor.

use crate::config::CpuConfig;
use apd_sensors_core::{units, Result, Sensor};
use std::time::Duration;
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::debug;

/// Global CPU usage averaged over a sampling window.
pub struct CpuLoad {
    window: Duration,
}

impl CpuLoad {
    /// Creates a CPU sensor sampling over the configured window.
    pub fn new(config: &CpuConfig) -> Self {
        Self {
            window: config.sample_window(),
        }
    }

    /// Returns the sampling window, never shorter than sysinfo's minimum
    /// update interval.
    pub fn window(&self) -> Duration {
        self.window.max(MINIMUM_CPU_UPDATE_INTERVAL)
    }
}

impl Default for CpuLoad {
    fn default() -> Self {
        Self::new(&CpuConfig::default())
    }
}

impl Sensor for CpuLoad {
    /// Usage ratio, 1.0 meaning every core fully busy.
    type Value = f64;
    const TITLE: &'static str = "CPU Usage";

    fn value(&self) -> Result<f64> {
        let window = self.window();
        debug!("Sampling CPU usage over {:?}", window);

        let mut sys = System::new();
        sys.refresh_cpu_usage();
        std::thread::sleep(window);
        sys.refresh_cpu_usage();

        Ok(f64::from(sys.global_cpu_usage()) / 100.0)
    }

    fn format(value: &f64) -> String {
        units::format_percent(*value)
    }
}
