//! Built-in host sensors.
//!
//! Python version, host addresses, CPU load, available memory, AC power and
//! ambient temperature/humidity.

mod ambient;
mod cpu;
mod memory;
mod network;
mod power;
mod python;

pub use ambient::{AmbientProbe, RelativeHumidity, Temperature};
pub use cpu::CpuLoad;
pub use memory::RamAvailable;
pub use network::{AddressFamily, HostAddress, IpAddresses};
pub use power::AcStatus;
pub use python::{PythonVersion, ReleaseLevel, VersionInfo, VersionParseError};
