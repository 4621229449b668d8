//! Plain-text sensor report.

use crate::sensor::DynSensor;
use crate::Result;
use console::style;
use std::io::Write;
use tracing::debug;

/// Writes one report entry: the bold title, the described value and a
/// blank line.
///
/// The title is written before the value is read, so a failing data source
/// leaves its title in the output.
pub fn write_entry<W: Write + ?Sized>(out: &mut W, sensor: &dyn DynSensor) -> Result<()> {
    writeln!(out, "{}", style(sensor.title()).bold())?;
    debug!("Reading sensor '{}'", sensor.title());
    let description = sensor.describe()?;
    writeln!(out, "{}", description)?;
    writeln!(out)?;
    Ok(())
}

/// Writes an entry per sensor in order, stopping at the first failure.
pub fn write_report<W: Write + ?Sized>(out: &mut W, sensors: &[Box<dyn DynSensor>]) -> Result<()> {
    for sensor in sensors {
        write_entry(out, sensor.as_ref())?;
    }
    Ok(())
}
