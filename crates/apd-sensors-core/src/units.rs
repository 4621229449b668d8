//! Shared display formatting for sensor values.

/// Binary unit ladder for byte counts.
pub const BYTE_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Step between adjacent entries in [`BYTE_UNITS`].
pub const UNIT_SIZE: u128 = 1024;

/// Formats a ratio (1.0 = 100%) as a percentage with one decimal place.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Formats a byte count in the largest unit that keeps the value at or
/// above 1, e.g. "1.0 KiB". Zero renders as "0.0 B". Counts beyond the
/// largest unit stay in that unit.
pub fn format_bytes(bytes: u128) -> String {
    let max_magnitude = BYTE_UNITS.len() - 1;
    let mut magnitude = 0;
    let mut remaining = bytes;
    while remaining >= UNIT_SIZE && magnitude < max_magnitude {
        remaining /= UNIT_SIZE;
        magnitude += 1;
    }

    let scaled = bytes as f64 / (UNIT_SIZE as f64).powi(magnitude as i32);
    format!("{:.1} {}", scaled, BYTE_UNITS[magnitude])
}

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Formats a Celsius temperature alongside its Fahrenheit equivalent,
/// e.g. "21.5C (70.7F)".
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}C ({:.1}F)", celsius, celsius_to_fahrenheit(celsius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.123), "12.3%");
    }

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0.0 B");
    }

    #[test]
    fn test_format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(1), "1.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
        assert_eq!(format_bytes(1024), "1.0 KiB");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MiB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GiB");
    }

    #[test]
    fn test_format_bytes_clamps_to_largest_unit() {
        let eib = UNIT_SIZE.pow(6);
        assert_eq!(format_bytes(eib), "1.0 EiB");
        assert_eq!(format_bytes(eib * 1024), "1024.0 EiB");
        assert_eq!(format_bytes(eib * 1024 * 1024), "1048576.0 EiB");
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(21.5), "21.5C (70.7F)");
        assert_eq!(format_temperature(0.0), "0.0C (32.0F)");
    }
}
