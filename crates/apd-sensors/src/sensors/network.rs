//! Host IP address sensor.

use apd_sensors_core::{Error, Result, Sensor};
use std::fmt;
use std::net::{IpAddr, ToSocketAddrs};
use sysinfo::System;
use tracing::debug;

/// Address family of a resolved host address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Inet,
    Inet6,
    /// Any other family by raw `AF_*` number. Resolution never yields one;
    /// it only appears in hand-built values.
    Other(i32),
}

impl AddressFamily {
    /// Display label, or `None` for families that are not reported.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AddressFamily::Inet => Some("IPv4"),
            AddressFamily::Inet6 => Some("IPv6"),
            AddressFamily::Other(_) => None,
        }
    }
}

/// A host address together with its family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostAddress {
    pub family: AddressFamily,
    pub address: String,
}

impl HostAddress {
    pub fn new(family: AddressFamily, address: impl Into<String>) -> Self {
        Self {
            family,
            address: address.into(),
        }
    }
}

impl From<IpAddr> for HostAddress {
    fn from(ip: IpAddr) -> Self {
        let family = match ip {
            IpAddr::V4(_) => AddressFamily::Inet,
            IpAddr::V6(_) => AddressFamily::Inet6,
        };
        HostAddress::new(family, ip.to_string())
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family.label() {
            Some(label) => write!(f, "{} ({})", self.address, label),
            None => write!(f, "{}", self.address),
        }
    }
}

/// Keeps the first occurrence of each address, dropping unreported families.
fn unique_reported(addresses: impl IntoIterator<Item = HostAddress>) -> Vec<HostAddress> {
    let mut unique: Vec<HostAddress> = Vec::new();
    for address in addresses {
        if address.family.label().is_some() && !unique.contains(&address) {
            unique.push(address);
        }
    }
    unique
}

/// Addresses the host name resolves to.
#[derive(Default)]
pub struct IpAddresses;

impl IpAddresses {
    pub fn new() -> Self {
        Self
    }
}

impl Sensor for IpAddresses {
    type Value = Vec<HostAddress>;
    const TITLE: &'static str = "IP Addresses";

    fn value(&self) -> Result<Self::Value> {
        let hostname = System::host_name()
            .ok_or_else(|| Error::data_source(Self::TITLE, "host name is not available"))?;
        debug!("Resolving addresses of {}", hostname);

        let resolved = (hostname.as_str(), 0).to_socket_addrs()?;
        Ok(unique_reported(resolved.map(|addr| HostAddress::from(addr.ip()))))
    }

    fn format(value: &Self::Value) -> String {
        unique_reported(value.iter().cloned())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_from_ip() {
        let v4: HostAddress = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)).into();
        assert_eq!(v4, HostAddress::new(AddressFamily::Inet, "192.168.1.10"));

        let v6: HostAddress = IpAddr::V6(Ipv6Addr::LOCALHOST).into();
        assert_eq!(v6, HostAddress::new(AddressFamily::Inet6, "::1"));
    }

    #[test]
    fn test_format_one_line_per_address() {
        let value = vec![
            HostAddress::new(AddressFamily::Inet, "10.0.0.2"),
            HostAddress::new(AddressFamily::Inet6, "fd00::2"),
        ];
        assert_eq!(
            IpAddresses::format(&value),
            "10.0.0.2 (IPv4)\nfd00::2 (IPv6)"
        );
    }

    #[test]
    fn test_format_collapses_duplicates() {
        let value = vec![
            HostAddress::new(AddressFamily::Inet, "10.0.0.2"),
            HostAddress::new(AddressFamily::Inet, "10.0.0.2"),
            HostAddress::new(AddressFamily::Inet6, "10.0.0.2"),
            HostAddress::new(AddressFamily::Inet, "10.0.0.2"),
        ];
        assert_eq!(
            IpAddresses::format(&value),
            "10.0.0.2 (IPv4)\n10.0.0.2 (IPv6)"
        );
    }

    #[test]
    fn test_format_drops_unknown_families() {
        let value = vec![
            HostAddress::new(AddressFamily::Other(1), "/run/socket"),
            HostAddress::new(AddressFamily::Inet, "127.0.0.1"),
            HostAddress::new(AddressFamily::Other(17), "00:11:22:33:44:55"),
        ];
        let formatted = IpAddresses::format(&value);
        assert_eq!(formatted, "127.0.0.1 (IPv4)");
        assert!(!formatted.contains("Unknown"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(IpAddresses::format(&Vec::new()), "");
    }
}
