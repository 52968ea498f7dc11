// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Resource Model
//!
//! A [`Subnet`] is identified by its canonical name and carries a mutable
//! [`SubnetSpec`] (desired configuration) and [`SubnetStatus`] (observed
//! state). Unset sub-messages are `None`, mirroring the wire model where an
//! absent message reads as its default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Subnet resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    /// Canonical name, e.g. `subnets/opi-subnet9`
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<SubnetSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubnetStatus>,
}

impl Subnet {
    /// Create a subnet carrying only a spec
    pub fn with_spec(spec: SubnetSpec) -> Self {
        Self {
            name: String::new(),
            spec: Some(spec),
            status: None,
        }
    }

    /// Copy of this subnet under a different name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Desired subnet configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubnetSpec {
    /// Name of the VPC this subnet belongs to
    pub vpc_name_ref: String,

    pub v4_prefix: Option<Ipv4Prefix>,

    /// Virtual router gateway address, host byte order
    pub ipv4_virtual_router_ip: u32,

    /// Virtual router MAC address, raw bytes
    pub virtual_router_mac: Vec<u8>,

    pub v4_route_table_name_ref: String,
}

/// Observed subnet state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubnetStatus {
    pub hw_index: i32,
    pub vnic_count: i32,
}

/// IPv4 prefix as a host-order address plus prefix length
///
/// # Examples
///
/// ```rust
/// use cim_subnet::domain::Ipv4Prefix;
/// use std::net::Ipv4Addr;
///
/// let prefix = Ipv4Prefix::new(Ipv4Addr::new(20, 20, 20, 1), 24);
/// assert_eq!(prefix.addr, 336860161);
/// assert_eq!(prefix.to_string(), "20.20.20.1/24");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Ipv4Prefix {
    pub addr: u32,
    pub len: i32,
}

impl Ipv4Prefix {
    pub fn new(address: Ipv4Addr, len: i32) -> Self {
        Self {
            addr: u32::from(address),
            len,
        }
    }

    /// Get the address
    pub fn address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.addr)
    }
}

impl fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address(), self.len)
    }
}
