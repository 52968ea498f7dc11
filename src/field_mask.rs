// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field Masks for Partial Subnet Updates
//!
//! An update mask lists the dot-delimited paths an update may replace. Every
//! field not named by the mask keeps its stored value.
//!
//! # Rules
//!
//! - No mask, an empty mask, or the lone wildcard `*` replaces the whole
//!   mutable payload (`spec` and `status`). The name is never replaced.
//! - `*` combined with any other path is rejected.
//! - Paths that do not name a subnet field are rejected, `name` included.
//! - A path naming a sub-message (`spec`, `spec.v4_prefix`, `status`) copies
//!   that sub-message wholesale.
//! - A leaf path creates a missing destination sub-message with defaults, and
//!   reads the default value when the source sub-message is unset.
//!
//! ```text
//! stored  { spec.vpc_name_ref = "a", spec.v4_prefix = 10.0.0.0/8 }
//! update  { spec.vpc_name_ref = "b", spec.v4_prefix = 20.0.0.0/8 }
//! mask    [ "spec.vpc_name_ref" ]
//! result  { spec.vpc_name_ref = "b", spec.v4_prefix = 10.0.0.0/8 }
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{Subnet, SubnetSpec, SubnetStatus};
use crate::errors::{FieldMaskError, SubnetResult};

/// The wildcard path
pub const WILDCARD_PATH: &str = "*";

/// Ordered set of field paths
///
/// Encoded in JSON as a single comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    pub paths: Vec<String>,
}

impl FieldMask {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Mask that replaces every mutable field
    pub fn wildcard() -> Self {
        Self::new([WILDCARD_PATH])
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether this mask selects the full payload
    pub fn is_full_replace(&self) -> bool {
        self.paths.is_empty() || (self.paths.len() == 1 && self.paths[0] == WILDCARD_PATH)
    }
}

impl Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.paths.join(","))
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(PathVisitor)
    }
}

struct PathVisitor;

impl serde::de::Visitor<'_> for PathVisitor {
    type Value = FieldMask;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with comma-separated field mask paths")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.is_empty() {
            Ok(FieldMask::default())
        } else {
            Ok(FieldMask::new(value.split(',')))
        }
    }
}

/// Maskable subnet fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubnetField {
    Spec,
    VpcNameRef,
    V4Prefix,
    V4PrefixAddr,
    V4PrefixLen,
    Ipv4VirtualRouterIp,
    VirtualRouterMac,
    V4RouteTableNameRef,
    Status,
    HwIndex,
    VnicCount,
}

impl SubnetField {
    pub const ALL: [SubnetField; 11] = [
        SubnetField::Spec,
        SubnetField::VpcNameRef,
        SubnetField::V4Prefix,
        SubnetField::V4PrefixAddr,
        SubnetField::V4PrefixLen,
        SubnetField::Ipv4VirtualRouterIp,
        SubnetField::VirtualRouterMac,
        SubnetField::V4RouteTableNameRef,
        SubnetField::Status,
        SubnetField::HwIndex,
        SubnetField::VnicCount,
    ];

    /// Dot-delimited path of this field
    pub fn path(&self) -> &'static str {
        match self {
            SubnetField::Spec => "spec",
            SubnetField::VpcNameRef => "spec.vpc_name_ref",
            SubnetField::V4Prefix => "spec.v4_prefix",
            SubnetField::V4PrefixAddr => "spec.v4_prefix.addr",
            SubnetField::V4PrefixLen => "spec.v4_prefix.len",
            SubnetField::Ipv4VirtualRouterIp => "spec.ipv4_virtual_router_ip",
            SubnetField::VirtualRouterMac => "spec.virtual_router_mac",
            SubnetField::V4RouteTableNameRef => "spec.v4_route_table_name_ref",
            SubnetField::Status => "status",
            SubnetField::HwIndex => "status.hw_index",
            SubnetField::VnicCount => "status.vnic_count",
        }
    }

    /// Copy this field's value from `src` into `dst`
    pub fn copy(&self, dst: &mut Subnet, src: &Subnet) {
        match self {
            SubnetField::Spec => dst.spec = src.spec.clone(),
            SubnetField::Status => dst.status = src.status,
            SubnetField::VpcNameRef => {
                spec_mut(dst).vpc_name_ref = spec_of(src).vpc_name_ref.clone();
            }
            SubnetField::V4Prefix => spec_mut(dst).v4_prefix = spec_of(src).v4_prefix,
            SubnetField::V4PrefixAddr => {
                let addr = spec_of(src).v4_prefix.unwrap_or_default().addr;
                spec_mut(dst).v4_prefix.get_or_insert_with(Default::default).addr = addr;
            }
            SubnetField::V4PrefixLen => {
                let len = spec_of(src).v4_prefix.unwrap_or_default().len;
                spec_mut(dst).v4_prefix.get_or_insert_with(Default::default).len = len;
            }
            SubnetField::Ipv4VirtualRouterIp => {
                spec_mut(dst).ipv4_virtual_router_ip = spec_of(src).ipv4_virtual_router_ip;
            }
            SubnetField::VirtualRouterMac => {
                spec_mut(dst).virtual_router_mac = spec_of(src).virtual_router_mac.clone();
            }
            SubnetField::V4RouteTableNameRef => {
                spec_mut(dst).v4_route_table_name_ref =
                    spec_of(src).v4_route_table_name_ref.clone();
            }
            SubnetField::HwIndex => {
                status_mut(dst).hw_index = src.status.unwrap_or_default().hw_index;
            }
            SubnetField::VnicCount => {
                status_mut(dst).vnic_count = src.status.unwrap_or_default().vnic_count;
            }
        }
    }
}

impl FromStr for SubnetField {
    type Err = FieldMaskError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        SubnetField::ALL
            .into_iter()
            .find(|field| field.path() == path)
            .ok_or_else(|| FieldMaskError::UnknownPath(path.to_string()))
    }
}

fn spec_of(subnet: &Subnet) -> std::borrow::Cow<'_, SubnetSpec> {
    match &subnet.spec {
        Some(spec) => std::borrow::Cow::Borrowed(spec),
        None => std::borrow::Cow::Owned(SubnetSpec::default()),
    }
}

fn spec_mut(subnet: &mut Subnet) -> &mut SubnetSpec {
    subnet.spec.get_or_insert_with(Default::default)
}

fn status_mut(subnet: &mut Subnet) -> &mut SubnetStatus {
    subnet.status.get_or_insert_with(Default::default)
}

/// Check the shape of a mask and resolve its paths
///
/// Returns an empty list for full-replace masks.
pub fn validate_mask(mask: Option<&FieldMask>) -> Result<Vec<SubnetField>, FieldMaskError> {
    let Some(mask) = mask else {
        return Ok(Vec::new());
    };

    if mask.paths.len() > 1 && mask.paths.iter().any(|p| p == WILDCARD_PATH) {
        return Err(FieldMaskError::WildcardWithOtherPaths);
    }

    if mask.is_full_replace() {
        return Ok(Vec::new());
    }

    let mut fields = Vec::with_capacity(mask.paths.len());
    for path in &mask.paths {
        let field: SubnetField = path.parse()?;
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    Ok(fields)
}

/// Merge `src` into `dst` restricted to the mask
///
/// `dst.name` is left untouched in every case. On error `dst` is unchanged.
pub fn apply_mask(dst: &mut Subnet, src: &Subnet, mask: Option<&FieldMask>) -> SubnetResult<()> {
    let fields = validate_mask(mask)?;

    if fields.is_empty() {
        dst.spec = src.spec.clone();
        dst.status = src.status;
        return Ok(());
    }

    for field in fields {
        field.copy(dst, src);
    }
    Ok(())
}
