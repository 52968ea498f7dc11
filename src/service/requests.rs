// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request types for subnet operations
//!
//! Requests carry unvalidated caller input; the service validates them.

use serde::{Deserialize, Serialize};

use crate::domain::Subnet;
use crate::field_mask::FieldMask;

/// Create a subnet under a user-settable or system-generated identifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubnetRequest {
    /// Owning parent; recorded for logging only
    #[serde(default)]
    pub parent: String,

    /// Short identifier; empty means generate one
    #[serde(default)]
    pub subnet_id: String,

    /// Resource body; any name it carries is replaced
    pub subnet: Subnet,
}

impl CreateSubnetRequest {
    pub fn new(subnet_id: impl Into<String>, subnet: Subnet) -> Self {
        Self {
            parent: String::new(),
            subnet_id: subnet_id.into(),
            subnet,
        }
    }
}

/// Fetch a subnet by canonical name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSubnetRequest {
    pub name: String,
}

impl GetSubnetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Partially update a subnet addressed by the payload's name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSubnetRequest {
    pub subnet: Subnet,

    /// Paths to replace; absent means full replace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,

    /// Store the payload as a new subnet when the name is absent
    #[serde(default)]
    pub allow_missing: bool,
}

impl UpdateSubnetRequest {
    pub fn new(subnet: Subnet, update_mask: Option<FieldMask>) -> Self {
        Self {
            subnet,
            update_mask,
            allow_missing: false,
        }
    }
}

/// Delete a subnet by canonical name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSubnetRequest {
    pub name: String,

    /// Treat an absent subnet as already deleted
    #[serde(default)]
    pub allow_missing: bool,
}

impl DeleteSubnetRequest {
    pub fn new(name: impl Into<String>, allow_missing: bool) -> Self {
        Self {
            name: name.into(),
            allow_missing,
        }
    }
}
