// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Domain Models
//!
//! Resource identity and the subnet value objects.
//!
//! - [`build_name`] / [`validate_name`] - canonical `collection/id` names whose
//!   segments are DNS labels
//! - [`validate_identifier`] - character rules for user-settable IDs
//! - [`Subnet`] - the resource with its spec and status payload

pub mod identifier;
pub mod resource_name;
pub mod subnet;

pub use identifier::{generate_identifier, validate_identifier};
pub use resource_name::{build_name, is_dns_label, validate_name, SUBNET_COLLECTION};
pub use subnet::{Ipv4Prefix, Subnet, SubnetSpec, SubnetStatus};
