// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet resource service for the Composable Information Machine
//!
//! Create, get, update and delete subnets addressed by canonical names such
//! as `subnets/opi-subnet9`. The crate covers resource identity (name and
//! identifier validation), field-mask partial updates, the existence policy
//! of each operation, and a NATS request/reply transport in front of it.

pub mod config;
pub mod domain;
pub mod errors;
pub mod field_mask;
pub mod nats;
pub mod service;
pub mod store;
pub mod subjects;

// Re-export commonly used types
pub use config::{NatsConfig, SubnetServerConfig};
pub use domain::{Ipv4Prefix, Subnet, SubnetSpec, SubnetStatus};
pub use errors::{
    ErrorKind, FieldMaskError, InfrastructureError, InfrastructureResult, SubnetError,
    SubnetResult,
};
pub use field_mask::FieldMask;
pub use nats::{NatsClient, SubnetRequestHandler, SubnetResponse};
pub use service::{
    CreateSubnetRequest, DeleteSubnetRequest, GetSubnetRequest, InMemorySubnetService,
    StoreBackedSubnetService, SubnetService, UpdateSubnetRequest,
};
pub use store::{InMemorySubnetStore, SubnetStore};
