// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Subnet Management
//!
//! The application service that turns caller requests into validated store
//! transactions.
//!
//! # Architecture
//!
//! ```text
//! Transport (NATS request/reply)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Name / identifier validation → Field mask applier
//!     ↓
//! Subnet Store (per-name guarded)
//! ```
//!
//! # Example
//!
//! ```rust
//! use cim_subnet::domain::{Subnet, SubnetSpec};
//! use cim_subnet::service::{CreateSubnetRequest, InMemorySubnetService, SubnetService};
//!
//! # tokio_test::block_on(async {
//! let service = InMemorySubnetService::in_memory();
//! let subnet = service
//!     .create_subnet(CreateSubnetRequest::new(
//!         "opi-subnet9",
//!         Subnet::with_spec(SubnetSpec::default()),
//!     ))
//!     .await
//!     .unwrap();
//! assert_eq!(subnet.name, "subnets/opi-subnet9");
//! # });
//! ```

pub mod requests;
pub mod subnet;

pub use requests::{
    CreateSubnetRequest, DeleteSubnetRequest, GetSubnetRequest, UpdateSubnetRequest,
};
pub use subnet::{InMemorySubnetService, StoreBackedSubnetService, SubnetService};
