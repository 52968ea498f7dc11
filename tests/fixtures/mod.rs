// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-subnet
//!
//! Deterministic subnet data shared by the integration tests.
#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::sync::Arc;

use cim_subnet::domain::{build_name, Ipv4Prefix, Subnet, SubnetSpec};
use cim_subnet::{InMemorySubnetService, InMemorySubnetStore, StoreBackedSubnetService};

pub const TEST_SUBNET_ID: &str = "opi-subnet9";
pub const TEST_VPC_ID: &str = "opi-vpc8";

/// `subnets/opi-subnet9`
pub fn test_subnet_name() -> String {
    build_name("subnets", TEST_SUBNET_ID)
}

/// `vpcs/opi-vpc8`
pub fn test_vpc_name() -> String {
    build_name("vpcs", TEST_VPC_ID)
}

/// Spec used across the scenarios: 20.20.20.1/24 in the test VPC
pub fn test_spec() -> SubnetSpec {
    SubnetSpec {
        vpc_name_ref: test_vpc_name(),
        virtual_router_mac: b"qrvMAAAB".to_vec(),
        v4_prefix: Some(Ipv4Prefix::new(Ipv4Addr::new(20, 20, 20, 1), 24)),
        ..Default::default()
    }
}

/// Subnet body as a client would send it (no name)
pub fn test_subnet() -> Subnet {
    Subnet::with_spec(test_spec())
}

/// Service over an empty store
pub fn empty_service() -> InMemorySubnetService {
    InMemorySubnetService::in_memory()
}

/// Service whose store already holds the given entries
pub fn service_with(entries: Vec<(String, Subnet)>) -> InMemorySubnetService {
    StoreBackedSubnetService::new(Arc::new(InMemorySubnetStore::with_subnets(entries)))
}

/// Service holding the test subnet under its canonical name
pub fn seeded_service() -> InMemorySubnetService {
    service_with(vec![(
        test_subnet_name(),
        test_subnet().named(test_subnet_name()),
    )])
}
