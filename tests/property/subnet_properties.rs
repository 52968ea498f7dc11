// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Subnet Identity and Partial Updates
//!
//! Identifier and name grammars, the delete existence policy, wildcard
//! exclusivity of field masks, and preservation of unmasked fields.

use proptest::prelude::*;

use cim_subnet::domain::{build_name, Ipv4Prefix, Subnet, SubnetSpec, SubnetStatus};
use cim_subnet::{
    CreateSubnetRequest, DeleteSubnetRequest, ErrorKind, FieldMask, GetSubnetRequest,
    InMemorySubnetService, SubnetService, UpdateSubnetRequest,
};

use crate::fixtures::{empty_service, service_with};

// ============================================================================
// Strategies
// ============================================================================

/// Leaf paths a mask can name without touching a whole sub-message
const LEAF_PATHS: [&str; 8] = [
    "spec.vpc_name_ref",
    "spec.v4_prefix.addr",
    "spec.v4_prefix.len",
    "spec.ipv4_virtual_router_ip",
    "spec.virtual_router_mac",
    "spec.v4_route_table_name_ref",
    "status.hw_index",
    "status.vnic_count",
];

fn valid_label() -> impl Strategy<Value = String> {
    "[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?"
}

fn valid_name() -> impl Strategy<Value = String> {
    valid_label().prop_map(|id| build_name("subnets", &id))
}

fn illegal_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must be outside [a-z0-9-]", |c| {
        !matches!(c, 'a'..='z' | '0'..='9' | '-')
    })
}

fn bad_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z0-9]{0,10}",
        "-[a-z0-9]{1,10}",
        "[a-z0-9]{1,10}-",
        "[a-z]{64,80}",
        "[a-z0-9]{1,5}[_.!@ ][a-z0-9]{0,5}",
        Just(String::new()),
    ]
}

prop_compose! {
    fn arb_subnet()(
        vpc in valid_label(),
        addr in any::<u32>(),
        len in 0..=32i32,
        router_ip in any::<u32>(),
        mac in prop::collection::vec(any::<u8>(), 0..8),
        route_table in valid_label(),
        hw_index in any::<i32>(),
        vnic_count in any::<i32>(),
    ) -> Subnet {
        Subnet {
            name: String::new(),
            spec: Some(SubnetSpec {
                vpc_name_ref: build_name("vpcs", &vpc),
                v4_prefix: Some(Ipv4Prefix { addr, len }),
                ipv4_virtual_router_ip: router_ip,
                virtual_router_mac: mac,
                v4_route_table_name_ref: build_name("routes", &route_table),
            }),
            status: Some(SubnetStatus { hw_index, vnic_count }),
        }
    }
}

/// Value at a leaf path, rendered for comparison
fn leaf(subnet: &Subnet, path: &str) -> String {
    let spec = subnet.spec.clone().unwrap_or_default();
    let prefix = spec.v4_prefix.unwrap_or_default();
    let status = subnet.status.unwrap_or_default();
    match path {
        "spec.vpc_name_ref" => spec.vpc_name_ref,
        "spec.v4_prefix.addr" => prefix.addr.to_string(),
        "spec.v4_prefix.len" => prefix.len.to_string(),
        "spec.ipv4_virtual_router_ip" => spec.ipv4_virtual_router_ip.to_string(),
        "spec.virtual_router_mac" => format!("{:?}", spec.virtual_router_mac),
        "spec.v4_route_table_name_ref" => spec.v4_route_table_name_ref,
        "status.hw_index" => status.hw_index.to_string(),
        "status.vnic_count" => status.vnic_count.to_string(),
        other => panic!("not a leaf path: {}", other),
    }
}

fn seeded(name: &str, subnet: Subnet) -> InMemorySubnetService {
    let stored = subnet.named(name);
    service_with(vec![(name.to_string(), stored)])
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Create rejects identifiers outside `[a-z0-9-]`
    ///
    /// The error cites the first offending character and its position.
    #[test]
    fn prop_illegal_identifier_rejected(
        prefix in "[a-z0-9-]{0,12}",
        bad in illegal_char(),
        suffix in ".{0,8}",
    ) {
        let id = format!("{}{}{}", prefix, bad, suffix);
        let service = empty_service();

        let err = tokio_test::block_on(
            service.create_subnet(CreateSubnetRequest::new(id, Subnet::default()))
        ).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        prop_assert_eq!(
            err.to_string(),
            format!(
                "user-settable ID must only contain lowercase, numbers and hyphens (got: '{}' in position {})",
                bad,
                prefix.chars().count()
            )
        );
    }

    /// Property: Get, Update and Delete reject names with a malformed segment
    #[test]
    fn prop_malformed_name_rejected(segment in bad_segment(), allow_missing in any::<bool>()) {
        let name = build_name("subnets", &segment);
        let expected = format!("segment '{}': not a valid DNS name", segment);
        let service = empty_service();

        let get = tokio_test::block_on(service.get_subnet(GetSubnetRequest::new(name.clone())));
        let update = tokio_test::block_on(service.update_subnet(UpdateSubnetRequest::new(
            Subnet::default().named(name.clone()),
            None,
        )));
        let delete = tokio_test::block_on(
            service.delete_subnet(DeleteSubnetRequest::new(name, allow_missing))
        );

        for err in [get.unwrap_err(), update.unwrap_err(), delete.unwrap_err()] {
            prop_assert_eq!(err.kind(), ErrorKind::InvalidName);
            prop_assert_eq!(err.to_string(), expected.clone());
        }
    }

    /// Property: Delete with `allow_missing` succeeds for any absent name
    #[test]
    fn prop_delete_allow_missing_is_idempotent(name in valid_name(), repeats in 1..4usize) {
        let service = empty_service();

        for _ in 0..repeats {
            let result = tokio_test::block_on(
                service.delete_subnet(DeleteSubnetRequest::new(name.clone(), true))
            );
            prop_assert_eq!(result, Ok(()));
        }
    }

    /// Property: Delete without `allow_missing` reports the absent name
    #[test]
    fn prop_delete_strict_reports_missing(name in valid_name()) {
        let service = empty_service();

        let err = tokio_test::block_on(
            service.delete_subnet(DeleteSubnetRequest::new(name.clone(), false))
        ).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::NotFound);
        prop_assert_eq!(err.to_string(), format!("unable to find key {}", name));
    }

    /// Property: A wildcard mixed with any other path is rejected
    ///
    /// Holds whether or not the subnet exists, and leaves the store unchanged.
    #[test]
    fn prop_wildcard_must_stand_alone(
        others in prop::collection::vec("[a-z_.]{1,24}", 1..4),
        position in any::<prop::sample::Index>(),
        stored in arb_subnet(),
        payload in arb_subnet(),
        exists in any::<bool>(),
    ) {
        let name = build_name("subnets", "masked");
        let service = if exists { seeded(&name, stored.clone()) } else { empty_service() };

        let mut paths = others;
        paths.insert(position.index(paths.len() + 1), "*".to_string());

        let err = tokio_test::block_on(service.update_subnet(UpdateSubnetRequest::new(
            payload.named(name.clone()),
            Some(FieldMask::new(paths)),
        ))).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::InvalidFieldMask);
        prop_assert_eq!(
            err.to_string(),
            "invalid field path: '*' must not be used with other paths"
        );

        let after = tokio_test::block_on(service.get_subnet(GetSubnetRequest::new(name)));
        if exists {
            prop_assert_eq!(after.unwrap().spec, stored.spec);
        } else {
            prop_assert_eq!(after.unwrap_err().kind(), ErrorKind::NotFound);
        }
    }

    /// Property: Update changes exactly the masked leaves
    ///
    /// Every leaf outside the mask keeps its stored value; every leaf in the
    /// mask takes the payload's value.
    #[test]
    fn prop_partial_update_preserves_unmasked(
        stored in arb_subnet(),
        payload in arb_subnet(),
        masked in prop::sample::subsequence(LEAF_PATHS.to_vec(), 1..=LEAF_PATHS.len()),
    ) {
        let name = build_name("subnets", "partial");
        let service = seeded(&name, stored.clone());

        let updated = tokio_test::block_on(service.update_subnet(UpdateSubnetRequest::new(
            payload.clone().named(name.clone()),
            Some(FieldMask::new(masked.iter().copied())),
        ))).unwrap();

        prop_assert_eq!(&updated.name, &name);
        for path in LEAF_PATHS {
            let expected = if masked.contains(&path) {
                leaf(&payload, path)
            } else {
                leaf(&stored, path)
            };
            prop_assert_eq!(leaf(&updated, path), expected, "leaf {}", path);
        }
    }
}
