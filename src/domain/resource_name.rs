// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical Resource Names with DNS-Label Segment Invariants
//!
//! A canonical name is a `/`-separated path such as `subnets/opi-subnet9`.
//! Every segment must be a lowercase DNS label (RFC 1123):
//! - Non-empty, at most 63 characters
//! - Lowercase ASCII letters, digits and hyphens only
//! - Does not start or end with a hyphen

use crate::errors::{SubnetError, SubnetResult};

/// Collection segment for subnet resources
pub const SUBNET_COLLECTION: &str = "subnets";

/// Maximum length of a single segment (RFC 1123 label)
pub const MAX_SEGMENT_LENGTH: usize = 63;

/// Compose a canonical name from a collection and a short identifier
///
/// No validation is performed; callers validate the identifier first.
///
/// ```rust
/// use cim_subnet::domain::build_name;
///
/// assert_eq!(build_name("subnets", "opi-subnet9"), "subnets/opi-subnet9");
/// ```
pub fn build_name(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}

/// Validate every segment of a canonical name
///
/// Fails on the first segment that is not a DNS label.
pub fn validate_name(name: &str) -> SubnetResult<()> {
    for segment in name.split('/') {
        if !is_dns_label(segment) {
            return Err(SubnetError::InvalidName {
                segment: segment.to_string(),
            });
        }
    }
    Ok(())
}

/// Check a single segment against the lowercase DNS-label grammar
pub fn is_dns_label(segment: &str) -> bool {
    if segment.is_empty() || segment.len() > MAX_SEGMENT_LENGTH {
        return false;
    }

    if segment.starts_with('-') || segment.ends_with('-') {
        return false;
    }

    segment
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
