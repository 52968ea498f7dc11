// Copyright (c) 2025 - Cowboy AI, Inc.
//! User-settable and system-generated resource identifiers

use uuid::Uuid;

use crate::errors::{SubnetError, SubnetResult};

/// Validate a user-supplied short identifier
///
/// Only lowercase ASCII letters, digits and hyphens are allowed. The error
/// reports the first offending character and its zero-based position.
pub fn validate_identifier(id: &str) -> SubnetResult<()> {
    for (position, character) in id.chars().enumerate() {
        match character {
            'a'..='z' | '0'..='9' | '-' => {}
            _ => {
                return Err(SubnetError::InvalidIdentifier {
                    character,
                    position,
                })
            }
        }
    }
    Ok(())
}

/// Generate an identifier for requests that leave it empty
///
/// UUIDv7 text is lowercase hex and hyphens, so it is always a valid segment.
pub fn generate_identifier() -> String {
    Uuid::now_v7().to_string()
}
