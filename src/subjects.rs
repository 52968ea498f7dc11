// Copyright (c) 2025 - Cowboy AI, Inc.

//! NATS subject hierarchy for subnet operations
//!
//! Every operation is served on its own request/reply subject:
//!
//! ```text
//! {root}.subnet.{operation}
//! ```
//!
//! The service subscribes once to `{root}.subnet.*` and dispatches on the
//! final token.
//!
//! # Examples
//!
//! ```rust
//! use cim_subnet::subjects::{SubjectBuilder, SubnetOperation};
//!
//! let subject = SubjectBuilder::new("opi")
//!     .operation(SubnetOperation::Create)
//!     .build();
//! assert_eq!(subject, "opi.subnet.create");
//!
//! assert_eq!(SubjectBuilder::new("opi").build_wildcard(), "opi.subnet.*");
//! ```

use std::fmt;
use std::str::FromStr;

/// Default root namespace
pub const DEFAULT_SUBJECT_ROOT: &str = "opi";

/// Resource token following the root
pub const SUBNET_TOKEN: &str = "subnet";

/// Operations served by the subnet service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubnetOperation {
    Create,
    Get,
    Update,
    Delete,
}

impl SubnetOperation {
    pub const ALL: [SubnetOperation; 4] = [
        SubnetOperation::Create,
        SubnetOperation::Get,
        SubnetOperation::Update,
        SubnetOperation::Delete,
    ];
}

impl fmt::Display for SubnetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubnetOperation::Create => write!(f, "create"),
            SubnetOperation::Get => write!(f, "get"),
            SubnetOperation::Update => write!(f, "update"),
            SubnetOperation::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for SubnetOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubnetOperation::ALL
            .into_iter()
            .find(|op| op.to_string() == s)
            .ok_or_else(|| format!("unknown subnet operation '{}'", s))
    }
}

/// Builder for subnet subjects under a root namespace
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    root: String,
    operation: Option<SubnetOperation>,
}

impl SubjectBuilder {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            operation: None,
        }
    }

    /// Set the operation
    pub fn operation(mut self, operation: SubnetOperation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Build the subject for the chosen operation
    ///
    /// Without an operation this is the same as [`SubjectBuilder::build_wildcard`].
    pub fn build(self) -> String {
        match self.operation {
            Some(operation) => format!("{}.{}.{}", self.root, SUBNET_TOKEN, operation),
            None => self.build_wildcard(),
        }
    }

    /// Subscription covering every subnet operation
    pub fn build_wildcard(self) -> String {
        format!("{}.{}.*", self.root, SUBNET_TOKEN)
    }
}

impl Default for SubjectBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT_ROOT)
    }
}

/// Extract the operation from a concrete subject
///
/// Returns an error describing the subject when it is outside
/// `{root}.subnet.*` or names an unknown operation.
pub fn parse_operation(root: &str, subject: &str) -> Result<SubnetOperation, String> {
    let prefix = format!("{}.{}.", root, SUBNET_TOKEN);
    subject
        .strip_prefix(&prefix)
        .ok_or_else(|| format!("subject '{}' is not a subnet subject", subject))?
        .parse()
}
