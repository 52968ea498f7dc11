// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for subnet operations and the messaging transport
//!
//! Domain failures ([`SubnetError`]) are returned synchronously to the caller
//! and carry the exact message text clients match on. Transport and store
//! failures are [`InfrastructureError`]s; a store failure surfaces to the
//! caller as [`SubnetError::Storage`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-checkable classification of a [`SubnetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad character in a user-supplied identifier
    InvalidIdentifier,
    /// Bad DNS-label segment in a full resource name
    InvalidName,
    /// Malformed or unmappable update mask
    InvalidFieldMask,
    /// The operation targets an absent resource
    NotFound,
    /// The backing store failed
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidIdentifier => write!(f, "invalid_identifier"),
            ErrorKind::InvalidName => write!(f, "invalid_name"),
            ErrorKind::InvalidFieldMask => write!(f, "invalid_field_mask"),
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Storage => write!(f, "storage"),
        }
    }
}

/// Reason an update mask was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldMaskError {
    #[error("'*' must not be used with other paths")]
    WildcardWithOtherPaths,

    #[error("{0}")]
    UnknownPath(String),
}

/// Errors returned by subnet operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Identifier contains a character outside `[a-z0-9-]`
    #[error("user-settable ID must only contain lowercase, numbers and hyphens (got: '{character}' in position {position})")]
    InvalidIdentifier { character: char, position: usize },

    /// A name segment is not a DNS label
    #[error("segment '{segment}': not a valid DNS name")]
    InvalidName { segment: String },

    /// Update mask rejected
    #[error("invalid field path: {0}")]
    InvalidFieldMask(#[from] FieldMaskError),

    /// No resource stored under the name
    #[error("unable to find key {0}")]
    NotFound(String),

    /// The store could not complete the operation
    #[error("storage error: {0}")]
    Storage(String),
}

impl SubnetError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubnetError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            SubnetError::InvalidName { .. } => ErrorKind::InvalidName,
            SubnetError::InvalidFieldMask(_) => ErrorKind::InvalidFieldMask,
            SubnetError::NotFound(_) => ErrorKind::NotFound,
            SubnetError::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for subnet operations
pub type SubnetResult<T> = Result<T, SubnetError>;

/// Errors raised by the NATS transport and process configuration
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// NATS connection error
    #[error("NATS connection error: {0}")]
    NatsConnection(String),

    /// NATS publish error
    #[error("NATS publish error: {0}")]
    NatsPublish(String),

    /// NATS subscribe error
    #[error("NATS subscribe error: {0}")]
    NatsSubscribe(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request payload could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Subnet store backend error
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for transport operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::Serialization(err.to_string())
    }
}

impl From<InfrastructureError> for SubnetError {
    fn from(err: InfrastructureError) -> Self {
        SubnetError::Storage(err.to_string())
    }
}
