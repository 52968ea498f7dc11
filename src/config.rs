// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for the subnet server process

use std::time::Duration;

use crate::errors::{InfrastructureError, InfrastructureResult};
use crate::subjects::DEFAULT_SUBJECT_ROOT;

/// Configuration for NATS connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "cim-subnet".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Configuration for the subnet server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetServerConfig {
    pub nats: NatsConfig,
    /// Root token of the served subjects
    pub subject_root: String,
}

impl Default for SubnetServerConfig {
    fn default() -> Self {
        Self {
            nats: NatsConfig::default(),
            subject_root: DEFAULT_SUBJECT_ROOT.to_string(),
        }
    }
}

impl SubnetServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `NATS_URL`: comma-separated server list
    /// - `NATS_CLIENT_NAME`
    /// - `NATS_CONNECT_TIMEOUT_SECS`, `NATS_REQUEST_TIMEOUT_SECS`
    /// - `SUBNET_SUBJECT_ROOT`
    pub fn from_env() -> InfrastructureResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> InfrastructureResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let servers = match lookup("NATS_URL") {
            Some(urls) => {
                let servers: Vec<String> = urls
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if servers.is_empty() {
                    return Err(InfrastructureError::Configuration(
                        "NATS_URL does not name any server".to_string(),
                    ));
                }
                servers
            }
            None => defaults.nats.servers,
        };

        let name = lookup("NATS_CLIENT_NAME").unwrap_or(defaults.nats.name);

        let connect_timeout = seconds(&lookup, "NATS_CONNECT_TIMEOUT_SECS")?
            .unwrap_or(defaults.nats.connect_timeout);
        let request_timeout = seconds(&lookup, "NATS_REQUEST_TIMEOUT_SECS")?
            .unwrap_or(defaults.nats.request_timeout);

        let subject_root = lookup("SUBNET_SUBJECT_ROOT").unwrap_or(defaults.subject_root);
        if subject_root.is_empty() || subject_root.contains(['*', '>', ' ']) {
            return Err(InfrastructureError::Configuration(format!(
                "SUBNET_SUBJECT_ROOT is not a valid subject prefix: '{}'",
                subject_root
            )));
        }

        Ok(Self {
            nats: NatsConfig {
                servers,
                name,
                connect_timeout,
                request_timeout,
            },
            subject_root,
        })
    }
}

fn seconds<F>(lookup: &F, key: &str) -> InfrastructureResult<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                InfrastructureError::Configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    key, value
                ))
            })
        })
        .transpose()
}
