// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Store Abstraction
//!
//! The store is the single source of truth for which subnets exist. It maps
//! canonical names to [`Subnet`] values and offers only whole-entry
//! operations: `put` replaces an entry atomically, there are no partial
//! writes.
//!
//! # Concurrency
//!
//! Each store call is atomic on its own and reports backend failures as
//! [`InfrastructureError`](crate::errors::InfrastructureError). Sequences such as "check existence,
//! then write" are made atomic per name by holding the name's guard from
//! [`NameLocks`] across the whole sequence.
//!
//! ```text
//! lock(name) → exists/get → decide → put/delete → unlock
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::Subnet;
use crate::errors::InfrastructureResult;

pub mod locks;

pub use locks::{NameGuard, NameLocks};

/// Keyed storage for subnets
#[async_trait]
pub trait SubnetStore: Send + Sync {
    /// Fetch a copy of the stored subnet
    async fn get(&self, name: &str) -> InfrastructureResult<Option<Subnet>>;

    /// Insert or replace the entry for `name`
    async fn put(&self, name: &str, subnet: Subnet) -> InfrastructureResult<()>;

    /// Remove the entry, returning whether one was present
    async fn delete(&self, name: &str) -> InfrastructureResult<bool>;

    /// Check whether an entry exists
    async fn exists(&self, name: &str) -> InfrastructureResult<bool>;

    /// Number of stored entries
    async fn len(&self) -> InfrastructureResult<usize>;
}

/// Process-local store backed by a hash map
///
/// Contents live only as long as the process.
#[derive(Debug, Default)]
pub struct InMemorySubnetStore {
    subnets: RwLock<HashMap<String, Subnet>>,
}

impl InMemorySubnetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with entries
    pub fn with_subnets<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Subnet)>,
    {
        Self {
            subnets: RwLock::new(entries.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SubnetStore for InMemorySubnetStore {
    async fn get(&self, name: &str) -> InfrastructureResult<Option<Subnet>> {
        Ok(self.subnets.read().await.get(name).cloned())
    }

    async fn put(&self, name: &str, subnet: Subnet) -> InfrastructureResult<()> {
        self.subnets.write().await.insert(name.to_string(), subnet);
        Ok(())
    }

    async fn delete(&self, name: &str) -> InfrastructureResult<bool> {
        Ok(self.subnets.write().await.remove(name).is_some())
    }

    async fn exists(&self, name: &str) -> InfrastructureResult<bool> {
        Ok(self.subnets.read().await.contains_key(name))
    }

    async fn len(&self) -> InfrastructureResult<usize> {
        Ok(self.subnets.read().await.len())
    }
}
