// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Service
//!
//! Orchestrates the four subnet operations on top of the domain validators,
//! the field-mask applier and a [`SubnetStore`].
//!
//! # Existence Policy
//!
//! | Operation | Absent name | Present name |
//! |-----------|-------------|--------------|
//! | create    | stored, OK  | stored object returned unchanged, OK |
//! | get       | `NotFound`  | OK |
//! | update    | `NotFound` (stored when `allow_missing`) | masked merge, OK |
//! | delete    | `NotFound` (OK when `allow_missing`) | removed, OK |
//!
//! # Transaction Semantics
//!
//! Every existence check and the write that depends on it run under the
//! name's guard from [`NameLocks`], so concurrent creates of one identifier
//! store exactly one subnet and an update can never resurrect a deleted one.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::{
    build_name, generate_identifier, validate_identifier, validate_name, Subnet,
    SUBNET_COLLECTION,
};
use crate::errors::{InfrastructureError, SubnetError, SubnetResult};
use crate::field_mask::{apply_mask, validate_mask};
use crate::service::requests::*;
use crate::store::{InMemorySubnetStore, NameLocks, SubnetStore};

/// Subnet service interface exposed to transports
#[async_trait]
pub trait SubnetService: Send + Sync {
    /// Create a subnet, or return the existing one under the same name
    async fn create_subnet(&self, request: CreateSubnetRequest) -> SubnetResult<Subnet>;

    /// Fetch a subnet by canonical name
    async fn get_subnet(&self, request: GetSubnetRequest) -> SubnetResult<Subnet>;

    /// Apply a masked update and return the stored result
    async fn update_subnet(&self, request: UpdateSubnetRequest) -> SubnetResult<Subnet>;

    /// Remove a subnet
    async fn delete_subnet(&self, request: DeleteSubnetRequest) -> SubnetResult<()>;
}

/// [`SubnetService`] backed by any [`SubnetStore`]
pub struct StoreBackedSubnetService<S> {
    store: Arc<S>,
    locks: NameLocks,
    collection: String,
}

/// Service over the process-local store
pub type InMemorySubnetService = StoreBackedSubnetService<InMemorySubnetStore>;

impl<S: SubnetStore> StoreBackedSubnetService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            locks: NameLocks::new(),
            collection: SUBNET_COLLECTION.to_string(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Collection segment used for created names
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl InMemorySubnetService {
    /// Service over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySubnetStore::new()))
    }
}

impl Default for InMemorySubnetService {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn rejected<'a>(operation: &'static str, resource: &'a str) -> impl FnOnce(&SubnetError) + 'a {
    move |err| warn!(operation, resource, kind = %err.kind(), "Rejected subnet request: {}", err)
}

fn store_failed(operation: &'static str) -> impl FnOnce(InfrastructureError) -> SubnetError {
    move |err| {
        error!(operation, "Subnet store failed: {}", err);
        SubnetError::from(err)
    }
}

#[async_trait]
impl<S: SubnetStore> SubnetService for StoreBackedSubnetService<S> {
    async fn create_subnet(&self, request: CreateSubnetRequest) -> SubnetResult<Subnet> {
        let CreateSubnetRequest {
            parent,
            subnet_id,
            subnet,
        } = request;

        let id = if subnet_id.is_empty() {
            let generated = generate_identifier();
            debug!("No subnet_id supplied, generated {}", generated);
            generated
        } else {
            validate_identifier(&subnet_id).inspect_err(rejected("create", &subnet_id))?;
            subnet_id
        };

        let name = build_name(&self.collection, &id);
        validate_name(&name).inspect_err(rejected("create", &name))?;

        let _guard = self.locks.lock(&name).await;

        let existing = self.store.get(&name).await.map_err(store_failed("create"))?;
        if let Some(existing) = existing {
            debug!("Subnet {} already exists, returning stored object", name);
            return Ok(existing);
        }

        let subnet = subnet.named(name.clone());
        self.store
            .put(&name, subnet.clone())
            .await
            .map_err(store_failed("create"))?;

        info!(parent = %parent, "Created subnet {}", name);
        Ok(subnet)
    }

    async fn get_subnet(&self, request: GetSubnetRequest) -> SubnetResult<Subnet> {
        let name = request.name;
        validate_name(&name).inspect_err(rejected("get", &name))?;

        match self.store.get(&name).await.map_err(store_failed("get"))? {
            Some(subnet) => {
                debug!("Fetched subnet {}", name);
                Ok(subnet)
            }
            None => Err(SubnetError::NotFound(name)),
        }
    }

    async fn update_subnet(&self, request: UpdateSubnetRequest) -> SubnetResult<Subnet> {
        let UpdateSubnetRequest {
            subnet: payload,
            update_mask,
            allow_missing,
        } = request;
        let name = payload.name.clone();

        validate_mask(update_mask.as_ref())
            .map_err(SubnetError::from)
            .inspect_err(rejected("update", &name))?;
        validate_name(&name).inspect_err(rejected("update", &name))?;

        let _guard = self.locks.lock(&name).await;

        let current = self.store.get(&name).await.map_err(store_failed("update"))?;
        let Some(mut stored) = current else {
            if allow_missing {
                self.store
                    .put(&name, payload.clone())
                    .await
                    .map_err(store_failed("update"))?;
                info!("Subnet {} was missing, stored update as new subnet", name);
                return Ok(payload);
            }
            return Err(SubnetError::NotFound(name));
        };

        apply_mask(&mut stored, &payload, update_mask.as_ref())?;
        self.store
            .put(&name, stored.clone())
            .await
            .map_err(store_failed("update"))?;

        info!(
            paths = ?update_mask.as_ref().map(|m| m.paths.as_slice()),
            "Updated subnet {}", name
        );
        Ok(stored)
    }

    async fn delete_subnet(&self, request: DeleteSubnetRequest) -> SubnetResult<()> {
        let DeleteSubnetRequest { name, allow_missing } = request;
        validate_name(&name).inspect_err(rejected("delete", &name))?;

        let _guard = self.locks.lock(&name).await;

        if self.store.delete(&name).await.map_err(store_failed("delete"))? {
            info!("Deleted subnet {}", name);
            return Ok(());
        }

        if allow_missing {
            debug!("Subnet {} already absent, delete is a no-op", name);
            return Ok(());
        }

        Err(SubnetError::NotFound(name))
    }
}
