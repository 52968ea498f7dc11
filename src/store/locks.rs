// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-name mutual exclusion
//!
//! Each canonical name gets its own async mutex, created on first use and
//! dropped once no guard or waiter references it. Requests for different
//! names never contend beyond the short table lookup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockTable = HashMap<String, Arc<AsyncMutex<()>>>;

/// Table of per-name locks
#[derive(Debug, Clone, Default)]
pub struct NameLocks {
    table: Arc<Mutex<LockTable>>,
}

impl NameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `name`
    pub async fn lock(&self, name: &str) -> NameGuard {
        let slot = {
            let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
            table
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        let guard = slot.lock_owned().await;

        NameGuard {
            name: name.to_string(),
            table: Arc::clone(&self.table),
            guard: Some(guard),
        }
    }

    /// Number of names with a live lock entry
    pub fn active(&self) -> usize {
        self.table.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Exclusive access to one name; released on drop
#[derive(Debug)]
pub struct NameGuard {
    name: String,
    table: Arc<Mutex<LockTable>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl NameGuard {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for NameGuard {
    fn drop(&mut self) {
        // release first so the table holds the last reference when idle
        drop(self.guard.take());

        let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(slot) = table.get(&self.name) {
            if Arc::strong_count(slot) == 1 {
                table.remove(&self.name);
            }
        }
    }
}
