// 🏬 Warehouse Store - In-memory registry of warehouses
//
// Identity is the integer id handed out by `next_id`. Ids are allocated
// from a monotonic counter and are never reused, even after a delete.

use crate::varasto::Varasto;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name given to warehouses created without one
pub const DEFAULT_NAME: &str = "Unnamed";

// ============================================================================
// WAREHOUSE
// ============================================================================

/// A named storage unit. The record owns its `Varasto` exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: u64,
    pub name: String,
    pub varasto: Varasto,
}

impl Warehouse {
    pub fn new(id: u64, name: impl Into<String>, varasto: Varasto) -> Self {
        Warehouse {
            id,
            name: name.into(),
            varasto,
        }
    }
}

// ============================================================================
// WAREHOUSE STORE
// ============================================================================

/// Registry of all warehouses, keyed by id.
///
/// The store is a plain value: whoever owns it decides how it is shared.
/// The web server wraps it in `Arc<RwLock<_>>` inside its `AppState`.
#[derive(Debug)]
pub struct WarehouseStore {
    warehouses: BTreeMap<u64, Warehouse>,
    next_id: u64,
}

impl WarehouseStore {
    /// Create an empty store; the first id handed out is 1
    pub fn new() -> Self {
        WarehouseStore {
            warehouses: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Return the next free id and advance the counter
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn get(&self, id: u64) -> Option<&Warehouse> {
        self.warehouses.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Warehouse> {
        self.warehouses.get_mut(&id)
    }

    /// Insert a warehouse under its own id (replacing any previous record)
    pub fn add(&mut self, warehouse: Warehouse) {
        self.warehouses.insert(warehouse.id, warehouse);
    }

    /// Allocate an id, build the record and store it.
    pub fn create(&mut self, name: impl Into<String>, capacity: f64, level: f64) -> u64 {
        let id = self.next_id();
        self.add(Warehouse::new(id, name, Varasto::new(capacity, level)));
        id
    }

    /// Remove a warehouse. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: u64) -> Option<Warehouse> {
        self.warehouses.remove(&id)
    }

    /// All warehouses, ordered by id
    pub fn all(&self) -> &BTreeMap<u64, Warehouse> {
        &self.warehouses
    }

    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }
}

impl Default for WarehouseStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
