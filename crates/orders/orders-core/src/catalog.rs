use tracing::warn;

use crate::product::{Product, ProductId};

/// Bounded product table with overwrite-by-id.
///
/// Entries fill front to back in load order. Inserting an id that is
/// already present replaces that entry in place; inserting a new id into a
/// full catalog drops the incoming product, never an existing entry.
/// Lookup is a linear scan; the table is ten slots by default and
/// read-only once the workers start.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Product>,
    capacity: usize,
}

impl Catalog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Places a product per the slot policy. Returns whether it was stored.
    pub fn insert(&mut self, product: Product) -> bool {
        if let Some(slot) = self.entries.iter_mut().find(|p| p.id == product.id) {
            *slot = product;
            return true;
        }
        if self.entries.len() < self.capacity {
            self.entries.push(product);
            return true;
        }
        warn!(
            id = product.id.0,
            name = %product.name,
            capacity = self.capacity,
            "catalog full, dropping product"
        );
        false
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
