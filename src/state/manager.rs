use crate::error::{OptimizerError, Result};
use crate::models::Item;

/// Owns one framing's candidate list and hands out monotonic ids.
///
/// Order is insertion order; the selector's stable tie-break depends on it,
/// so removal never reshuffles the remaining entries.
pub struct ItemListManager {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemListManager {
    /// Create a manager from a stored list and the stored id counter.
    ///
    /// The counter is bumped past any id already present, so ids stay
    /// unique even if the state file was edited by hand.
    pub fn new(items: Vec<Item>, next_id: u64) -> Self {
        let max_seen = items.iter().map(|i| i.id + 1).max().unwrap_or(0);
        Self {
            items,
            next_id: next_id.max(max_seen),
        }
    }

    /// Validate and append a new entry, assigning it the next id.
    pub fn add(&mut self, name: &str, weight: f64, value: f64) -> Result<Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OptimizerError::InvalidInput("Name must not be empty".to_string()));
        }
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(OptimizerError::InvalidInput(format!(
                "Weight must be a positive number, got {}",
                weight
            )));
        }
        if !value.is_finite() {
            return Err(OptimizerError::InvalidInput(format!(
                "Value must be a finite number, got {}",
                value
            )));
        }

        let item = Item::new(self.next_id, name.to_string(), weight, value);
        self.next_id += 1;
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove an entry by id, preserving the order of the rest.
    pub fn remove(&mut self, id: u64) -> Result<Item> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| OptimizerError::ItemNotFound(format!("id {}", id)))?;
        Ok(self.items.remove(pos))
    }

    /// First entry whose name matches, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let key = name.to_lowercase();
        self.items.iter().find(|i| i.key() == key)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Give the list back for serialization.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
