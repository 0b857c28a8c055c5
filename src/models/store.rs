use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};
use crate::pricing::constants::DEFAULT_STORES;

/// Price model for one store: a base unit price and a ± fractional noise band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: String,
    pub base_price: f64,
    pub variation: f64,
}

impl Store {
    pub fn new(store_id: impl Into<String>, base_price: f64, variation: f64) -> Self {
        Self {
            store_id: store_id.into(),
            base_price,
            variation,
        }
    }

    /// Lowest price the noise band can produce.
    #[inline]
    pub fn price_floor(&self) -> f64 {
        self.base_price * (1.0 - self.variation)
    }

    pub fn validate(&self) -> Result<()> {
        if self.store_id.trim().is_empty() {
            return Err(CostError::InvalidStore("store id is empty".to_string()));
        }
        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(CostError::InvalidStore(format!(
                "{} has non-positive base price {}",
                self.store_id, self.base_price
            )));
        }
        if !(0.0..=1.0).contains(&self.variation) {
            return Err(CostError::InvalidStore(format!(
                "{} has variation {} outside [0, 1]",
                self.store_id, self.variation
            )));
        }
        Ok(())
    }
}

/// Fixed, ordered set of stores. Order is significant: it drives tie-breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Store>", into = "Vec<Store>")]
pub struct StoreCatalog {
    stores: Vec<Store>,
}

impl StoreCatalog {
    /// Build a catalog, validating each store and rejecting duplicate ids.
    ///
    /// An empty list is accepted here; the engine reports it as `EmptyCatalog`.
    pub fn new(stores: Vec<Store>) -> Result<Self> {
        let mut seen = HashSet::new();
        for store in &stores {
            store.validate()?;
            if !seen.insert(store.store_id.to_lowercase()) {
                return Err(CostError::InvalidStore(format!(
                    "duplicate store id {}",
                    store.store_id
                )));
            }
        }
        Ok(Self { stores })
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Store> {
        self.stores.iter()
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl Default for StoreCatalog {
    fn default() -> Self {
        Self {
            stores: DEFAULT_STORES
                .iter()
                .map(|&(id, base, variation)| Store::new(id, base, variation))
                .collect(),
        }
    }
}

impl TryFrom<Vec<Store>> for StoreCatalog {
    type Error = CostError;

    fn try_from(stores: Vec<Store>) -> Result<Self> {
        StoreCatalog::new(stores)
    }
}

impl From<StoreCatalog> for Vec<Store> {
    fn from(catalog: StoreCatalog) -> Self {
        catalog.stores
    }
}

impl<'a> IntoIterator for &'a StoreCatalog {
    type Item = &'a Store;
    type IntoIter = std::slice::Iter<'a, Store>;

    fn into_iter(self) -> Self::IntoIter {
        self.stores.iter()
    }
}
