//! In-memory item catalogue: a service layer that reports through outcomes.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use outcome_core::{ErrorInfo, Outcome, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
}

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<u64, Item>,
    last_id: u64,
}

/// Items keyed by id, with unique names.
#[derive(Debug, Default)]
pub struct Catalog {
    inner: RwLock<Inner>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Outcome<Item> {
        self.try_get(id).into()
    }

    pub fn create(&self, new: NewItem) -> Outcome<Item> {
        self.try_create(new).into()
    }

    pub fn remove(&self, id: u64) -> Status {
        self.try_remove(id).into()
    }

    fn try_get(&self, id: u64) -> Result<Item, ErrorInfo> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ErrorInfo::internal("catalog lock poisoned"))?;

        inner
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| ErrorInfo::not_found(format!("Item {id} not found")))
    }

    fn try_create(&self, new: NewItem) -> Result<Item, ErrorInfo> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(ErrorInfo::validation("name must not be empty"));
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ErrorInfo::internal("catalog lock poisoned"))?;

        if inner.items.values().any(|item| item.name == name) {
            return Err(ErrorInfo::conflict(format!("an item named '{name}' already exists")));
        }

        inner.last_id += 1;
        let item = Item {
            id: inner.last_id,
            name: name.to_string(),
        };
        inner.items.insert(item.id, item.clone());
        tracing::info!(id = item.id, name = %item.name, "item created");

        Ok(item)
    }

    fn try_remove(&self, id: u64) -> Result<(), ErrorInfo> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ErrorInfo::internal("catalog lock poisoned"))?;

        inner
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ErrorInfo::not_found(format!("Item {id} not found")))
    }
}
