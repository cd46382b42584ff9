//! # Gadget Repository
//!
//! Storage contract for gadget records, plus the in-process implementation
//! the server injects at startup. The store never removes records; the
//! decommission path is a status transition handled above this layer.

use uuid::Uuid;

use super::errors::{GadgetError, GadgetResult};
use super::model::{Gadget, GadgetStatus};

/// Gadget repository trait
///
/// Abstracts storage operations for gadgets. Updates are last-write-wins;
/// no optimistic concurrency token is carried by the record.
pub trait GadgetRepository: Send + Sync {
    /// Find a gadget by its id
    fn find_by_id(&self, id: Uuid) -> GadgetResult<Option<Gadget>>;

    /// Find all gadgets with the given status
    fn find_by_status(&self, status: GadgetStatus) -> GadgetResult<Vec<Gadget>>;

    /// Find all gadgets
    fn find_all(&self) -> GadgetResult<Vec<Gadget>>;

    /// Create a new gadget record
    fn create(&self, gadget: &Gadget) -> GadgetResult<()>;

    /// Update an existing gadget record
    fn update(&self, gadget: &Gadget) -> GadgetResult<()>;
}

/// In-memory gadget repository
#[derive(Debug, Default)]
pub struct InMemoryGadgetRepository {
    gadgets: std::sync::RwLock<Vec<Gadget>>,
}

impl InMemoryGadgetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GadgetRepository for InMemoryGadgetRepository {
    fn find_by_id(&self, id: Uuid) -> GadgetResult<Option<Gadget>> {
        let gadgets = self
            .gadgets
            .read()
            .map_err(|_| GadgetError::StorageError("lock poisoned".to_string()))?;
        Ok(gadgets.iter().find(|g| g.id == id).cloned())
    }

    fn find_by_status(&self, status: GadgetStatus) -> GadgetResult<Vec<Gadget>> {
        let gadgets = self
            .gadgets
            .read()
            .map_err(|_| GadgetError::StorageError("lock poisoned".to_string()))?;
        Ok(gadgets
            .iter()
            .filter(|g| g.status == status)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> GadgetResult<Vec<Gadget>> {
        let gadgets = self
            .gadgets
            .read()
            .map_err(|_| GadgetError::StorageError("lock poisoned".to_string()))?;
        Ok(gadgets.clone())
    }

    fn create(&self, gadget: &Gadget) -> GadgetResult<()> {
        let mut gadgets = self
            .gadgets
            .write()
            .map_err(|_| GadgetError::StorageError("lock poisoned".to_string()))?;
        gadgets.push(gadget.clone());
        Ok(())
    }

    fn update(&self, gadget: &Gadget) -> GadgetResult<()> {
        let mut gadgets = self
            .gadgets
            .write()
            .map_err(|_| GadgetError::StorageError("lock poisoned".to_string()))?;

        if let Some(existing) = gadgets.iter_mut().find(|g| g.id == gadget.id) {
            *existing = gadget.clone();
            Ok(())
        } else {
            Err(GadgetError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_find_by_id() {
        let repo = InMemoryGadgetRepository::new();
        let gadget = Gadget::new("The Nightingale".to_string());

        repo.create(&gadget).unwrap();

        let found = repo.find_by_id(gadget.id).unwrap().unwrap();
        assert_eq!(found.name, "The Nightingale");
        assert_eq!(found.status, GadgetStatus::Available);
    }

    #[test]
    fn test_find_by_id_missing_is_none() {
        let repo = InMemoryGadgetRepository::new();
        assert!(repo.find_by_id(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_find_by_status_filters() {
        let repo = InMemoryGadgetRepository::new();
        let mut deployed = Gadget::new("The Falcon".to_string());
        deployed.status = GadgetStatus::Deployed;
        let available = Gadget::new("The Sparrow".to_string());

        repo.create(&deployed).unwrap();
        repo.create(&available).unwrap();

        let matches = repo.find_by_status(GadgetStatus::Deployed).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "The Falcon");
    }

    #[test]
    fn test_update_replaces_record() {
        let repo = InMemoryGadgetRepository::new();
        let mut gadget = Gadget::new("The Falcon".to_string());
        repo.create(&gadget).unwrap();

        gadget.status = GadgetStatus::Destroyed;
        repo.update(&gadget).unwrap();

        let found = repo.find_by_id(gadget.id).unwrap().unwrap();
        assert_eq!(found.status, GadgetStatus::Destroyed);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryGadgetRepository::new();
        let gadget = Gadget::new("The Falcon".to_string());
        assert!(matches!(repo.update(&gadget), Err(GadgetError::NotFound)));
    }
}
