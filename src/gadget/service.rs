//! # Gadget Service
//!
//! The five lifecycle operations, composed from the shared status
//! normalizer, the update-payload validation, and the injected repository.
//!
//! ## Invariants
//! - GADGET-S1: not-found and validation failures are detected before any write
//! - GADGET-S2: the listing decoration is applied to response copies only
//! - GADGET-S3: an unrecognized status token never mutates a stored status

use chrono::Utc;
use uuid::Uuid;

use super::errors::{GadgetError, GadgetResult};
use super::generator;
use super::model::{Gadget, GadgetStatus};
use super::repository::GadgetRepository;
use super::validation::UpdateGadgetRequest;

/// Gadget service over an injected repository
pub struct GadgetService<R: GadgetRepository> {
    repository: R,
}

impl<R: GadgetRepository> GadgetService<R> {
    /// Create a new service backed by the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List gadgets, optionally filtered by a free-text status token.
    ///
    /// A filter that does not resolve to a canonical status yields the
    /// empty list. An unfiltered listing decorates each returned copy's
    /// name with a randomized success probability; the stored records are
    /// untouched.
    pub fn list(&self, status_filter: Option<&str>) -> GadgetResult<Vec<Gadget>> {
        if let Some(token) = status_filter {
            return match GadgetStatus::normalize(token) {
                Some(status) => self.repository.find_by_status(status),
                None => Ok(Vec::new()),
            };
        }

        let mut gadgets = self.repository.find_all()?;
        for gadget in &mut gadgets {
            gadget.name = generator::decorate_with_probability(&gadget.name);
        }
        Ok(gadgets)
    }

    /// Create a gadget with a generated display name and status `Available`
    pub fn create(&self) -> GadgetResult<Gadget> {
        let gadget = Gadget::new(generator::generate_display_name());
        self.repository.create(&gadget)?;
        Ok(gadget)
    }

    /// Update a gadget's name, and its status when a recognized one is given.
    ///
    /// The record must exist and the payload must pass validation before
    /// anything is written. A payload without a resolved status updates the
    /// name only.
    pub fn update(&self, id: Uuid, request: &UpdateGadgetRequest) -> GadgetResult<Gadget> {
        let mut gadget = self
            .repository
            .find_by_id(id)?
            .ok_or(GadgetError::NotFound)?;

        let validated = request
            .validate()
            .map_err(GadgetError::ValidationFailed)?;

        gadget.name = validated.name;
        if let Some(status) = validated.status {
            gadget.status = status;
        }
        gadget.updated_at = Utc::now();

        self.repository.update(&gadget)?;
        Ok(gadget)
    }

    /// Soft-delete a gadget: transition its status to `Decommissioned`.
    ///
    /// Idempotent; the record itself is never removed.
    pub fn decommission(&self, id: Uuid) -> GadgetResult<()> {
        let mut gadget = self
            .repository
            .find_by_id(id)?
            .ok_or(GadgetError::NotFound)?;

        gadget.status = GadgetStatus::Decommissioned;
        gadget.updated_at = Utc::now();
        self.repository.update(&gadget)
    }

    /// Transition a gadget to `Destroyed` and return a one-time 4-digit
    /// confirmation code. The code is not persisted and never verified.
    pub fn self_destruct(&self, id: Uuid) -> GadgetResult<u32> {
        let mut gadget = self
            .repository
            .find_by_id(id)?
            .ok_or(GadgetError::NotFound)?;

        gadget.status = GadgetStatus::Destroyed;
        gadget.updated_at = Utc::now();
        self.repository.update(&gadget)?;

        Ok(generator::generate_destruct_code())
    }
}
