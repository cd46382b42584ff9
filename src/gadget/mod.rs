//! # Gadget Module
//!
//! The gadget resource lifecycle: model, storage contract, update
//! validation, randomized generators, and the service composing them.

pub mod errors;
pub mod generator;
pub mod model;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::{GadgetError, GadgetResult};
pub use model::{Gadget, GadgetStatus};
pub use repository::{GadgetRepository, InMemoryGadgetRepository};
pub use service::GadgetService;
pub use validation::UpdateGadgetRequest;
