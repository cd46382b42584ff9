//! # Gadget Model
//!
//! The gadget record and its canonical lifecycle status.
//!
//! ## Invariants
//! - GADGET-M1: `status` is always one of the four canonical values at rest
//! - GADGET-M2: `id` is assigned at creation and never changes
//! - GADGET-M3: records are never physically removed (soft lifecycle only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Canonical gadget lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GadgetStatus {
    /// In inventory, ready for deployment
    Available,
    /// Currently in the field
    Deployed,
    /// Self-destruct sequence completed
    Destroyed,
    /// Soft-deleted; retired from inventory
    Decommissioned,
}

impl GadgetStatus {
    /// Normalize a free-text status token to a canonical status.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized input yields `None`; the caller decides the fallback
    /// (listing returns no records, updates leave the status untouched).
    pub fn normalize(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "available" => Some(Self::Available),
            "deployed" => Some(Self::Deployed),
            "destroyed" => Some(Self::Destroyed),
            "decommissioned" => Some(Self::Decommissioned),
            _ => None,
        }
    }

    /// Returns the canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Deployed => "Deployed",
            Self::Destroyed => "Destroyed",
            Self::Decommissioned => "Decommissioned",
        }
    }
}

impl fmt::Display for GadgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gadget record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gadget {
    /// Unique gadget identifier
    pub id: Uuid,

    /// Display name (min trimmed length 5, enforced on update)
    pub name: String,

    /// Current lifecycle status
    pub status: GadgetStatus,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Gadget {
    /// Create a new gadget with the given display name and status `Available`
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            status: GadgetStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_tokens() {
        assert_eq!(
            GadgetStatus::normalize("available"),
            Some(GadgetStatus::Available)
        );
        assert_eq!(
            GadgetStatus::normalize("deployed"),
            Some(GadgetStatus::Deployed)
        );
        assert_eq!(
            GadgetStatus::normalize("destroyed"),
            Some(GadgetStatus::Destroyed)
        );
        assert_eq!(
            GadgetStatus::normalize("decommissioned"),
            Some(GadgetStatus::Decommissioned)
        );
    }

    #[test]
    fn test_normalize_is_case_insensitive_and_trims() {
        assert_eq!(
            GadgetStatus::normalize("  Deployed  "),
            Some(GadgetStatus::Deployed)
        );
        assert_eq!(
            GadgetStatus::normalize("AVAILABLE"),
            Some(GadgetStatus::Available)
        );
    }

    #[test]
    fn test_normalize_rejects_unknown_tokens() {
        assert_eq!(GadgetStatus::normalize("active"), None);
        assert_eq!(GadgetStatus::normalize(""), None);
        assert_eq!(GadgetStatus::normalize("decommissioned!"), None);
    }

    #[test]
    fn test_status_serializes_capitalized() {
        let json = serde_json::to_string(&GadgetStatus::Decommissioned).unwrap();
        assert_eq!(json, "\"Decommissioned\"");
    }

    #[test]
    fn test_new_gadget_starts_available() {
        let gadget = Gadget::new("The Kraken".to_string());
        assert_eq!(gadget.status, GadgetStatus::Available);
        assert_eq!(gadget.created_at, gadget.updated_at);
    }
}
