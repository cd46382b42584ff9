//! # Update Payload Validation
//!
//! Schema checks for the gadget update payload. Rules are applied in
//! declaration order and the first violation wins: name length before
//! status enum. Validation is pure; rejecting the request is the
//! caller's job.

use serde::Deserialize;

use super::model::GadgetStatus;

/// Minimum trimmed display-name length accepted on update
const MIN_NAME_LEN: usize = 5;

/// Incoming update payload, as deserialized from the request body
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGadgetRequest {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Update payload after validation: trimmed name, normalized status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpdate {
    pub name: String,
    pub status: Option<GadgetStatus>,
}

impl UpdateGadgetRequest {
    /// Validate the payload and coerce it into its normalized form.
    ///
    /// On failure, returns the message of the first violated rule.
    pub fn validate(&self) -> Result<ValidatedUpdate, String> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err("name should be at least 5 characters long".to_string());
        }

        let status = match self.status.as_deref() {
            Some(token @ ("available" | "deployed" | "destroyed" | "decommissioned")) => {
                GadgetStatus::normalize(token)
            }
            Some(_) => {
                return Err(
                    "status should be one of available, deployed, destroyed, decommissioned"
                        .to_string(),
                )
            }
            None => None,
        };

        Ok(ValidatedUpdate {
            name: name.to_string(),
            status,
        })
    }
}
