use crate::{errors::FcmError, models::message::HttpMessage};

/// Most tokens a single multicast send accepts.
pub const MAX_REGISTRATION_IDS: usize = 1000;

impl HttpMessage {
    /// Opt-in; `send` never calls this.
    pub fn validate_target(&self) -> Result<(), FcmError> {
        let selectors = [
            !self.to.is_empty(),
            !self.registration_ids.is_empty(),
            !self.condition.is_empty(),
            !self.notification_key.is_empty(),
        ]
        .iter()
        .filter(|set| **set)
        .count();

        if selectors == 0 {
            return Err(FcmError::InvalidTarget(
                "no recipient, condition or notification key set".to_string(),
            ));
        }

        if selectors > 1 {
            return Err(FcmError::InvalidTarget(format!(
                "{} target selectors set, expected exactly one",
                selectors
            )));
        }

        if self.registration_ids.len() > MAX_REGISTRATION_IDS {
            return Err(FcmError::InvalidTarget(format!(
                "too many registration ids ({}, maximum {})",
                self.registration_ids.len(),
                MAX_REGISTRATION_IDS
            )));
        }

        if self.registration_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(FcmError::InvalidTarget(
                "registration ids cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
