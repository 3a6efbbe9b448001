use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcmError {
    #[error("FCM server key is empty")]
    MissingServerKey,

    #[error("Failed to serialize FCM message: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("FCM request failed: {source}")]
    Transport {
        status_code: Option<u16>,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse FCM response (status {status_code}): {source}")]
    Deserialization {
        status_code: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid message target: {0}")]
    InvalidTarget(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl FcmError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FcmError::Transport { status_code, .. } => *status_code,
            FcmError::Deserialization { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
