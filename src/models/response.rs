use serde::{Deserialize, Serialize};

use crate::utils::null_as_default;

/// Body fields are only filled in from a 200 reply; `status_code` always is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpResponse {
    #[serde(skip)]
    pub status_code: u16,

    #[serde(deserialize_with = "null_as_default")]
    pub multicast_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub success: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub failure: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub canonical_ids: u32,

    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub results: Vec<HttpResponseResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome for one recipient of a multicast send, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpResponseResult {
    #[serde(deserialize_with = "null_as_default")]
    pub message_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub registration_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HttpResponse {
    pub fn with_status(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200 && self.error.is_none()
    }

    pub fn failed_results(&self) -> impl Iterator<Item = (usize, &HttpResponseResult)> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, result)| result.error.is_some())
    }
}
