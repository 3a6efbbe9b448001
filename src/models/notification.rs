use serde::{Deserialize, Serialize};

/// User-visible part of a message. Platform support per field is decided by
/// FCM; empty fields are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,

    /// Android O and later.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub android_channel_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub sound: String,

    /// iOS only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub badge: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,

    /// `#rrggbb`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub click_action: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub body_loc_key: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub body_loc_args: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title_loc_key: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title_loc_args: String,
}

impl NotificationPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
