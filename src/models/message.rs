use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{
    errors::FcmError,
    models::notification::NotificationPayload,
    utils::{is_empty_data, is_false, is_zero},
};

/// Four weeks, the longest FCM keeps an undelivered message.
pub const MAX_TIME_TO_LIVE_SECONDS: u32 = 2_419_200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    /// Anything other than the literal `"high"` is treated as normal.
    pub fn from_string(s: &str) -> Self {
        match s {
            "high" => Priority::High,
            _ => Priority::Normal,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from_string(&s)
    }
}

/// Downstream message for the legacy HTTP endpoint.
///
/// Every field is optional and left out of the JSON body while it holds its
/// zero value. Nothing here stops more than one target selector from being
/// set; see [`HttpMessage::validate_target`] for an opt-in check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpMessage {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registration_ids: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub condition: String,

    /// Deprecated upstream in favour of `to`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notification_key: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub collapse_key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "is_false")]
    pub content_available: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub mutable_content: bool,

    /// Deprecated upstream, still accepted.
    #[serde(skip_serializing_if = "is_false")]
    pub delay_while_idle: bool,

    #[serde(skip_serializing_if = "is_zero")]
    pub time_to_live: u32,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub restricted_package_name: String,

    #[serde(skip_serializing_if = "is_false")]
    pub dry_run: bool,

    #[serde(skip_serializing_if = "is_empty_data")]
    pub data: Option<JsonValue>,

    #[serde(skip_serializing_if = "NotificationPayload::is_empty")]
    pub notification: NotificationPayload,
}

impl HttpMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    // appends
    pub fn with_registration_ids<I, S>(mut self, registration_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registration_ids
            .extend(registration_ids.into_iter().map(Into::into));
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn with_notification_key(mut self, notification_key: impl Into<String>) -> Self {
        self.notification_key = notification_key.into();
        self
    }

    pub fn with_collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.collapse_key = collapse_key.into();
        self
    }

    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = Some(Priority::from_string(priority));
        self
    }

    pub fn with_content_available(mut self, content_available: bool) -> Self {
        self.content_available = content_available;
        self
    }

    pub fn with_mutable_content(mut self, mutable_content: bool) -> Self {
        self.mutable_content = mutable_content;
        self
    }

    pub fn with_delay_while_idle(mut self, delay_while_idle: bool) -> Self {
        self.delay_while_idle = delay_while_idle;
        self
    }

    /// Values above [`MAX_TIME_TO_LIVE_SECONDS`] are clamped to it.
    pub fn with_time_to_live(mut self, time_to_live: u32) -> Self {
        self.time_to_live = time_to_live.min(MAX_TIME_TO_LIVE_SECONDS);
        self
    }

    pub fn with_restricted_package_name(mut self, restricted_package_name: impl Into<String>) -> Self {
        self.restricted_package_name = restricted_package_name.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = match data {
            JsonValue::Null => None,
            data => Some(data),
        };
        self
    }

    pub fn try_with_data<T: Serialize>(self, data: &T) -> Result<Self, FcmError> {
        let value = serde_json::to_value(data).map_err(FcmError::Serialization)?;
        Ok(self.with_data(value))
    }

    pub fn with_notification(mut self, notification: NotificationPayload) -> Self {
        self.notification = notification;
        self
    }

    /// Replaces the whole notification payload in one call.
    #[allow(clippy::too_many_arguments)]
    pub fn with_notification_fields(
        self,
        title: &str,
        body: &str,
        android_channel_id: &str,
        icon: &str,
        sound: &str,
        badge: &str,
        tag: &str,
        color: &str,
        click_action: &str,
        subtitle: &str,
        body_loc_key: &str,
        body_loc_args: &str,
        title_loc_key: &str,
        title_loc_args: &str,
    ) -> Self {
        self.with_notification(NotificationPayload {
            title: title.to_string(),
            body: body.to_string(),
            android_channel_id: android_channel_id.to_string(),
            icon: icon.to_string(),
            sound: sound.to_string(),
            badge: badge.to_string(),
            tag: tag.to_string(),
            color: color.to_string(),
            click_action: click_action.to_string(),
            subtitle: subtitle.to_string(),
            body_loc_key: body_loc_key.to_string(),
            body_loc_args: body_loc_args.to_string(),
            title_loc_key: title_loc_key.to_string(),
            title_loc_args: title_loc_args.to_string(),
        })
    }
}
