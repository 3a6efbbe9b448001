pub mod clients;
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

pub use clients::fcm::FcmClient;
pub use config::Config;
pub use errors::FcmError;
pub use models::{
    message::{HttpMessage, MAX_TIME_TO_LIVE_SECONDS, Priority},
    notification::NotificationPayload,
    response::{HttpResponse, HttpResponseResult},
};
