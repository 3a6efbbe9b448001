use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT_URL: &str = "https://fcm.googleapis.com/fcm/send";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub fcm_server_key: String,

    #[serde(default = "default_endpoint_url")]
    pub fcm_endpoint_url: String,

    /// Unset means requests wait on the transport indefinitely.
    #[serde(default)]
    pub fcm_request_timeout_seconds: Option<u64>,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Self>(vars)
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.fcm_server_key.trim().is_empty() {
            return Err(anyhow!("FCM_SERVER_KEY cannot be empty"));
        }

        if self.fcm_endpoint_url.trim().is_empty() {
            return Err(anyhow!("FCM_ENDPOINT_URL cannot be empty"));
        }

        Ok(())
    }
}
