use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::path::Path;
use std::time;
use url::Url;

use crate::client::NovuClient;
use crate::error::NovuError;

pub const DEFAULT_BACKEND_URL: &str = "https://api.novu.co/api";

/// Options handed to [`NovuClient::new`]. Everything is optional: an empty
/// config talks to the production service without a request timeout.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub backend_url: Option<String>,
    pub timeout: Option<time::Duration>,
}

impl ClientConfig {
    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = Some(backend_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn parse_backend_url(&self) -> Result<Url, NovuError> {
        let raw = self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL);
        let url = Url::parse(raw).map_err(|err| {
            NovuError::InvalidConfiguration(format!("{} is not a valid backend url: {}", raw, err))
        })?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(NovuError::InvalidConfiguration(format!(
                "{} is not an http(s) base url",
                raw
            )));
        }

        Ok(url)
    }
}

/// Client settings as an embedding application would load them from a file
/// or the environment.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct NovuSettings {
    // secrecy keeps the key out of Debug output and logs
    pub api_key: Secret<String>,
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl NovuSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            backend_url: self.backend_url.clone(),
            timeout: self.timeout_milliseconds.map(time::Duration::from_millis),
        }
    }

    pub fn build_client(&self) -> Result<NovuClient, NovuError> {
        NovuClient::new(self.api_key.clone(), self.client_config())
    }
}

pub fn get_configuration(config_file: Option<&Path>) -> Result<NovuSettings, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    // Merge settings from environment variables with a prefix of NOVU_ and "__" separator
    // E.g NOVU_API_KEY sets NovuSettings.api_key. The prefix separator defaults to the
    // nested separator, so it has to be set explicitly.
    let settings = builder
        .add_source(
            config::Environment::with_prefix("novu")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
