use secrecy::Secret;
use url::Url;

use crate::api::{EventApi, SubscriberApi};
use crate::config::ClientConfig;
use crate::error::NovuError;
use crate::transport::Transport;

/// Entry point of the SDK. Cheap to clone; clones share the underlying
/// connection pool.
#[derive(Clone)]
pub struct NovuClient {
    transport: Transport,
}

impl NovuClient {
    /// Fails straight away when the api key is empty or the backend url is not
    /// an absolute http(s) url.
    pub fn new(api_key: Secret<String>, config: ClientConfig) -> Result<NovuClient, NovuError> {
        let transport = Transport::new(api_key, &config)?;

        tracing::debug!("Novu client configured for {}", transport.base_url());

        Ok(NovuClient { transport })
    }

    pub fn subscribers(&self) -> SubscriberApi<'_> {
        SubscriberApi::new(&self.transport)
    }

    pub fn events(&self) -> EventApi<'_> {
        EventApi::new(&self.transport)
    }

    pub fn backend_url(&self) -> &Url {
        self.transport.base_url()
    }
}

impl std::fmt::Debug for NovuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NovuClient")
            .field("backend_url", &self.backend_url().as_str())
            .finish_non_exhaustive()
    }
}
