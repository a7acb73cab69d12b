use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{extract_error_message, NovuError};

const API_VERSION: &str = "v1";

/// Executes requests against the Novu REST API. Holds no per-call state, so a
/// single instance is shared by every resource client.
#[derive(Clone)]
pub(crate) struct Transport {
    http_client: Client,
    base_url: Url,
    authorization: HeaderValue,
}

/// Response as it came off the wire, before any decoding.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Transport {
    pub fn new(api_key: Secret<String>, config: &ClientConfig) -> Result<Transport, NovuError> {
        let api_key = api_key.expose_secret().trim();

        if api_key.is_empty() {
            return Err(NovuError::InvalidConfiguration(String::from(
                "The api key must not be empty",
            )));
        }

        let mut authorization = HeaderValue::from_str(&format!("ApiKey {}", api_key))
            .map_err(|_| {
                NovuError::InvalidConfiguration(String::from(
                    "The api key contains characters that are not allowed in a header",
                ))
            })?;
        authorization.set_sensitive(true);

        let base_url = config.parse_backend_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|err| {
            NovuError::InvalidConfiguration(format!("Failed to build the http client: {}", err))
        })?;

        Ok(Transport {
            http_client,
            base_url,
            authorization,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `segments` below `<base url>/v1`, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, NovuError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                NovuError::InvalidConfiguration(format!(
                    "{} cannot be used as a base url",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(API_VERSION)
            .extend(segments);

        Ok(url)
    }

    pub async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, NovuError> {
        let url = self.endpoint(segments)?;

        tracing::debug!("Sending {} {}", method, url.path());

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, self.authorization.clone());

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(|err| {
            tracing::error!("Failed to execute request: {:?}", err);
            NovuError::Transport(err)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, NovuError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(body).map_err(NovuError::Encode)?;

        self.execute(method, segments, Some(body)).await?.decode()
    }

    pub async fn send_empty<T>(&self, method: Method, segments: &[&str]) -> Result<T, NovuError>
    where
        T: DeserializeOwned,
    {
        self.execute(method, segments, None).await?.decode()
    }
}

impl RawResponse {
    /// Maps non-2xx statuses to [`NovuError::Api`] and decodes everything else
    /// into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, NovuError> {
        if !self.status.is_success() {
            let message = extract_error_message(self.status, &self.body);
            tracing::error!("Novu API responded with {}: {}", self.status, message);

            return Err(NovuError::Api {
                status: self.status,
                message,
            });
        }

        serde_json::from_slice(&self.body).map_err(|err| {
            tracing::error!(
                "Failed to decode response body ({:?}): {:?}",
                self.headers.get(CONTENT_TYPE),
                err
            );
            NovuError::Decode(err)
        })
    }
}
