use reqwest::Method;

use crate::domain::preferences::{SubscriberPreferencesResponse, UpdateSubscriberPreferencesOptions};
use crate::domain::subscriber::{SubscriberPayload, SubscriberResponse};
use crate::error::NovuError;
use crate::transport::Transport;

const SUBSCRIBERS: &str = "subscribers";
const PREFERENCES: &str = "preferences";

/// Operations on `/v1/subscribers`.
pub struct SubscriberApi<'a> {
    transport: &'a Transport,
}

impl<'a> SubscriberApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        SubscriberApi { transport }
    }

    /// Creates the subscriber, or updates it when the id is already known.
    /// `subscriber_id` always wins over the id set in `payload`.
    #[tracing::instrument(
        name = "Identifying a subscriber",
        skip(self, payload),
        fields(subscriber_id = %subscriber_id)
    )]
    pub async fn identify(
        &self,
        subscriber_id: &str,
        payload: &SubscriberPayload,
    ) -> Result<SubscriberResponse, NovuError> {
        let body = SubscriberPayload {
            subscriber_id: Some(subscriber_id.to_string()),
            ..payload.clone()
        };

        self.transport
            .send_json(Method::POST, &[SUBSCRIBERS], &body)
            .await
    }

    #[tracing::instrument(
        name = "Updating a subscriber",
        skip(self, payload),
        fields(subscriber_id = %subscriber_id)
    )]
    pub async fn update(
        &self,
        subscriber_id: &str,
        payload: &SubscriberPayload,
    ) -> Result<SubscriberResponse, NovuError> {
        self.transport
            .send_json(Method::PUT, &[SUBSCRIBERS, subscriber_id], payload)
            .await
    }

    #[tracing::instrument(
        name = "Deleting a subscriber",
        skip(self),
        fields(subscriber_id = %subscriber_id)
    )]
    pub async fn delete(&self, subscriber_id: &str) -> Result<SubscriberResponse, NovuError> {
        self.transport
            .send_empty(Method::DELETE, &[SUBSCRIBERS, subscriber_id])
            .await
    }

    #[tracing::instrument(
        name = "Fetching a subscriber",
        skip(self),
        fields(subscriber_id = %subscriber_id)
    )]
    pub async fn get(&self, subscriber_id: &str) -> Result<SubscriberResponse, NovuError> {
        self.transport
            .send_empty(Method::GET, &[SUBSCRIBERS, subscriber_id])
            .await
    }

    #[tracing::instrument(
        name = "Fetching subscriber preferences",
        skip(self),
        fields(subscriber_id = %subscriber_id)
    )]
    pub async fn get_preferences(
        &self,
        subscriber_id: &str,
    ) -> Result<SubscriberPreferencesResponse, NovuError> {
        self.transport
            .send_empty(Method::GET, &[SUBSCRIBERS, subscriber_id, PREFERENCES])
            .await
    }

    #[tracing::instrument(
        name = "Updating subscriber preferences",
        skip(self, options),
        fields(
            subscriber_id = %subscriber_id,
            topic_id = %topic_id
        )
    )]
    pub async fn update_preferences(
        &self,
        subscriber_id: &str,
        topic_id: &str,
        options: &UpdateSubscriberPreferencesOptions,
    ) -> Result<SubscriberPreferencesResponse, NovuError> {
        self.transport
            .send_json(
                Method::PATCH,
                &[SUBSCRIBERS, subscriber_id, PREFERENCES, topic_id],
                options,
            )
            .await
    }
}
