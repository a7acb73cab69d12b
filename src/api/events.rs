use reqwest::Method;
use serde::Serialize;

use crate::domain::event::{CancelTriggerResponse, TriggerPayload, TriggerResponse};
use crate::error::NovuError;
use crate::transport::Transport;

const EVENTS: &str = "events";
const TRIGGER: &str = "trigger";

#[derive(Serialize)]
struct TriggerEventBody<'a> {
    name: &'a str,
    #[serde(flatten)]
    options: &'a TriggerPayload,
}

/// Operations on `/v1/events`.
pub struct EventApi<'a> {
    transport: &'a Transport,
}

impl<'a> EventApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        EventApi { transport }
    }

    /// Triggers the workflow identified by `event_id` for every recipient.
    #[tracing::instrument(
        name = "Triggering a notification event",
        skip(self, payload),
        fields(
            event_id = %event_id,
            recipients = payload.to.len()
        )
    )]
    pub async fn trigger(
        &self,
        event_id: &str,
        payload: &TriggerPayload,
    ) -> Result<TriggerResponse, NovuError> {
        let body = TriggerEventBody {
            name: event_id,
            options: payload,
        };

        self.transport
            .send_json(Method::POST, &[EVENTS, TRIGGER], &body)
            .await
    }

    /// Cancels delayed or digested notifications of a previous trigger.
    #[tracing::instrument(
        name = "Cancelling a triggered event",
        skip(self),
        fields(transaction_id = %transaction_id)
    )]
    pub async fn cancel(&self, transaction_id: &str) -> Result<CancelTriggerResponse, NovuError> {
        self.transport
            .send_empty(Method::DELETE, &[EVENTS, TRIGGER, transaction_id])
            .await
    }
}
