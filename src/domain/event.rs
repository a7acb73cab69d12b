use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::subscriber::SubscriberPayload;

/// Recipient of a triggered notification: either a known subscriber id or a
/// subscriber described inline, which the service creates or updates first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TriggerRecipient {
    SubscriberId(String),
    Subscriber(SubscriberPayload),
}

impl TriggerRecipient {
    pub fn subscriber(subscriber_id: impl Into<String>, payload: SubscriberPayload) -> Self {
        TriggerRecipient::Subscriber(SubscriberPayload {
            subscriber_id: Some(subscriber_id.into()),
            ..payload
        })
    }
}

impl From<&str> for TriggerRecipient {
    fn from(subscriber_id: &str) -> Self {
        TriggerRecipient::SubscriberId(subscriber_id.to_string())
    }
}

impl From<String> for TriggerRecipient {
    fn from(subscriber_id: String) -> Self {
        TriggerRecipient::SubscriberId(subscriber_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPayload {
    pub to: Vec<TriggerRecipient>,
    #[serde(default)]
    pub payload: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<TriggerRecipient>,
}

impl TriggerPayload {
    pub fn to(recipient: impl Into<TriggerRecipient>) -> Self {
        TriggerPayload {
            to: vec![recipient.into()],
            ..Default::default()
        }
    }

    pub fn with_payload(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn with_transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = Some(transaction_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerResponse {
    #[serde(default)]
    pub data: TriggerResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerResult {
    pub acknowledged: bool,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelTriggerResponse {
    #[serde(default)]
    pub data: bool,
}
