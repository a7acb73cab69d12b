use serde::{Deserialize, Serialize};

use crate::domain::channel::ChannelType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriberPreferencesResponse {
    #[serde(default)]
    pub data: Vec<SubscriberPreference>,
}

/// Preference of a subscriber for a single notification template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriberPreference {
    pub template: PreferenceTemplate,
    pub preference: Preference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceTemplate {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub critical: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preference {
    pub enabled: bool,
    pub channels: PreferenceChannels,
}

/// Channels the template is configured for; absent channels are not part of
/// the template's workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceChannels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_app: Option<bool>,
}

impl PreferenceChannels {
    pub fn get(&self, channel: ChannelType) -> Option<bool> {
        match channel {
            ChannelType::Email => self.email,
            ChannelType::Sms => self.sms,
            ChannelType::Push => self.push,
            ChannelType::Chat => self.chat,
            ChannelType::InApp => self.in_app,
        }
    }
}

impl SubscriberPreferencesResponse {
    pub fn for_template(&self, template_id: &str) -> Option<&SubscriberPreference> {
        self.data
            .iter()
            .find(|preference| preference.template.id == template_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscriberPreferencesChannel {
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub enabled: bool,
}

/// Change request for one topic. Channel overrides are applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscriberPreferencesOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel: Vec<UpdateSubscriberPreferencesChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl UpdateSubscriberPreferencesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn channel(mut self, channel_type: ChannelType, enabled: bool) -> Self {
        self.channel.push(UpdateSubscriberPreferencesChannel {
            channel_type,
            enabled,
        });
        self
    }
}
