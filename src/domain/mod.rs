pub mod channel;
pub mod event;
pub mod preferences;
pub mod subscriber;

pub use channel::ChannelType;
pub use event::{CancelTriggerResponse, TriggerPayload, TriggerRecipient, TriggerResponse, TriggerResult};
pub use preferences::{
    Preference, PreferenceChannels, PreferenceTemplate, SubscriberPreference,
    SubscriberPreferencesResponse, UpdateSubscriberPreferencesChannel,
    UpdateSubscriberPreferencesOptions,
};
pub use subscriber::{
    ChannelCredentials, Subscriber, SubscriberChannel, SubscriberPayload, SubscriberResponse,
};
