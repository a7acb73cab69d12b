mod events;
mod subscribers;

pub use events::EventApi;
pub use subscribers::SubscriberApi;
