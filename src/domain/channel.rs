use serde::{Deserialize, Serialize};

/// Delivery channel a preference applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    Email,
    Sms,
    Push,
    Chat,
    InApp,
}

impl ChannelType {
    pub fn parse(channel: &str) -> Result<ChannelType, String> {
        match channel {
            "email" => Ok(ChannelType::Email),
            "sms" => Ok(ChannelType::Sms),
            "push" => Ok(ChannelType::Push),
            "chat" => Ok(ChannelType::Chat),
            "in_app" => Ok(ChannelType::InApp),
            _ => Err(format!("{} is not a valid channel type", channel)),
        }
    }
}

impl AsRef<str> for ChannelType {
    fn as_ref(&self) -> &str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Sms => "sms",
            ChannelType::Push => "push",
            ChannelType::Chat => "chat",
            ChannelType::InApp => "in_app",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
