use reqwest::StatusCode;

#[derive(thiserror::Error)]
pub enum NovuError {
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Failed to reach the Novu API.")]
    Transport(#[from] reqwest::Error),
    #[error("Novu API responded with {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("Failed to decode the Novu API response.")]
    Decode(#[source] serde_json::Error),
    #[error("Failed to encode the request payload.")]
    Encode(#[source] serde_json::Error),
}

impl NovuError {
    /// Status code of the response, only set for API errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NovuError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl std::fmt::Debug for NovuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;

        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            write!(f, "\n\tCaused by: {}", cause)?;
            current = cause.source();
        }

        Ok(())
    }
}

/// Pulls a readable message out of an error body. Novu answers with
/// `{"statusCode": .., "message": ..}` where `message` is a string or a list
/// of validation messages.
pub(crate) fn extract_error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        match value.get("message") {
            Some(serde_json::Value::String(message)) => return message.clone(),
            Some(serde_json::Value::Array(messages)) => {
                let joined = messages
                    .iter()
                    .map(|message| match message {
                        serde_json::Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<String>>()
                    .join("; ");

                if !joined.is_empty() {
                    return joined;
                }
            }
            _ => {}
        }
    }

    let raw = String::from_utf8_lossy(body).trim().to_string();

    if !raw.is_empty() {
        return raw;
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
