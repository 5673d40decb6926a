use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News source error ({status}): {message}")]
    Source { status: String, message: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    pub fn source_failure(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Message suitable for showing to the person who ran the search.
    pub fn user_message(&self) -> String {
        match self {
            Error::Source { message, .. } => format!("Error from API: {}", message),
            Error::InvalidQuery(message) => message.clone(),
            other => format!("An unexpected error occurred: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = Error::source_failure("error", "apiKeyInvalid");
        assert_eq!(err.user_message(), "Error from API: apiKeyInvalid");
        assert_eq!(err.to_string(), "News source error (error): apiKeyInvalid");

        let err = Error::InvalidQuery("Please enter a search topic.".to_string());
        assert_eq!(err.user_message(), "Please enter a search topic.");

        let err = Error::Config("unknown scorer".to_string());
        assert!(err.user_message().starts_with("An unexpected error occurred"));
    }
}
