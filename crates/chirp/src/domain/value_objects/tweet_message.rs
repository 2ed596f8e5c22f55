//! TweetMessage - Length-checked tweet body

use crate::domain::errors::DomainError;

/// Maximum tweet length, counted in characters rather than bytes
pub const MAX_TWEET_LENGTH: usize = 280;

/// Tweet body that is known to be non-blank and at most
/// [`MAX_TWEET_LENGTH`] characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetMessage(String);

impl TweetMessage {
    pub fn parse(message: impl Into<String>) -> Result<Self, DomainError> {
        let message = message.into();

        if message.trim().is_empty() {
            return Err(DomainError::Validation(
                "Tweet message must not be empty".to_string(),
            ));
        }

        let length = message.chars().count();
        if length > MAX_TWEET_LENGTH {
            return Err(DomainError::Validation(format!(
                "Tweet message is {} characters, maximum is {}",
                length, MAX_TWEET_LENGTH
            )));
        }

        Ok(Self(message))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TweetMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TweetMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TweetMessage {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
