use thiserror::Error;

/// Error returned when the value of an absent [`Optional`](crate::Optional) is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("optional::Optional: value requested from an absent container")]
pub struct AbsentError;

/// Error that may occur while moving an [`Optional`](crate::Optional) in or out of JSON.
#[cfg(feature = "json")]
#[derive(Debug, Error)]
pub enum JsonError {
    /// There was no container to decode into.
    #[error("optional::Optional: unmarshal into a null target")]
    InvalidTarget,
    /// The underlying JSON codec failed. Passed through as-is.
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}
