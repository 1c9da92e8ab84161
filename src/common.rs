use std::fmt;

use thiserror::Error;

/// Final result of a validation run, reported once by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The workflow completed. Carries a human-readable message.
    Success(String),
    /// The workflow was rejected. Carries a human-readable cause.
    Failure(String),
}

impl Outcome {
    /// Create a successful outcome with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Create a failed outcome with the given cause.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(error.into())
    }

    /// Returns true if this is a [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the message carried by either variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Self::Failure(rejection.to_string())
    }
}

/// An expected reason for the chain to refuse onboarding the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The approved validators storage did not decode as a list of accounts.
    #[error("Could not parse approved validators")]
    ApprovedValidatorsUndecodable,
    /// The account is not in the approved validators list.
    #[error("The account is not an approved validator")]
    NotApproved,
    /// The current validators storage did not decode as a list of accounts.
    #[error("Could not parse validators")]
    ValidatorsUndecodable,
    /// The account is already part of the active validator set.
    #[error("The account is already a validator")]
    AlreadyValidator,
}

/// An error raised by the chain client, the signer or the node itself.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ChainError {
    #[error("Chain client error: {0}")]
    Client(#[from] subxt::Error),
    #[error("Invalid secret URI: {0}")]
    SecretUri(String),
    #[error("Key derivation failed: {0}")]
    Derivation(String),
    #[error("Runtime has no `{pallet}::{item}` in its metadata")]
    MissingMetadata { pallet: &'static str, item: &'static str },
    #[error("Rotated session keys do not match the runtime keys type: {0}")]
    SessionKeys(String),
}

/// Opaque session keys generated by the node for consensus duties.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionKeys(pub Vec<u8>);

impl SessionKeys {
    /// Returns the raw SCALE-encoded keys.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SessionKeys {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKeys(0x{})", hex::encode(&self.0))
    }
}
