use async_trait::async_trait;
use subxt::dynamic::Value;

use crate::{Account, ChainError, SessionKeys};

/// The remote operations needed to onboard a validator.
#[async_trait]
pub trait ValidatorChain: Send + Sync {
    /// Read the `ValidatorSet::ApprovedValidators` storage value. A missing entry yields the
    /// storage default.
    async fn approved_validators(&self) -> Result<Value, ChainError>;

    /// Read the `ValidatorSet::Validators` storage value. A missing entry yields the storage
    /// default.
    async fn validators(&self) -> Result<Value, ChainError>;

    /// Ask the node to generate a fresh set of session keys and return their public parts.
    async fn rotate_keys(&self) -> Result<SessionKeys, ChainError>;

    /// Submit `Session::set_keys` for the account with an empty ownership proof, and wait
    /// for it to be included.
    async fn set_keys(&self, account: &Account, keys: SessionKeys) -> Result<(), ChainError>;

    /// Submit `ValidatorSet::add_validator_again` for the account and wait for it to be
    /// included.
    async fn add_validator_again(&self, account: &Account) -> Result<(), ChainError>;
}
