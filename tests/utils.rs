use std::sync::Mutex;

use async_trait::async_trait;
use subxt::dynamic::Value;

use stability_cli::{Account, ChainError, Config, SessionKeys, ValidatorChain};

/// A call made against the [`MockChain`], in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ApprovedValidators,
    RotateKeys,
    SetKeys { address: String, keys: SessionKeys },
    Validators,
    AddValidatorAgain { address: String },
}

impl Call {
    fn is_transaction(&self) -> bool {
        matches!(self, Call::SetKeys { .. } | Call::AddValidatorAgain { .. })
    }
}

/// An in-memory chain serving fixed storage values and recording every call.
#[derive(Debug)]
pub struct MockChain {
    approved: Value,
    validators: Value,
    keys: SessionKeys,
    fail_set_keys: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockChain {
    pub fn new(approved: Value, validators: Value) -> Self {
        Self {
            approved,
            validators,
            keys: SessionKeys::from(vec![0xab; 64]),
            fail_set_keys: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make `set_keys` fail the way a rejected transaction does.
    pub fn with_failing_set_keys(mut self) -> Self {
        self.fail_set_keys = true;
        self
    }

    /// The session keys returned by `rotate_keys`.
    pub fn keys(&self) -> SessionKeys {
        self.keys.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the state-mutating calls.
    pub fn transactions(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_transaction).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ValidatorChain for MockChain {
    async fn approved_validators(&self) -> Result<Value, ChainError> {
        self.record(Call::ApprovedValidators);
        Ok(self.approved.clone())
    }

    async fn validators(&self) -> Result<Value, ChainError> {
        self.record(Call::Validators);
        Ok(self.validators.clone())
    }

    async fn rotate_keys(&self) -> Result<SessionKeys, ChainError> {
        self.record(Call::RotateKeys);
        Ok(self.keys.clone())
    }

    async fn set_keys(&self, account: &Account, keys: SessionKeys) -> Result<(), ChainError> {
        if self.fail_set_keys {
            return Err(ChainError::SessionKeys("keys type mismatch".to_owned()))
        }
        self.record(Call::SetKeys { address: account.address().to_owned(), keys });
        Ok(())
    }

    async fn add_validator_again(&self, account: &Account) -> Result<(), ChainError> {
        self.record(Call::AddValidatorAgain { address: account.address().to_owned() });
        Ok(())
    }
}

pub fn account(seed: &str) -> Account {
    Account::derive(seed, &Config::default()).expect("valid seed")
}

/// Encode accounts the way a `Vec<AccountId32>` storage value decodes dynamically.
pub fn account_list(accounts: &[&Account]) -> Value {
    Value::unnamed_composite(
        accounts
            .iter()
            .map(|account| Value::unnamed_composite(vec![Value::from_bytes(account.account_id())])),
    )
}
