use tracing::{info, instrument, warn};

use crate::{
    Account, ChainError, Config, Outcome, Rejection, SubxtChain, ValidatorChain, ValidatorList,
};

/// Message reported when the account has been added back to the validator set.
const SUCCESS_MESSAGE: &str = "Validator configured successfully";

/// Connect to the node at `endpoint`, derive the account from `seed` and try to promote it
/// to an active validator. See [`configure_validator`] for the individual steps.
///
/// Connection, derivation and transaction errors are returned as [`ChainError`]; expected
/// refusals are reported through [`Outcome::Failure`].
pub async fn start_validation(
    seed: &str,
    endpoint: &str,
    config: &Config,
) -> Result<Outcome, ChainError> {
    let chain = SubxtChain::connect(endpoint).await?;
    let account = Account::derive(seed, config)?;

    configure_validator(&chain, &account, config).await
}

/// Register fresh session keys for `account` and add it back to the active validator set.
///
/// The account must be in the approved validators list, otherwise nothing is submitted.
/// The session keys are always set before checking the active set, so an account that is
/// already a validator still ends up with rotated keys.
#[instrument(skip_all, fields(address = account.address()))]
pub async fn configure_validator<C: ValidatorChain + ?Sized>(
    chain: &C,
    account: &Account,
    config: &Config,
) -> Result<Outcome, ChainError> {
    let approved = chain.approved_validators().await?;
    let Some(approved) = ValidatorList::decode(&approved, config.address_prefix) else {
        return Ok(Rejection::ApprovedValidatorsUndecodable.into())
    };

    if !approved.contains(account.address()) {
        warn!(approved = approved.len(), "Account is not an approved validator");
        return Ok(Rejection::NotApproved.into())
    }

    let keys = chain.rotate_keys().await?;
    chain.set_keys(account, keys).await?;
    info!("Session keys set");

    let validators = chain.validators().await?;
    let Some(validators) = ValidatorList::decode(&validators, config.address_prefix) else {
        return Ok(Rejection::ValidatorsUndecodable.into())
    };

    if validators.contains(account.address()) {
        return Ok(Rejection::AlreadyValidator.into())
    }

    chain.add_validator_again(account).await?;
    info!("Validator added back to the active set");

    Ok(Outcome::success(SUCCESS_MESSAGE))
}
