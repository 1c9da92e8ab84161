use std::fmt;

use async_trait::async_trait;
use subxt::{
    backend::{legacy::LegacyRpcMethods, rpc::RpcClient},
    dynamic::Value,
    ext::scale_value,
    tx::Payload,
    OnlineClient, PolkadotConfig,
};
use tracing::{debug, info, instrument};

use crate::{Account, ChainError, SessionKeys};

use super::ValidatorChain;

const VALIDATOR_SET_PALLET: &str = "ValidatorSet";
const SESSION_PALLET: &str = "Session";

/// A [`ValidatorChain`] backed by a websocket connection to a Substrate node.
pub struct SubxtChain {
    /// Endpoint the connection was opened against
    url: String,
    /// Typed client used for storage queries and transaction submission
    api: OnlineClient<PolkadotConfig>,
    /// Raw RPC methods, sharing the same connection as `api`
    rpc: LegacyRpcMethods<PolkadotConfig>,
}

impl SubxtChain {
    /// Open a websocket connection to the node at `url` and fetch its runtime metadata.
    ///
    /// Plain `ws://` endpoints are accepted.
    pub async fn connect(url: &str) -> Result<Self, ChainError> {
        let rpc_client = RpcClient::from_insecure_url(url).await?;
        let api = OnlineClient::<PolkadotConfig>::from_rpc_client(rpc_client.clone()).await?;
        let rpc = LegacyRpcMethods::<PolkadotConfig>::new(rpc_client);

        info!(url, spec_version = api.runtime_version().spec_version, "Connected to node");

        Ok(Self { url: url.to_owned(), api, rpc })
    }

    async fn fetch_or_default(&self, entry: &'static str) -> Result<Value, ChainError> {
        let address = subxt::dynamic::storage(VALIDATOR_SET_PALLET, entry, ());
        let thunk = self.api.storage().at_latest().await?.fetch_or_default(&address).await?;

        Ok(thunk.to_value().map_err(subxt::Error::from)?.remove_context())
    }

    /// Re-shape the opaque rotated keys into the runtime's `Keys` type so they can be used
    /// as a dynamic call argument.
    fn session_keys_value(&self, keys: &SessionKeys) -> Result<Value, ChainError> {
        let metadata = self.api.metadata();
        let keys_type = metadata
            .pallet_by_name(SESSION_PALLET)
            .and_then(|pallet| pallet.call_variant_by_name("set_keys"))
            .and_then(|call| call.fields.first())
            .map(|field| field.ty.id)
            .ok_or(ChainError::MissingMetadata { pallet: SESSION_PALLET, item: "set_keys" })?;

        let mut bytes = keys.as_bytes();
        let value = scale_value::scale::decode_as_type(&mut bytes, keys_type, metadata.types())
            .map_err(|e| ChainError::SessionKeys(e.to_string()))?;

        if !bytes.is_empty() {
            return Err(ChainError::SessionKeys(format!("{} trailing bytes", bytes.len())))
        }

        Ok(value.remove_context())
    }

    async fn submit<Call: Payload>(
        &self,
        call: &Call,
        account: &Account,
    ) -> Result<(), ChainError> {
        // nonce is resolved by the node from the account's latest state
        let events = self
            .api
            .tx()
            .sign_and_submit_then_watch_default(call, account.signer())
            .await?
            .wait_for_finalized_success()
            .await?;

        info!(hash = ?events.extrinsic_hash(), "Transaction finalized");

        Ok(())
    }
}

#[async_trait]
impl ValidatorChain for SubxtChain {
    #[instrument(skip(self))]
    async fn approved_validators(&self) -> Result<Value, ChainError> {
        self.fetch_or_default("ApprovedValidators").await
    }

    #[instrument(skip(self))]
    async fn validators(&self) -> Result<Value, ChainError> {
        self.fetch_or_default("Validators").await
    }

    #[instrument(skip(self))]
    async fn rotate_keys(&self) -> Result<SessionKeys, ChainError> {
        let keys = SessionKeys::from(self.rpc.author_rotate_keys().await?);
        debug!(?keys, "Rotated session keys");

        Ok(keys)
    }

    #[instrument(skip_all, fields(address = account.address()))]
    async fn set_keys(&self, account: &Account, keys: SessionKeys) -> Result<(), ChainError> {
        let keys = self.session_keys_value(&keys)?;
        let proof = Value::from_bytes(Vec::<u8>::new());
        let call = subxt::dynamic::tx(SESSION_PALLET, "set_keys", vec![keys, proof]);

        self.submit(&call, account).await
    }

    #[instrument(skip_all, fields(address = account.address()))]
    async fn add_validator_again(&self, account: &Account) -> Result<(), ChainError> {
        let validator = Value::from_bytes(account.account_id());
        let call = subxt::dynamic::tx(VALIDATOR_SET_PALLET, "add_validator_again", vec![validator]);

        self.submit(&call, account).await
    }
}

impl fmt::Debug for SubxtChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubxtChain").field("url", &self.url).finish_non_exhaustive()
    }
}
