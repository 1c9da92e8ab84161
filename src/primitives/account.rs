use std::{fmt, str::FromStr};

use subxt_signer::{sr25519, SecretUri};

use crate::{primitives::ss58::encode_ss58, AddressScheme, ChainError, Config};

/// An account derived from a secret URI, able to sign transactions.
pub struct Account {
    /// Signing keypair for the configured scheme
    keypair: sr25519::Keypair,
    /// Raw 32-byte account id (the public key for sr25519)
    account_id: [u8; 32],
    /// SS58 rendering of the account id with the configured prefix
    address: String,
}

impl Account {
    /// Derive an account from a secret URI such as `//Alice`, a mnemonic with an optional
    /// derivation path, or a hex-encoded seed.
    pub fn derive(seed: &str, config: &Config) -> Result<Self, ChainError> {
        let uri = SecretUri::from_str(seed).map_err(|e| ChainError::SecretUri(e.to_string()))?;

        let keypair = match config.address_scheme {
            AddressScheme::Sr25519 => sr25519::Keypair::from_uri(&uri)
                .map_err(|e| ChainError::Derivation(e.to_string()))?,
        };

        let account_id = keypair.public_key().0;
        let address = encode_ss58(config.address_prefix, &account_id);

        Ok(Self { keypair, account_id, address })
    }

    /// The SS58 address of the account.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The raw account id.
    pub fn account_id(&self) -> &[u8; 32] {
        &self.account_id
    }

    /// The keypair used to sign transactions on behalf of this account.
    pub fn signer(&self) -> &sr25519::Keypair {
        &self.keypair
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account").field("address", &self.address).finish_non_exhaustive()
    }
}
