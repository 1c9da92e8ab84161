/// Default SS58 prefix of the Stability network (generic Substrate).
pub const DEFAULT_ADDRESS_PREFIX: u16 = 42;

/// The signature scheme used to derive account keys from a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum AddressScheme {
    /// Schnorr signatures over Ristretto25519.
    #[default]
    Sr25519,
}

/// Address format parameters used to derive and render accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Network prefix used when rendering SS58 addresses.
    pub address_prefix: u16,
    /// Key scheme used when deriving the account from a seed.
    pub address_scheme: AddressScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self { address_prefix: DEFAULT_ADDRESS_PREFIX, address_scheme: AddressScheme::default() }
    }
}
