//! SS58 address encoding for 32-byte account ids.

use blake2::{Blake2b512, Digest};
use thiserror::Error;

const CHECKSUM_PREIMAGE_PREFIX: &[u8] = b"SS58PRE";
const CHECKSUM_LEN: usize = 2;
const ACCOUNT_ID_LEN: usize = 32;

/// Highest prefix representable by the two-byte SS58 identifier.
pub const MAX_PREFIX: u16 = 16_383;

/// An error that can occur when decoding an SS58 address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum AddressError {
    #[error("Invalid base58 string")]
    Base58,
    #[error("Invalid address length: {0} bytes")]
    Length(usize),
    #[error("Invalid address prefix")]
    Prefix,
    #[error("Invalid address checksum")]
    Checksum,
}

/// Encode an account id as an SS58 address using the given network prefix.
///
/// Prefixes above [`MAX_PREFIX`] are truncated to their lower 14 bits.
pub fn encode_ss58(prefix: u16, account_id: &[u8; ACCOUNT_ID_LEN]) -> String {
    let prefix = prefix & MAX_PREFIX;

    let mut payload = match prefix {
        0..=63 => vec![prefix as u8],
        _ => {
            // lower 6 bits go in the first byte, remaining bits in the second
            let first = ((prefix & 0b0000_0000_1111_1100) as u8) >> 2;
            let second = ((prefix >> 8) as u8) | (((prefix & 0b0000_0000_0000_0011) as u8) << 6);
            vec![first | 0b0100_0000, second]
        }
    };
    payload.extend_from_slice(account_id);

    let hash = checksum(&payload);
    payload.extend_from_slice(&hash[..CHECKSUM_LEN]);

    bs58::encode(payload).into_string()
}

/// Decode an SS58 address into its network prefix and account id.
pub fn decode_ss58(address: &str) -> Result<(u16, [u8; ACCOUNT_ID_LEN]), AddressError> {
    let data = bs58::decode(address).into_vec().map_err(|_| AddressError::Base58)?;
    if data.len() < 2 {
        return Err(AddressError::Length(data.len()))
    }

    let (prefix_len, prefix) = match data[0] {
        0..=63 => (1, data[0] as u16),
        64..=127 => {
            let lower = (data[0] << 2) | (data[1] >> 6);
            let upper = data[1] & 0b0011_1111;
            (2, lower as u16 | ((upper as u16) << 8))
        }
        _ => return Err(AddressError::Prefix),
    };

    if data.len() != prefix_len + ACCOUNT_ID_LEN + CHECKSUM_LEN {
        return Err(AddressError::Length(data.len()))
    }

    let body_end = prefix_len + ACCOUNT_ID_LEN;
    let hash = checksum(&data[..body_end]);
    if data[body_end..] != hash[..CHECKSUM_LEN] {
        return Err(AddressError::Checksum)
    }

    let mut account_id = [0u8; ACCOUNT_ID_LEN];
    account_id.copy_from_slice(&data[prefix_len..body_end]);

    Ok((prefix, account_id))
}

fn checksum(payload: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_PREIMAGE_PREFIX);
    hasher.update(payload);
    hasher.finalize().to_vec()
}
