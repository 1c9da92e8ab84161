use subxt::{
    dynamic::Value,
    ext::scale_value::{Composite, Primitive, ValueDef},
};

use crate::ss58::{decode_ss58, encode_ss58};

/// An ordered list of validator addresses read from chain storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorList(Vec<String>);

impl ValidatorList {
    /// Decode a dynamic storage value holding a sequence of account ids, rendering each
    /// account as an SS58 address with the given prefix.
    ///
    /// Returns `None` if the value is not a sequence, or if any item is not a 32-byte
    /// account id (optionally wrapped in single-field composites) or an SS58 string.
    pub fn decode(value: &Value, prefix: u16) -> Option<Self> {
        let ValueDef::Composite(Composite::Unnamed(items)) = &value.value else { return None };

        items
            .iter()
            .map(|item| account_id(item).map(|id| encode_ss58(prefix, &id)))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Returns true if the list contains the given address.
    pub fn contains(&self, address: &str) -> bool {
        self.0.iter().any(|a| a == address)
    }

    /// Returns the number of validators in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the addresses in storage order.
    pub fn addresses(&self) -> &[String] {
        &self.0
    }
}

fn account_id(value: &Value) -> Option<[u8; 32]> {
    match &value.value {
        ValueDef::Composite(Composite::Unnamed(bytes)) if bytes.len() == 32 => {
            let mut id = [0u8; 32];
            for (slot, byte) in id.iter_mut().zip(bytes) {
                let ValueDef::Primitive(Primitive::U128(byte)) = &byte.value else { return None };
                *slot = u8::try_from(*byte).ok()?;
            }
            Some(id)
        }
        // newtype wrappers such as `AccountId32([u8; 32])`
        ValueDef::Composite(Composite::Unnamed(inner)) if inner.len() == 1 => account_id(&inner[0]),
        ValueDef::Composite(Composite::Named(inner)) if inner.len() == 1 => account_id(&inner[0].1),
        ValueDef::Primitive(Primitive::String(address)) => decode_ss58(address).ok().map(|(_, id)| id),
        _ => None,
    }
}
