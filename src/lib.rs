#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod common;
pub use common::{ChainError, Outcome, Rejection, SessionKeys};

mod config;
pub use config::{AddressScheme, Config};

mod primitives;
pub use primitives::{
    account::Account,
    ss58::{self, AddressError},
};

mod chain;
pub use chain::{SubxtChain, ValidatorChain, ValidatorList};

mod validation;
pub use validation::{configure_validator, start_validation};
