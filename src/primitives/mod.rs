pub mod account;
pub mod ss58;
