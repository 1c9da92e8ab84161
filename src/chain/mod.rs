mod client;
mod list;
mod spec;

pub use client::SubxtChain;
pub use list::ValidatorList;
pub use spec::ValidatorChain;
