#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Omni Core RPC Types
//!
//! Plain records decoded from Omni Core responses, and the typed arguments
//! some RPC methods take. Field names follow the daemon's
//! JSON keys through `serde` renames; the records carry no behavior.

/// Token balances (`omni_getallbalancesforaddress`, `omni_getbalance`).
pub mod balance;
/// Node state (`omni_getinfo`).
pub mod info;
/// Argument types: ecosystems, token types, DEx actions, issuance details.
pub mod property;

pub use balance::{AddressBalance, Balance};
pub use info::{Alert, OmniInfo};
pub use property::{CrowdsaleTerms, DexAction, Ecosystem, NewProperty, TokenType};
