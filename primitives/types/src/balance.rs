use serde::{Deserialize, Serialize};

/// Balance of one property held by an address.
///
/// Amounts are decimal strings, exactly as the daemon formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Property identifier.
    #[serde(rename = "propertyid")]
    pub property_id: u32,
    /// Available amount.
    pub balance: String,
    /// Amount reserved by pending offers.
    pub reserved: String,
}

/// Balance of a single, already known property (`omni_getbalance`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBalance {
    /// Available amount.
    pub balance: String,
    /// Amount reserved by pending offers.
    pub reserved: String,
    /// Amount frozen by the issuer, reported by daemons with freezing enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<String>,
}
