use serde::{Deserialize, Serialize};

/// State of the Omni layer as reported by `omni_getinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmniInfo {
    /// Client version as an integer, e.g. `1200000`.
    #[serde(rename = "omnicoreversion_int")]
    pub omnicore_version_int: u64,
    /// Client version string, e.g. `"0.12.0"`.
    #[serde(rename = "omnicoreversion")]
    pub omnicore_version: String,
    /// Legacy Master Core version string; dropped by recent daemons.
    #[serde(rename = "mastercoreversion", default, skip_serializing_if = "String::is_empty")]
    pub master_core_version: String,
    /// Version of the underlying Bitcoin Core.
    #[serde(rename = "bitcoincoreversion")]
    pub bitcoin_core_version: String,
    /// Height of the last processed block.
    pub block: u64,
    /// Timestamp of the last processed block.
    pub blocktime: u64,
    /// Omni transactions found in the last processed block.
    #[serde(rename = "blocktransactions")]
    pub block_transactions: u64,
    /// Omni transactions processed in total.
    #[serde(rename = "totaltransactions")]
    pub total_transactions: u64,
    /// Active protocol alerts.
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// A protocol alert carried in [`OmniInfo::alerts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert type as an integer.
    #[serde(rename = "alerttypeint")]
    pub type_int: i64,
    /// Alert type as text.
    #[serde(rename = "alerttype")]
    pub alert_type: String,
    /// Expiry value (block height or timestamp, depending on the type).
    #[serde(rename = "alertexpiry")]
    pub expiry: String,
    /// Human-readable alert text.
    #[serde(rename = "alertmessage")]
    pub message: String,
}
