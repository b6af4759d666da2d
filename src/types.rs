//! Wire records returned by the node's blocks and leasing endpoints.
//!
//! Field names follow the node's JSON exactly. Records are carried verbatim:
//! nothing here validates addresses, signatures or amounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A 64-bit quantity.
///
/// The node encodes these as JSON numbers by default, or as decimal strings
/// when the request asks for the large-significand format (see
/// [`RequestOptions::large_significand_format`](crate::RequestOptions::large_significand_format)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Long {
    Number(i64),
    String(String),
}

impl Long {
    /// Numeric value, parsing the string form if needed.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Long::Number(n) => Some(*n),
            Long::String(s) => s.parse().ok(),
        }
    }
}

impl From<i64> for Long {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Consensus data attached to every block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NxtConsensus {
    #[serde(rename = "base-target")]
    pub base_target: u64,
    #[serde(rename = "generation-signature")]
    pub generation_signature: String,
}

/// Block header as served by `/blocks/headers/*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    #[serde(rename = "blocksize")]
    pub block_size: u32,
    pub reward: Long,
    pub signature: String,
    pub generator: String,
    pub version: u8,
    /// Signature of the previous block.
    pub reference: String,
    #[serde(default)]
    pub features: Vec<Long>,
    pub total_fee: Long,
    /// Absent on blocks produced before the reward feature activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_reward: Option<Long>,
    pub transaction_count: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub height: u32,
    #[serde(rename = "nxt-consensus")]
    pub nxt_consensus: NxtConsensus,

    // Added by newer node versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions_root: Option<String>,
    #[serde(default, rename = "VRF", skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
    /// Header fields not typed above, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlockHeader {
    /// Block timestamp as a UTC datetime, `None` if out of chrono's range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }
}

/// Full block: a header plus fee and its transactions in block order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub header: BlockHeader,
    pub fee: Long,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A transaction inside a block.
///
/// Only the fields common to every transaction type are typed; the rest of
/// the record is kept as-is in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub id: String,
    pub timestamp: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Transaction {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// An active lease as listed by `/leasing/active/{address}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseRecord {
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub id: String,
    pub sender: String,
    pub sender_public_key: String,
    pub recipient: String,
    pub amount: Long,
    pub fee: Long,
    /// `null` on the wire when the fee is paid in the native token.
    #[serde(default)]
    pub fee_asset_id: Option<String>,
    pub timestamp: u64,
    #[serde(default)]
    pub proofs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `/blocks/height` and `/blocks/height/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub height: u32,
}

/// Body of `/blocks/delay/{id}/{blockNum}`: average delay in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delay {
    pub delay: u64,
}
