use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single payment entry as loaded from an external source.
///
/// Both fields are optional on the wire: records with no `Amount` (or an
/// unusable one) are excluded during sanitization, and
/// `TransactionInformation` is free-text metadata that plays no part in any
/// calculation. The record is never mutated by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(rename = "Amount", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<RawAmount>,

    #[serde(
        rename = "TransactionInformation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_information: Option<String>,
}

impl PaymentRecord {
    /// Builds a record with a numeric amount and no metadata.
    pub fn from_number(amount: f64) -> Self {
        Self {
            amount: Some(RawAmount::Number(amount)),
            transaction_information: None,
        }
    }

    /// Builds a record with a textual amount and no metadata.
    pub fn from_text(amount: impl Into<String>) -> Self {
        Self {
            amount: Some(RawAmount::Text(amount.into())),
            transaction_information: None,
        }
    }
}

/// The `Amount` field exactly as it appears on the wire.
///
/// Upstream sources are loosely typed: an amount may arrive as a JSON number
/// or as a numeric string. The `Other` arm catches every remaining shape
/// (object, array, boolean, null) so that one malformed record costs only
/// that record, not the whole document. The variant is resolved to a single
/// numeric representation once, by the sanitizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    Other(Value),
}
