use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five-statistic summary of a batch of payments.
///
/// This struct is the final output of the `AnalyticsEngine` and the data
/// transfer object handed to reporting or display layers. Every field has
/// been rounded to two decimal places; nothing earlier in the pipeline is
/// rounded. It has no identity beyond its values and is produced fresh per
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mean: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub median: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(rename = "standardDeviation", with = "rust_decimal::serde::float")]
    pub standard_deviation: Decimal,
}
