use crate::error::AnalyticsError;
use crate::report::PaymentSummary;
use crate::rounding::round_to_two_dp;
use crate::sanitize::sanitize_amounts;
use core_types::PaymentRecord;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// A stateless calculator deriving descriptive statistics from payment
/// amounts.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the five summary statistics over a sanitized amount
    /// sequence and rounds each for presentation.
    ///
    /// # Arguments
    ///
    /// * `amounts` - The full-precision amounts that survived sanitization.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `PaymentSummary`, or
    /// `AnalyticsError::EmptyAmountSequence` when there is nothing to
    /// aggregate. The mean and standard deviation are undefined over zero
    /// elements, so the empty case is a contract violation surfaced to the
    /// caller rather than a NaN smuggled into the report.
    pub fn summarize(&self, amounts: &[Decimal]) -> Result<PaymentSummary, AnalyticsError> {
        if amounts.is_empty() {
            return Err(AnalyticsError::EmptyAmountSequence);
        }

        // One pass for the order statistics and the sum.
        let mut min = amounts[0];
        let mut max = amounts[0];
        let mut sum = Decimal::ZERO;
        for &amount in amounts {
            if amount < min {
                min = amount;
            }
            if amount > max {
                max = amount;
            }
            sum += amount;
        }
        let mean = sum / Decimal::from(amounts.len());

        Ok(PaymentSummary {
            max: round_to_two_dp(max),
            mean: round_to_two_dp(mean),
            median: round_to_two_dp(median(amounts)),
            min: round_to_two_dp(min),
            standard_deviation: round_to_two_dp(standard_deviation(amounts)?),
        })
    }
}

/// Analyses a batch of raw payment records end to end.
///
/// Composition of the pipeline stages: sanitize the records, aggregate the
/// surviving amounts, round every emitted field to two decimal places. When
/// sanitization leaves nothing to aggregate the engine's empty-sequence
/// error propagates; a partially-defined summary is never produced.
pub fn analyse_payments(records: &[PaymentRecord]) -> Result<PaymentSummary, AnalyticsError> {
    let amounts = sanitize_amounts(records);
    AnalyticsEngine::new().summarize(&amounts)
}

/// Population standard deviation of an amount sequence.
///
/// Uses divisor n, not n - 1: `sqrt((1/n) * Σ(xᵢ - mean)²)`. Returns the
/// unrounded value; callers wanting presentation precision apply
/// `round_to_two_dp` themselves.
pub fn standard_deviation(amounts: &[Decimal]) -> Result<Decimal, AnalyticsError> {
    if amounts.is_empty() {
        return Err(AnalyticsError::EmptyAmountSequence);
    }

    let n = Decimal::from(amounts.len());
    let sum: Decimal = amounts.iter().sum();
    let mean = sum / n;

    let variance = amounts
        .iter()
        .map(|amount| (*amount - mean) * (*amount - mean))
        .sum::<Decimal>()
        / n;

    variance.sqrt().ok_or_else(|| {
        AnalyticsError::InternalError("Failed to calculate square root for variance".to_string())
    })
}

/// Median over an ascending-sorted copy; the caller's ordering is left
/// untouched. Callers guarantee a non-empty slice.
fn median(amounts: &[Decimal]) -> Decimal {
    let mut sorted = amounts.to_vec();
    sorted.sort();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / Decimal::TWO
    }
}
