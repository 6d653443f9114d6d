use core_types::{PaymentRecord, RawAmount};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use tracing::debug;

/// Filters raw payment records down to their valid monetary amounts.
///
/// Output order follows input order and duplicates are kept. Records whose
/// `Amount` is missing, non-numeric, NaN, infinite, blank, malformed in
/// shape, or outside decimal range are dropped silently; invalid records are
/// a data-quality fact, not an error. Full precision is preserved, since the
/// aggregation downstream must operate on unrounded values. The input is not
/// mutated.
pub fn sanitize_amounts(records: &[PaymentRecord]) -> Vec<Decimal> {
    let amounts: Vec<Decimal> = records
        .iter()
        .filter_map(|record| record.amount.as_ref())
        .filter_map(resolve_amount)
        .filter(amount_passes_policy)
        .collect();

    let dropped = records.len() - amounts.len();
    if dropped > 0 {
        debug!(
            dropped,
            kept = amounts.len(),
            "excluded records with unusable amounts"
        );
    }

    amounts
}

/// Resolves a raw `Amount` field to a finite decimal value, if it has one.
///
/// Textual amounts must parse fully: partial parses and blank strings are
/// rejected. Whether a blank amount should instead mean zero is an open
/// business question; until it is answered the blank is treated as invalid.
fn resolve_amount(raw: &RawAmount) -> Option<Decimal> {
    match raw {
        RawAmount::Number(n) => {
            if !n.is_finite() {
                return None;
            }
            Decimal::from_f64(*n)
        }
        RawAmount::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            Decimal::from_str(trimmed)
                .ok()
                .or_else(|| Decimal::from_scientific(trimmed).ok())
        }
        RawAmount::Other(_) => None,
    }
}

/// Business rule deciding which resolved amounts enter the statistics.
///
/// Negative amounts currently pass through with their sign preserved.
/// Whether they should be filtered out or folded to their absolute value is
/// an unanswered question for the product owner; the rule lives in this one
/// predicate so a ruling changes nothing else.
fn amount_passes_policy(_amount: &Decimal) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record_with_amount(raw: RawAmount) -> PaymentRecord {
        PaymentRecord {
            amount: Some(raw),
            transaction_information: None,
        }
    }

    #[test]
    fn filters_records_with_no_amount() {
        let payments = [
            PaymentRecord {
                amount: None,
                transaction_information: Some("Missing Amount".to_string()),
            },
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(1)]);
    }

    #[test]
    fn filters_nan_amounts() {
        let payments = [
            record_with_amount(RawAmount::Number(f64::NAN)),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(1)]);
    }

    #[test]
    fn filters_infinite_amounts() {
        let payments = [
            record_with_amount(RawAmount::Number(f64::INFINITY)),
            record_with_amount(RawAmount::Number(f64::NEG_INFINITY)),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(1)]);
    }

    #[test]
    fn coerces_valid_textual_amounts() {
        let payments = [
            PaymentRecord::from_text("750"),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(750), dec!(1)]);
    }

    #[test]
    fn accepts_scientific_notation_text() {
        let payments = [PaymentRecord::from_text("1.5e2")];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(150)]);
    }

    #[test]
    fn filters_non_numeric_textual_amounts() {
        let payments = [
            PaymentRecord::from_text("NotANumber"),
            PaymentRecord::from_text("12 dollars"),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(1)]);
    }

    #[test]
    fn filters_blank_textual_amounts() {
        let payments = [
            PaymentRecord::from_text(""),
            PaymentRecord::from_text("   "),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(1)]);
    }

    #[test]
    fn filters_malformed_amount_shapes() {
        let payments = [
            record_with_amount(RawAmount::Other(json!({ "nested": 5 }))),
            record_with_amount(RawAmount::Other(json!([1, 2, 3]))),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(1)]);
    }

    #[test]
    fn passes_negative_amounts_through() {
        let payments = [
            PaymentRecord::from_number(-50.0),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(-50), dec!(1)]);
    }

    #[test]
    fn keeps_full_precision_for_later_calculation() {
        let payments = [
            PaymentRecord::from_number(750.12345),
            PaymentRecord::from_number(1.0),
        ];

        assert_eq!(sanitize_amounts(&payments), vec![dec!(750.12345), dec!(1)]);
    }

    #[test]
    fn preserves_input_order_and_duplicates() {
        let payments = [
            PaymentRecord::from_number(3.0),
            PaymentRecord::from_number(1.0),
            PaymentRecord::from_number(3.0),
        ];

        assert_eq!(
            sanitize_amounts(&payments),
            vec![dec!(3), dec!(1), dec!(3)]
        );
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert_eq!(sanitize_amounts(&[]), Vec::<Decimal>::new());
    }
}
