//! Pay result models.
//!
//! This module contains [`PayResult`], the rounded monetary figures produced
//! by the calculator, the [`PayPreview`] surface derived from it, and
//! [`PayCalculation`], which pairs a result with its audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// The rounded monetary figures of one pay calculation.
///
/// Every amount carries exactly two fractional digits, so its string form is
/// already the display form.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PayResult;
///
/// let result = PayResult::zero();
/// assert_eq!(result.net_pay.to_string(), "0.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// Gross pay (hours x rate + other earnings).
    pub gross: Decimal,
    /// Federal tax amount.
    pub fed_amt: Decimal,
    /// State tax amount.
    pub state_amt: Decimal,
    /// Social security amount.
    pub ss_amt: Decimal,
    /// Medicare amount.
    pub medicare_amt: Decimal,
    /// Flat additional deduction.
    pub other_deduction: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions.
    pub net_pay: Decimal,
}

impl PayResult {
    /// A result with every figure at `0.00`.
    pub fn zero() -> Self {
        let zero = Decimal::new(0, 2);
        Self {
            gross: zero,
            fed_amt: zero,
            state_amt: zero,
            ss_amt: zero,
            medicare_amt: zero,
            other_deduction: zero,
            total_deductions: zero,
            net_pay: zero,
        }
    }

    /// Returns the preview surface for this result.
    pub fn preview(&self) -> PayPreview {
        PayPreview::from(self)
    }
}

/// The subset of a result shown in the on-screen preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPreview {
    /// Gross pay formatted with two decimals.
    pub gross: String,
    /// Total deductions formatted with two decimals.
    pub total_deductions: String,
    /// Net pay formatted with two decimals.
    pub net_pay: String,
    /// Whether the preview panel should be shown.
    pub visible: bool,
}

impl From<&PayResult> for PayPreview {
    fn from(result: &PayResult) -> Self {
        Self {
            gross: format!("{:.2}", result.gross),
            total_deductions: format!("{:.2}", result.total_deductions),
            net_pay: format!("{:.2}", result.net_pay),
            visible: true,
        }
    }
}

/// A pay result together with the audit trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// The rounded figures.
    pub result: PayResult,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> PayResult {
        PayResult {
            gross: Decimal::new(80000, 2),
            fed_amt: Decimal::new(8000, 2),
            state_amt: Decimal::new(4000, 2),
            ss_amt: Decimal::new(4960, 2),
            medicare_amt: Decimal::new(1160, 2),
            other_deduction: Decimal::new(0, 2),
            total_deductions: Decimal::new(18120, 2),
            net_pay: Decimal::new(61880, 2),
        }
    }

    #[test]
    fn test_zero_result_formats_with_two_decimals() {
        let result = PayResult::zero();
        assert_eq!(result.gross.to_string(), "0.00");
        assert_eq!(result.total_deductions.to_string(), "0.00");
        assert_eq!(result.other_deduction, Decimal::ZERO);
    }

    #[test]
    fn test_preview_formats_three_figures() {
        let preview = sample_result().preview();

        assert_eq!(preview.gross, "800.00");
        assert_eq!(preview.total_deductions, "181.20");
        assert_eq!(preview.net_pay, "618.80");
        assert!(preview.visible);
    }

    #[test]
    fn test_result_serializes_amounts_as_strings() {
        let json = serde_json::to_value(sample_result()).unwrap();

        assert_eq!(json["gross"], "800.00");
        assert_eq!(json["ss_amt"], "49.60");
        assert_eq!(json["net_pay"], "618.80");
    }
}
