//! Pay input model.
//!
//! This module defines [`PayInputs`], the numeric snapshot of a pay stub form
//! that the calculator consumes.

use serde::{Deserialize, Serialize};

/// The numeric inputs for a single pay calculation.
///
/// Values are binary floating point because the rounding contract of the
/// calculator is defined in terms of binary floating point arithmetic.
/// Percentages are expressed on a 0-100 scale.
///
/// # Example
///
/// ```
/// use paystub_engine::models::PayInputs;
///
/// let inputs = PayInputs {
///     hours_worked: 40.0,
///     hourly_rate: 20.0,
///     fed_tax_pct: 10.0,
///     ..PayInputs::default()
/// };
/// assert_eq!(inputs.other_earnings, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayInputs {
    /// Hours worked in the period.
    pub hours_worked: f64,
    /// Hourly pay rate.
    pub hourly_rate: f64,
    /// Additional earnings; negative values represent adjustments.
    pub other_earnings: f64,
    /// Federal income tax percentage.
    pub fed_tax_pct: f64,
    /// State income tax percentage.
    pub state_tax_pct: f64,
    /// Social security percentage.
    pub ss_pct: f64,
    /// Medicare percentage.
    pub medicare_pct: f64,
    /// Flat additional deduction.
    pub other_deduction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_all_zero() {
        let inputs = PayInputs::default();
        assert_eq!(inputs.hours_worked, 0.0);
        assert_eq!(inputs.hourly_rate, 0.0);
        assert_eq!(inputs.other_earnings, 0.0);
        assert_eq!(inputs.fed_tax_pct, 0.0);
        assert_eq!(inputs.state_tax_pct, 0.0);
        assert_eq!(inputs.ss_pct, 0.0);
        assert_eq!(inputs.medicare_pct, 0.0);
        assert_eq!(inputs.other_deduction, 0.0);
    }

    #[test]
    fn test_deserialize_partial_inputs_defaults_missing_fields() {
        let json = r#"{ "hours_worked": 12.5, "hourly_rate": 18 }"#;

        let inputs: PayInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.hours_worked, 12.5);
        assert_eq!(inputs.hourly_rate, 18.0);
        assert_eq!(inputs.medicare_pct, 0.0);
    }
}
