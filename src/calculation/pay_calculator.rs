//! Gross pay, deduction and net pay calculation.
//!
//! This module turns a [`PayInputs`] snapshot into the rounded figures printed
//! on a pay stub. The calculation is pure and infallible.
//!
//! Each tax amount is derived from the unrounded gross and rounded on its own.
//! Total deductions is the sum of those rounded amounts plus the rounded flat
//! deduction, so it can differ from `gross x sum(pct)` by a few cents. Net pay
//! is the unrounded gross less that total, rounded once.

use std::time::Instant;

use crate::models::{AuditStep, AuditTrace, PayCalculation, PayInputs, PayResult};

use super::rounding::{round2, to_money};

/// Intermediate figures, all rounded to two decimals except the raw gross.
///
/// Kept as floats so amounts of any magnitude survive until the final
/// conversion to [`rust_decimal::Decimal`].
struct Figures {
    gross_raw: f64,
    gross: f64,
    fed: f64,
    state: f64,
    ss: f64,
    medicare: f64,
    other: f64,
    total: f64,
    net: f64,
}

/// A percentage-based deduction and where it is read from.
struct TaxRule {
    rule_id: &'static str,
    rule_name: &'static str,
    pct: f64,
}

fn tax_rules(inputs: &PayInputs) -> [TaxRule; 4] {
    [
        TaxRule {
            rule_id: "federal_tax",
            rule_name: "Federal Tax",
            pct: inputs.fed_tax_pct,
        },
        TaxRule {
            rule_id: "state_tax",
            rule_name: "State Tax",
            pct: inputs.state_tax_pct,
        },
        TaxRule {
            rule_id: "social_security",
            rule_name: "Social Security",
            pct: inputs.ss_pct,
        },
        TaxRule {
            rule_id: "medicare",
            rule_name: "Medicare",
            pct: inputs.medicare_pct,
        },
    ]
}

fn percentage_of(gross: f64, pct: f64) -> f64 {
    gross * (pct / 100.0)
}

fn compute(inputs: &PayInputs) -> Figures {
    let gross_raw = inputs.hours_worked * inputs.hourly_rate + inputs.other_earnings;

    let [fed, state, ss, medicare] =
        tax_rules(inputs).map(|rule| round2(percentage_of(gross_raw, rule.pct)));
    let other = round2(inputs.other_deduction);
    let total = round2(fed + state + ss + medicare + other);
    let net = round2(gross_raw - total);

    Figures {
        gross_raw,
        gross: round2(gross_raw),
        fed,
        state,
        ss,
        medicare,
        other,
        total,
        net,
    }
}

fn to_result(figures: &Figures) -> PayResult {
    PayResult {
        gross: to_money(figures.gross),
        fed_amt: to_money(figures.fed),
        state_amt: to_money(figures.state),
        ss_amt: to_money(figures.ss),
        medicare_amt: to_money(figures.medicare),
        other_deduction: to_money(figures.other),
        total_deductions: to_money(figures.total),
        net_pay: to_money(figures.net),
    }
}

/// Calculates gross pay, deductions and net pay.
///
/// Never fails: zero inputs produce a result of all `0.00`.
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::calculate;
/// use paystub_engine::models::PayInputs;
///
/// let inputs = PayInputs {
///     hours_worked: 40.0,
///     hourly_rate: 20.0,
///     fed_tax_pct: 10.0,
///     state_tax_pct: 5.0,
///     ss_pct: 6.2,
///     medicare_pct: 1.45,
///     ..PayInputs::default()
/// };
///
/// let result = calculate(&inputs);
/// assert_eq!(result.gross.to_string(), "800.00");
/// assert_eq!(result.total_deductions.to_string(), "181.20");
/// assert_eq!(result.net_pay.to_string(), "618.80");
/// ```
pub fn calculate(inputs: &PayInputs) -> PayResult {
    to_result(&compute(inputs))
}

/// Calculates pay and records an audit step for every figure.
///
/// The figures are identical to [`calculate`].
pub fn calculate_with_audit(inputs: &PayInputs) -> PayCalculation {
    let start_time = Instant::now();
    let figures = compute(inputs);
    let result = to_result(&figures);

    let mut steps = Vec::with_capacity(8);
    let mut step_number: u32 = 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "hours_worked": inputs.hours_worked,
            "hourly_rate": inputs.hourly_rate,
            "other_earnings": inputs.other_earnings
        }),
        output: serde_json::json!({
            "gross_unrounded": figures.gross_raw,
            "gross": result.gross.to_string()
        }),
        reasoning: format!(
            "{} hours x ${} + ${} other earnings = ${}",
            inputs.hours_worked, inputs.hourly_rate, inputs.other_earnings, result.gross
        ),
    });
    step_number += 1;

    let amounts = [
        result.fed_amt,
        result.state_amt,
        result.ss_amt,
        result.medicare_amt,
    ];
    for (rule, amount) in tax_rules(inputs).iter().zip(amounts) {
        steps.push(AuditStep {
            step_number,
            rule_id: rule.rule_id.to_string(),
            rule_name: rule.rule_name.to_string(),
            input: serde_json::json!({
                "gross_unrounded": figures.gross_raw,
                "percentage": rule.pct
            }),
            output: serde_json::json!({
                "amount": amount.to_string()
            }),
            reasoning: format!(
                "${} x {}% = ${} (rounded independently)",
                figures.gross_raw, rule.pct, amount
            ),
        });
        step_number += 1;
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "other_deduction".to_string(),
        rule_name: "Other Deduction".to_string(),
        input: serde_json::json!({
            "other_deduction": inputs.other_deduction
        }),
        output: serde_json::json!({
            "amount": result.other_deduction.to_string(),
            "printed": figures.other > 0.0
        }),
        reasoning: if figures.other > 0.0 {
            format!("Flat deduction of ${}", result.other_deduction)
        } else {
            "No other deduction - line omitted from stub".to_string()
        },
    });
    step_number += 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "total_deductions".to_string(),
        rule_name: "Total Deductions".to_string(),
        input: serde_json::json!({
            "federal": result.fed_amt.to_string(),
            "state": result.state_amt.to_string(),
            "social_security": result.ss_amt.to_string(),
            "medicare": result.medicare_amt.to_string(),
            "other": result.other_deduction.to_string()
        }),
        output: serde_json::json!({
            "total_deductions": result.total_deductions.to_string()
        }),
        reasoning: format!(
            "${} + ${} + ${} + ${} + ${} = ${}",
            result.fed_amt,
            result.state_amt,
            result.ss_amt,
            result.medicare_amt,
            result.other_deduction,
            result.total_deductions
        ),
    });
    step_number += 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_unrounded": figures.gross_raw,
            "total_deductions": result.total_deductions.to_string()
        }),
        output: serde_json::json!({
            "net_pay": result.net_pay.to_string()
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            figures.gross_raw, result.total_deductions, result.net_pay
        ),
    });

    PayCalculation {
        result,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_inputs() -> PayInputs {
        PayInputs {
            hours_worked: 40.0,
            hourly_rate: 20.0,
            other_earnings: 0.0,
            fed_tax_pct: 10.0,
            state_tax_pct: 5.0,
            ss_pct: 6.2,
            medicare_pct: 1.45,
            other_deduction: 0.0,
        }
    }

    #[test]
    fn test_reference_week() {
        let result = calculate(&reference_inputs());

        assert_eq!(result.gross, dec("800.00"));
        assert_eq!(result.fed_amt, dec("80.00"));
        assert_eq!(result.state_amt, dec("40.00"));
        assert_eq!(result.ss_amt, dec("49.60"));
        assert_eq!(result.medicare_amt, dec("11.60"));
        assert_eq!(result.other_deduction, dec("0.00"));
        assert_eq!(result.total_deductions, dec("181.20"));
        assert_eq!(result.net_pay, dec("618.80"));
    }

    #[test]
    fn test_all_zero_inputs_give_zero_result() {
        let result = calculate(&PayInputs::default());
        assert_eq!(result, PayResult::zero());
        assert_eq!(result.net_pay.to_string(), "0.00");
    }

    #[test]
    fn test_other_earnings_and_deduction() {
        let inputs = PayInputs {
            other_earnings: 50.0,
            other_deduction: 25.5,
            ..reference_inputs()
        };
        let result = calculate(&inputs);

        // gross 850: 85.00 + 42.50 + 52.70 + 12.325 -> 12.33
        assert_eq!(result.gross, dec("850.00"));
        assert_eq!(result.medicare_amt, dec("12.33"));
        assert_eq!(result.other_deduction, dec("25.50"));
        assert_eq!(result.total_deductions, dec("218.03"));
        assert_eq!(result.net_pay, dec("631.97"));
    }

    #[test]
    fn test_taxes_use_unrounded_gross() {
        // gross 10.005 displays as 10.01, but 50% of the raw gross is 5.0025 -> 5.00
        let inputs = PayInputs {
            hours_worked: 1.0,
            hourly_rate: 10.005,
            fed_tax_pct: 50.0,
            ..PayInputs::default()
        };
        let result = calculate(&inputs);

        assert_eq!(result.gross, dec("10.01"));
        assert_eq!(result.fed_amt, dec("5.00"));
    }

    #[test]
    fn test_deductions_are_rounded_independently() {
        // three taxes of 0.335 each round to 0.34; the aggregate 1.005 would be 1.01
        let inputs = PayInputs {
            hours_worked: 1.0,
            hourly_rate: 6.7,
            fed_tax_pct: 5.0,
            state_tax_pct: 5.0,
            ss_pct: 5.0,
            ..PayInputs::default()
        };
        let result = calculate(&inputs);

        assert_eq!(result.fed_amt, dec("0.34"));
        assert_eq!(result.state_amt, dec("0.34"));
        assert_eq!(result.ss_amt, dec("0.34"));
        assert_eq!(result.total_deductions, dec("1.02"));
        // 6.70 - 1.02; subtracting the unrounded 1.005 would give 5.70
        assert_eq!(result.net_pay, dec("5.68"));
    }

    #[test]
    fn test_amounts_past_i64_cents_do_not_overflow() {
        let inputs = PayInputs {
            hours_worked: 1e17,
            hourly_rate: 1.0,
            fed_tax_pct: 100.0,
            state_tax_pct: 100.0,
            ss_pct: 100.0,
            medicare_pct: 100.0,
            ..PayInputs::default()
        };
        let result = calculate(&inputs);

        assert_eq!(result.gross, dec("100000000000000000.00"));
        assert_eq!(result.fed_amt, dec("100000000000000000.00"));
        assert_eq!(result.total_deductions, dec("400000000000000000.00"));
        assert_eq!(result.net_pay, dec("-300000000000000000.00"));
        assert_eq!(result.net_pay.to_string(), "-300000000000000000.00");
    }

    #[test]
    fn test_amounts_past_decimal_range_saturate() {
        let inputs = PayInputs {
            hours_worked: 1e300,
            hourly_rate: 1.0,
            fed_tax_pct: 10.0,
            ..PayInputs::default()
        };
        let result = calculate_with_audit(&inputs).result;

        assert_eq!(result.gross, Decimal::MAX);
        assert_eq!(result.fed_amt, Decimal::MAX);
        assert_eq!(result.net_pay, Decimal::MAX);
    }

    #[test]
    fn test_net_pay_is_unrounded_gross_less_rounded_total() {
        let inputs = PayInputs {
            hours_worked: 1.0,
            hourly_rate: 10.005,
            other_deduction: 1.0,
            ..PayInputs::default()
        };
        let result = calculate(&inputs);

        // 10.005 - 1.00 = 9.005 -> 9.01
        assert_eq!(result.gross, dec("10.01"));
        assert_eq!(result.total_deductions, dec("1.00"));
        assert_eq!(result.net_pay, dec("9.01"));
    }

    #[test]
    fn test_negative_other_earnings_reduce_gross() {
        let inputs = PayInputs {
            hours_worked: 10.0,
            hourly_rate: 15.0,
            other_earnings: -20.0,
            ..PayInputs::default()
        };
        let result = calculate(&inputs);

        assert_eq!(result.gross, dec("130.00"));
        assert_eq!(result.net_pay, dec("130.00"));
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let inputs = reference_inputs();
        assert_eq!(calculate(&inputs), calculate(&inputs));
    }

    #[test]
    fn test_audit_matches_plain_calculation() {
        let inputs = reference_inputs();
        let calculation = calculate_with_audit(&inputs);

        assert_eq!(calculation.result, calculate(&inputs));
        assert_eq!(calculation.audit_trace.steps.len(), 8);
        let numbers: Vec<u32> = calculation
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_audit_records_each_tax() {
        let calculation = calculate_with_audit(&reference_inputs());
        let trace = &calculation.audit_trace;

        let ss = trace.step("social_security").unwrap();
        assert_eq!(ss.output["amount"].as_str().unwrap(), "49.60");
        assert_eq!(ss.input["percentage"].as_f64().unwrap(), 6.2);

        let total = trace.step("total_deductions").unwrap();
        assert!(total.reasoning.contains("$181.20"));

        let net = trace.step("net_pay").unwrap();
        assert_eq!(net.output["net_pay"].as_str().unwrap(), "618.80");
    }

    #[test]
    fn test_audit_notes_omitted_other_deduction() {
        let calculation = calculate_with_audit(&reference_inputs());
        let other = calculation.audit_trace.step("other_deduction").unwrap();

        assert_eq!(other.output["printed"].as_bool().unwrap(), false);
        assert!(other.reasoning.contains("omitted"));
    }
}
