//! Raw form values as submitted by the host form.
//!
//! Field names follow the host form (`hoursWorked`, `fedTaxPct`, ...). Every
//! field is optional free text. Hosts may post strings, numbers or `null`;
//! numbers and booleans are kept as their JSON text and anything else reads
//! as absent, so deserializing a field never fails. Conversion into
//! [`PayInputs`] and [`StubMetadata`] never fails either.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::calculation::parse_lenient;

use super::{PayInputs, PayResult, StubMetadata};

/// A snapshot of every field on the pay stub form.
///
/// # Example
///
/// ```
/// use paystub_engine::models::FormValues;
///
/// let form: FormValues = serde_json::from_str(r#"{ "hoursWorked": "40", "hourlyRate": "abc" }"#).unwrap();
/// let inputs = form.pay_inputs();
/// assert_eq!(inputs.hours_worked, 40.0);
/// assert_eq!(inputs.hourly_rate, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    /// Hours worked.
    #[serde(deserialize_with = "field_text")]
    pub hours_worked: Option<String>,
    /// Hourly rate.
    #[serde(deserialize_with = "field_text")]
    pub hourly_rate: Option<String>,
    /// Other earnings.
    #[serde(deserialize_with = "field_text")]
    pub other_earnings: Option<String>,
    /// Federal tax percentage.
    #[serde(deserialize_with = "field_text")]
    pub fed_tax_pct: Option<String>,
    /// State tax percentage.
    #[serde(deserialize_with = "field_text")]
    pub state_tax_pct: Option<String>,
    /// Social security percentage.
    #[serde(deserialize_with = "field_text")]
    pub ss_pct: Option<String>,
    /// Medicare percentage.
    #[serde(deserialize_with = "field_text")]
    pub medicare_pct: Option<String>,
    /// Other deduction.
    #[serde(deserialize_with = "field_text")]
    pub other_deduction: Option<String>,
    /// Company name.
    #[serde(deserialize_with = "field_text")]
    pub company_name: Option<String>,
    /// Company address.
    #[serde(deserialize_with = "field_text")]
    pub company_address: Option<String>,
    /// Company phone.
    #[serde(deserialize_with = "field_text")]
    pub company_phone: Option<String>,
    /// Employee name.
    #[serde(deserialize_with = "field_text")]
    pub employee_name: Option<String>,
    /// Employee ID.
    #[serde(deserialize_with = "field_text")]
    pub employee_id: Option<String>,
    /// Employee address.
    #[serde(deserialize_with = "field_text")]
    pub employee_address: Option<String>,
    /// Employee PayPal account.
    #[serde(deserialize_with = "field_text")]
    pub employee_paypal: Option<String>,
    /// Pay date.
    #[serde(deserialize_with = "field_text")]
    pub pay_date: Option<String>,
    /// Pay period.
    #[serde(deserialize_with = "field_text")]
    pub pay_period: Option<String>,
    /// Pay frequency.
    #[serde(deserialize_with = "field_text")]
    pub pay_frequency: Option<String>,
}

/// Accepts any JSON value for a form field.
fn field_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn number(field: &Option<String>) -> f64 {
    field.as_deref().map(parse_lenient).unwrap_or(0.0)
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

impl FormValues {
    /// Reads the numeric fields, coercing anything unparsable to zero.
    pub fn pay_inputs(&self) -> PayInputs {
        PayInputs {
            hours_worked: number(&self.hours_worked),
            hourly_rate: number(&self.hourly_rate),
            other_earnings: number(&self.other_earnings),
            fed_tax_pct: number(&self.fed_tax_pct),
            state_tax_pct: number(&self.state_tax_pct),
            ss_pct: number(&self.ss_pct),
            medicare_pct: number(&self.medicare_pct),
            other_deduction: number(&self.other_deduction),
        }
    }

    /// Reads the text fields and pairs them with calculated figures.
    pub fn stub_metadata(&self, pay: PayResult) -> StubMetadata {
        StubMetadata {
            company_name: text(&self.company_name),
            company_address: text(&self.company_address),
            company_phone: text(&self.company_phone),
            employee_name: text(&self.employee_name),
            employee_id: text(&self.employee_id),
            employee_address: text(&self.employee_address),
            employee_paypal: text(&self.employee_paypal),
            pay_date: text(&self.pay_date),
            pay_period: text(&self.pay_period),
            pay_frequency: text(&self.pay_frequency),
            pay,
        }
    }
}
