//! Stub metadata model.

use serde::{Deserialize, Serialize};

use super::PayResult;

/// Everything printed on a pay stub: company and employee details, the pay
/// row, and the calculated figures.
///
/// Optional employee fields are empty strings when absent; the builder omits
/// their lines in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubMetadata {
    /// Employer name.
    pub company_name: String,
    /// Employer address.
    pub company_address: String,
    /// Employer phone number.
    pub company_phone: String,
    /// Employee name; also names the output file.
    pub employee_name: String,
    /// Employee identifier (last four SSN digits), optional.
    pub employee_id: String,
    /// Employee address, optional.
    pub employee_address: String,
    /// Employee PayPal account, optional.
    pub employee_paypal: String,
    /// Pay date as entered.
    pub pay_date: String,
    /// Pay period as entered.
    pub pay_period: String,
    /// Pay frequency as entered.
    pub pay_frequency: String,
    /// Calculated figures.
    pub pay: PayResult,
}

impl StubMetadata {
    /// Creates metadata with every text field empty.
    pub fn empty(pay: PayResult) -> Self {
        Self {
            company_name: String::new(),
            company_address: String::new(),
            company_phone: String::new(),
            employee_name: String::new(),
            employee_id: String::new(),
            employee_address: String::new(),
            employee_paypal: String::new(),
            pay_date: String::new(),
            pay_period: String::new(),
            pay_frequency: String::new(),
            pay,
        }
    }
}
