//! Calculation logic for the Pay Stub Engine.
//!
//! This module contains lenient parsing of form numbers, two-decimal
//! rounding, and the gross/deduction/net pay calculation.

mod parsing;
mod pay_calculator;
mod rounding;

pub use parsing::parse_lenient;
pub use pay_calculator::{calculate, calculate_with_audit};
pub use rounding::{ROUNDING_EPSILON, round2, to_money};
