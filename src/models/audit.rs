//! Audit trace models.
//!
//! Every rule the calculator applies is recorded as an [`AuditStep`] so a
//! reader can see how each figure on the stub was reached.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use paystub_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.step("gross_pay").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step recorded for the given rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Test Rule".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "test".to_string(),
        }
    }

    #[test]
    fn test_step_lookup_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![create_step(1, "gross_pay"), create_step(2, "federal_tax")],
            duration_us: 5,
        };

        assert_eq!(trace.step("federal_tax").unwrap().step_number, 2);
        assert!(trace.step("net_pay").is_none());
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = create_step(3, "medicare");
        let json = serde_json::to_string(&step).unwrap();

        assert!(json.contains("\"step_number\":3"));
        assert!(json.contains("\"rule_id\":\"medicare\""));
    }
}
