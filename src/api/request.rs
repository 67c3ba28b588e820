//! Request types for the Pay Stub Engine API.
//!
//! The preview endpoint takes the bare form values; the stub endpoints accept
//! the same flat object plus optional rendering switches.

use serde::{Deserialize, Serialize};

use crate::models::FormValues;

/// Request body for the `/stub` and `/stub/layout` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubRequest {
    /// The submitted form fields.
    #[serde(flatten)]
    pub form: FormValues,
    /// Whether to look for the employer logo.
    #[serde(default = "default_include_logo", rename = "includeLogo")]
    pub include_logo: bool,
}

fn default_include_logo() -> bool {
    true
}
