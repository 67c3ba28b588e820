//! Core data models for the Pay Stub Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod form_values;
mod layout;
mod pay_inputs;
mod pay_result;
mod stub_metadata;

pub use audit::{AuditStep, AuditTrace};
pub use form_values::FormValues;
pub use layout::{LayoutInstruction, LogoImage, LogoPlacement, StubDocument};
pub use pay_inputs::PayInputs;
pub use pay_result::{PayCalculation, PayPreview, PayResult};
pub use stub_metadata::StubMetadata;
