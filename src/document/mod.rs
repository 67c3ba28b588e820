//! Pay stub document generation.
//!
//! This module lays out a stub page from [`StubMetadata`](crate::models::StubMetadata),
//! loads the optional employer logo, and hands the layout to a
//! [`PageRenderer`] that produces the saved document.
//!
//! # Example
//!
//! ```
//! use paystub_engine::document::{StubDocumentBuilder, generate_stub};
//! use paystub_engine::error::EngineError;
//! use paystub_engine::models::FormValues;
//!
//! let form = FormValues::default();
//! let result = generate_stub(&form, None, None, &StubDocumentBuilder::default());
//! assert!(matches!(result, Err(EngineError::MissingRenderingDependency { .. })));
//! ```

mod builder;
mod logo;
#[cfg(feature = "pdf")]
mod pdf;
mod renderer;

pub use builder::{
    DEFAULT_EMPLOYEE_FILE_STEM, DocumentStyle, LEFT_MARGIN, LINE_HEIGHT, LOGO_GAP, LOGO_WIDTH,
    LOGO_X, PAY_FREQUENCY_X, PAY_PERIOD_X, StubDocumentBuilder, TOP_MARGIN, build_layout,
    stub_file_name,
};
pub use logo::{decode_logo, load_logo};
#[cfg(feature = "pdf")]
pub use pdf::PdfRenderer;
pub use renderer::{PDF_DEPENDENCY, PageRenderer, RenderedStub, available_renderer, generate_stub};
