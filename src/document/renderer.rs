//! Rendering a laid out stub into a document.
//!
//! The drawing backend sits behind the [`PageRenderer`] trait. When no
//! backend is available, generation stops with
//! [`EngineError::MissingRenderingDependency`] before anything is calculated
//! or drawn.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::calculation::calculate;
use crate::error::{EngineError, EngineResult};
use crate::models::{FormValues, LayoutInstruction, LogoImage, LogoPlacement, PayResult, StubDocument};

use super::builder::StubDocumentBuilder;

/// Name reported when no rendering backend is compiled in.
pub const PDF_DEPENDENCY: &str = "lopdf (cargo feature `pdf`)";

/// A page-drawing backend.
///
/// Calls arrive in page order: the logo first when present, then every text
/// instruction, then a single `finish`.
pub trait PageRenderer {
    /// Draws the logo at the given placement.
    fn draw_logo(&mut self, logo: &LogoImage, placement: &LogoPlacement) -> EngineResult<()>;

    /// Draws one line of text.
    fn draw_text(&mut self, instruction: &LayoutInstruction) -> EngineResult<()>;

    /// Encodes the page and returns the document bytes.
    fn finish(&mut self) -> EngineResult<Vec<u8>>;
}

/// Returns the compiled-in rendering backend, if any.
#[cfg(feature = "pdf")]
pub fn available_renderer() -> Option<Box<dyn PageRenderer + Send>> {
    Some(Box::new(super::PdfRenderer::new()))
}

/// Returns the compiled-in rendering backend, if any.
#[cfg(not(feature = "pdf"))]
pub fn available_renderer() -> Option<Box<dyn PageRenderer + Send>> {
    None
}

/// A finished pay stub document.
#[derive(Debug, Clone)]
pub struct RenderedStub {
    /// The calculated figures printed on the stub.
    pub result: PayResult,
    /// The layout that was drawn.
    pub document: StubDocument,
    /// The encoded document.
    pub bytes: Vec<u8>,
}

impl RenderedStub {
    /// The file name the document is saved under.
    pub fn file_name(&self) -> &str {
        &self.document.file_name
    }

    /// Writes the document into `dir` and returns the full path.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> EngineResult<PathBuf> {
        let dir = dir.as_ref();
        let path = dir.join(&self.document.file_name);

        fs::create_dir_all(dir).map_err(|e| EngineError::Io {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&path, &self.bytes).map_err(|e| EngineError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(path = %path.display(), bytes = self.bytes.len(), "Pay stub saved");
        Ok(path)
    }
}

/// Calculates, lays out and renders a pay stub from raw form values.
///
/// The logo only moves content down; `None` produces the same lines higher on
/// the page. A missing renderer fails before any work is done.
pub fn generate_stub(
    form: &FormValues,
    logo: Option<&LogoImage>,
    renderer: Option<&mut (dyn PageRenderer + Send + 'static)>,
    builder: &StubDocumentBuilder,
) -> EngineResult<RenderedStub> {
    let Some(renderer) = renderer else {
        warn!(dependency = PDF_DEPENDENCY, "No document renderer available");
        return Err(EngineError::MissingRenderingDependency {
            dependency: PDF_DEPENDENCY.to_string(),
        });
    };

    let result = calculate(&form.pay_inputs());
    let metadata = form.stub_metadata(result.clone());
    let document = builder.layout(&metadata, logo);

    if let (Some(image), Some(placement)) = (logo, document.logo.as_ref()) {
        renderer.draw_logo(image, placement)?;
    }
    for instruction in &document.instructions {
        renderer.draw_text(instruction)?;
    }
    let bytes = renderer.finish()?;

    debug!(
        file_name = %document.file_name,
        lines = document.instructions.len(),
        has_logo = document.logo.is_some(),
        bytes = bytes.len(),
        "Pay stub rendered"
    );

    Ok(RenderedStub {
        result,
        document,
        bytes,
    })
}
