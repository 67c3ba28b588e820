//! Application state for the Pay Stub Engine API.
//!
//! Handlers share the loaded configuration and a way to obtain a renderer
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::document::{PageRenderer, available_renderer};

/// Produces a fresh renderer per request, or `None` when rendering is unavailable.
pub type RendererFactory = fn() -> Option<Box<dyn PageRenderer + Send>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Where document renderers come from.
    renderer_factory: RendererFactory,
}

impl AppState {
    /// Creates state using the compiled-in renderer.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_renderer_factory(config, available_renderer)
    }

    /// Creates state with a custom renderer source.
    pub fn with_renderer_factory(config: ConfigLoader, renderer_factory: RendererFactory) -> Self {
        Self {
            config: Arc::new(config),
            renderer_factory,
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a new renderer for one document.
    pub fn renderer(&self) -> Option<Box<dyn PageRenderer + Send>> {
        (self.renderer_factory)()
    }
}
