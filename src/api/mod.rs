//! HTTP API module for the Pay Stub Engine.
//!
//! This module provides the REST endpoints a host form calls to preview
//! figures, inspect the page layout, and download the rendered stub.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::StubRequest;
pub use response::{ApiError, LayoutResponse, PreviewResponse};
pub use state::{AppState, RendererFactory};
