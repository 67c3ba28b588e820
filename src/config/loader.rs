//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::document::{DocumentStyle, StubDocumentBuilder};
use crate::error::{EngineError, EngineResult};
use crate::logging::LoggingConfig;

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// document:
///   footer: "Generated by IDEATE FORWARD CONSULTING LLC"
///   state_label: "State (MO)"
///   file_extension: "pdf"
/// logo_path: "paystub.png"
/// output_dir: "."
/// server:
///   bind: "127.0.0.1:3000"
/// logging:
///   level: "info"
///   format: "compact"
/// ```
///
/// # Example
///
/// ```no_run
/// use paystub_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/paystub.yaml").unwrap();
/// println!("Footer: {}", loader.document_style().footer);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrongly typed values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        info!(path = %path_str, "Loaded configuration");
        Ok(Self { config })
    }

    /// Parses configuration from YAML text.
    fn parse(content: &str) -> Result<EngineConfig, String> {
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the stub wording.
    pub fn document_style(&self) -> &DocumentStyle {
        &self.config.document
    }

    /// Returns a document builder using the configured wording.
    pub fn builder(&self) -> StubDocumentBuilder {
        StubDocumentBuilder::new(self.config.document.clone())
    }

    /// Returns the configured logo path.
    pub fn logo_path(&self) -> &Path {
        &self.config.logo_path
    }

    /// Returns the directory stubs are saved into.
    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    /// Returns the server bind address.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind
    }

    /// Returns the log level and format.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}
