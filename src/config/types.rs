//! Configuration types for the Pay Stub Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file is a valid configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::document::DocumentStyle;
use crate::logging::LoggingConfig;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wording printed on the stub.
    pub document: DocumentStyle,
    /// Logo image path, relative to the working directory.
    pub logo_path: PathBuf,
    /// Directory rendered stubs are saved into.
    pub output_dir: PathBuf,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Log level and format.
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            document: DocumentStyle::default(),
            logo_path: PathBuf::from("paystub.png"),
            output_dir: PathBuf::from("."),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
