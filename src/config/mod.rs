//! Configuration loading and management for the Pay Stub Engine.
//!
//! This module loads the engine configuration (stub wording, logo path,
//! output directory and server address) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use paystub_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/paystub.yaml").unwrap();
//! println!("Logo: {}", config.logo_path().display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, ServerConfig};
