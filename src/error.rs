//! Error types for the Pay Stub Engine.
//!
//! Errors are `thiserror` enums. Only a handful of conditions can stop a pay
//! stub from being produced.
//! Numeric parsing never fails (unparsable values become zero) and a missing
//! logo is not an error, so neither appears here.

use thiserror::Error;

/// The main error type for the Pay Stub Engine.
///
/// # Example
///
/// ```
/// use paystub_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/paystub.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/paystub.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The document-rendering collaborator is not available.
    ///
    /// Generation aborts before any output is produced.
    #[error("Document renderer not available: {dependency} is required to generate pay stubs")]
    MissingRenderingDependency {
        /// The name of the missing rendering dependency.
        dependency: String,
    },

    /// The YAML configuration file is missing or unreadable.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The configured path.
        path: String,
    },

    /// The YAML configuration file is malformed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The configured path.
        path: String,
        /// The YAML parser's message.
        message: String,
    },

    /// The renderer failed while painting or encoding the document.
    #[error("Render error: {message}")]
    RenderError {
        /// A description of the rendering failure.
        message: String,
    },

    /// Writing the finished document failed.
    #[error("Failed to write '{path}': {message}")]
    Io {
        /// The path that could not be written.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rendering_dependency_names_dependency() {
        let error = EngineError::MissingRenderingDependency {
            dependency: "lopdf".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Document renderer not available: lopdf is required to generate pay stubs"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/paystub.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/paystub.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "config/paystub.yaml".to_string(),
            message: "document: invalid type: string, expected struct DocumentStyle".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file 'config/paystub.yaml': \
             document: invalid type: string, expected struct DocumentStyle"
        );
    }

    #[test]
    fn test_render_error_displays_message() {
        let error = EngineError::RenderError {
            message: "content stream encoding failed".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Render error: content stream encoding failed"
        );
    }

    #[test]
    fn test_io_error_displays_path_and_message() {
        let error = EngineError::Io {
            path: "out/paystub-employee.pdf".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write 'out/paystub-employee.pdf': permission denied"
        );
    }

    #[test]
    fn test_engine_error_is_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_missing_renderer_propagates() {
        fn returns_missing_renderer() -> EngineResult<()> {
            Err(EngineError::MissingRenderingDependency {
                dependency: "lopdf".to_string(),
            })
        }

        fn render_then_save() -> EngineResult<()> {
            returns_missing_renderer()?;
            Ok(())
        }

        assert!(render_then_save().is_err());
    }
}
