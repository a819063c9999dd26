//! Error types for the coloring-book core.

use thiserror::Error;

/// Errors produced while building primitives, templates and scenes.
///
/// Every variant is surfaced to the caller as-is; nothing in the engine
/// clamps or repairs bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A primitive had a zero, negative or too-short geometric parameter.
    #[error("degenerate {kind}: {reason}")]
    DegenerateGeometry { kind: &'static str, reason: String },

    /// A coordinate, length or angle was NaN or infinite.
    #[error("non-finite value for {0}")]
    NonFiniteValue(&'static str),

    /// A template was invoked with `scale <= 0`.
    #[error("template scale must be positive, got {0}")]
    NonPositiveScale(f64),

    /// A theme identifier is not part of the registry.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A template identifier is not part of the library.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// A decorative generator identifier is not known.
    #[error("unknown decoration: {0}")]
    UnknownDecoration(String),

    /// The export resolution was zero or produced an unrepresentable page size.
    #[error("invalid dpi: {0}")]
    InvalidDpi(u32),

    /// A composition option had the wrong JSON type or an out-of-range value.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },

    /// A recipe document could not be interpreted.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

impl ValidationError {
    pub(crate) fn degenerate(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            kind,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_geometry_names_kind_and_reason() {
        let err = ValidationError::degenerate("circle", "radius must be positive, got 0");
        let msg = format!("{err}");
        assert!(msg.contains("circle"), "missing kind in: {msg}");
        assert!(msg.contains("radius"), "missing reason in: {msg}");
    }

    #[test]
    fn non_positive_scale_includes_value() {
        let msg = ValidationError::NonPositiveScale(-1.5).to_string();
        assert!(msg.contains("-1.5"), "missing scale in: {msg}");
    }

    #[test]
    fn unknown_identifiers_include_name() {
        assert!(ValidationError::UnknownTheme("jungle".into())
            .to_string()
            .contains("jungle"));
        assert!(ValidationError::UnknownTemplate("dragon".into())
            .to_string()
            .contains("dragon"));
        assert!(ValidationError::UnknownDecoration("rain".into())
            .to_string()
            .contains("rain"));
    }

    #[test]
    fn invalid_option_includes_name_and_reason() {
        let err = ValidationError::InvalidOption {
            name: "frame".into(),
            reason: "expected bool, got string".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("frame"), "missing option name in: {msg}");
        assert!(msg.contains("bool"), "missing reason in: {msg}");
    }

    #[test]
    fn validation_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }

    #[test]
    fn validation_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ValidationError>();
    }
}
