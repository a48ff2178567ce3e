use thiserror::Error;

/// Top-level error type for pattern motion.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    PathData(#[from] PathDataError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while installing a motion pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    InvalidTemplate(TemplateDefect),

    #[error("path data must be supplied for a pattern motion")]
    MissingTemplateData,
}

/// Why a pattern cannot be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TemplateDefect {
    #[error("pattern must not end at the starting point ({x}, {y})")]
    EndsAtStart { x: f64, y: f64 },

    #[error("pattern has no contour of non-zero length")]
    Unmeasurable,

    #[error("pattern has non-finite geometry")]
    NonFinite,
}

/// Errors related to parsing path data.
#[derive(Debug, Error)]
pub enum PathDataError {
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("command '{command}' takes arguments in groups of {expected}, found {found}")]
    ArgumentCount {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern motion config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for results using [`MotionError`].
pub type Result<T> = std::result::Result<T, MotionError>;
