use thiserror::Error;

/// picksite error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// Content store request failed (transport, timeout, client setup)
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Requested content does not exist in the store
    #[error("not found: {0}")]
    NotFound(String),

    /// Failed to parse JSON or TOML
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Template rendering failed
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

impl SiteError {
    /// True for errors that should render the not-found page rather than fail
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for picksite
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::Parse("invalid json".into());
        assert_eq!(err.to_string(), "parse error: invalid json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SiteError = json_err.into();
        assert!(matches!(err, SiteError::Parse(_)));
    }

    #[test]
    fn test_template_error_conversion() {
        let err: SiteError = askama::Error::Fmt(std::fmt::Error).into();
        assert!(matches!(err, SiteError::Render(_)));
        assert!(err.to_string().starts_with("render error"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        assert!(SiteError::NotFound("categories/x".into()).is_not_found());
        assert!(!SiteError::Fetch("timeout".into()).is_not_found());
    }
}
