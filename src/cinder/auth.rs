use crate::utils::errors::{CinderCliError, Result};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

/// Pre-issued bearer token presented verbatim on every request.
///
/// Read once at startup and immutable for the process lifetime. The token is
/// never refreshed or validated client-side.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Result<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(CinderCliError::Config("Bearer token is empty".to_string()));
        }

        Ok(Self(token.to_string()))
    }

    /// Get the token from OS_AUTH_TOKEN, falling back to the token file.
    pub fn from_env_or_file(path: &Path) -> Result<Self> {
        if let Ok(token) = env::var("OS_AUTH_TOKEN") {
            if !token.trim().is_empty() {
                tracing::debug!("Found OS_AUTH_TOKEN in environment");
                return Self::new(&token);
            }
        }

        tracing::trace!("Reading token file {}", path.display());
        Self::from_file(path)
    }

    /// Read the token from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            CinderCliError::Config(format!("Cannot read token file {}: {e}", path.display()))
        })?;

        Self::new(&raw)
    }

    /// Value for the Authorization header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown: String = self.0.chars().take(8).collect();
        write!(f, "BearerToken({shown}***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn token_is_trimmed() {
        let token = BearerToken::new("  abc123\n").unwrap();

        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = BearerToken::new(" \n ").unwrap_err();

        assert!(matches!(err, CinderCliError::Config(_)));
    }

    #[test]
    fn token_is_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "file-token\n").unwrap();

        let token = BearerToken::from_file(file.path()).unwrap();

        assert_eq!(token.header_value(), "Bearer file-token");
    }

    #[test]
    fn missing_token_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("token");

        let err = BearerToken::from_file(&missing).unwrap_err();

        assert!(matches!(err, CinderCliError::Config(_)));
    }

    #[test]
    fn debug_redacts_the_token() {
        let token = BearerToken::new("very-long-secret-token").unwrap();
        let debug = format!("{token:?}");

        assert!(debug.contains("***"));
        assert!(!debug.contains("very-long-secret-token"));
    }
}
