use crate::utils::errors::{CinderCliError, Result};
use reqwest::Certificate;
use std::fs;
use std::path::Path;

/// CA certificates the TLS client accepts when verifying the server chain.
///
/// Parsed once from a PEM bundle; construction performs no network I/O. The
/// transport owns the store after client construction and the system roots
/// are not consulted while a pinned store is in use.
#[derive(Debug, Clone)]
pub struct TrustStore {
    roots: Vec<Certificate>,
}

impl TrustStore {
    /// Load a trust store from a PEM-encoded CA bundle on disk.
    pub fn from_pem_file(path: &Path) -> Result<Self> {
        let pem_data = fs::read_to_string(path).map_err(|e| {
            CinderCliError::Config(format!("Cannot read CA bundle {}: {e}", path.display()))
        })?;

        Self::from_pem(&pem_data)
    }

    /// Parse a trust store from PEM data.
    pub fn from_pem(pem_data: &str) -> Result<Self> {
        let blocks = certificate_blocks(pem_data);
        if blocks.is_empty() {
            return Err(CinderCliError::Config(
                "No certificate data found in CA bundle".to_string(),
            ));
        }

        let mut roots = Vec::with_capacity(blocks.len());
        for block in &blocks {
            let root = Certificate::from_pem(block.as_bytes()).map_err(|e| {
                CinderCliError::Config(format!("Invalid certificate in CA bundle: {e}"))
            })?;
            roots.push(root);
        }

        tracing::debug!("Loaded {} CA certificate(s)", roots.len());
        Ok(Self { roots })
    }

    /// The parsed root certificates.
    pub fn roots(&self) -> &[Certificate] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Split a PEM bundle into individual certificate blocks.
fn certificate_blocks(pem_data: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut in_cert = false;

    for line in pem_data.lines() {
        let line = line.trim();
        if line == "-----BEGIN CERTIFICATE-----" {
            in_cert = true;
            current.clear();
            current.push_str(line);
            current.push('\n');
        } else if line == "-----END CERTIFICATE-----" && in_cert {
            current.push_str(line);
            current.push('\n');
            blocks.push(current.clone());
            current.clear();
            in_cert = false;
        } else if in_cert {
            current.push_str(line);
            current.push('\n');
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_without_certificates_is_rejected() {
        let err = TrustStore::from_pem("definitely not PEM data").unwrap_err();

        assert!(matches!(err, CinderCliError::Config(_)));
    }

    #[test]
    fn empty_blob_is_rejected() {
        let err = TrustStore::from_pem("").unwrap_err();

        assert!(matches!(err, CinderCliError::Config(_)));
    }

    #[test]
    fn garbage_inside_certificate_markers_is_rejected() {
        let pem = "-----BEGIN CERTIFICATE-----\n\
                   this is not base64 !!!\n\
                   -----END CERTIFICATE-----\n";
        let err = TrustStore::from_pem(pem).unwrap_err();

        assert!(matches!(err, CinderCliError::Config(_)));
    }

    #[test]
    fn missing_bundle_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("service-ca.crt");

        let err = TrustStore::from_pem_file(&missing).unwrap_err();

        assert!(matches!(err, CinderCliError::Config(_)));
    }

    #[test]
    fn splitter_separates_chained_blocks() {
        let pem = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n\
                   -----BEGIN CERTIFICATE-----\nBBBB\n-----END CERTIFICATE-----\n";
        let blocks = certificate_blocks(pem);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("AAAA"));
        assert!(blocks[1].contains("BBBB"));
    }

    #[test]
    fn splitter_ignores_surrounding_noise() {
        let pem = "subject=/CN=example\n\
                   -----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n\
                   trailing garbage\n";
        let blocks = certificate_blocks(pem);

        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].contains("subject"));
        assert!(!blocks[0].contains("trailing"));
    }
}
