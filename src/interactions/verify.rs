//! Ed25519 request signature verification
//!
//! Discord signs `timestamp ++ raw_body` with the application's key and sends the
//! hex signature in `X-Signature-Ed25519`. Verification fails closed: a missing
//! header, malformed hex or a bad signature are all just "invalid".
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial release

use anyhow::{anyhow, Context, Result};
use axum::http::HeaderMap;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Parse the hex public key shown in the developer portal
    pub fn from_hex(public_key: &str) -> Result<Self> {
        let bytes = hex::decode(public_key.trim()).context("Public key is not valid hex")?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| anyhow!("Public key must be 32 bytes, got {}", b.len()))?;
        let key = VerifyingKey::from_bytes(&bytes).context("Public key is not a valid Ed25519 key")?;
        Ok(Self { key })
    }

    pub fn verify(&self, signature: Option<&str>, timestamp: Option<&str>, body: &[u8]) -> bool {
        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            return false;
        };

        let Ok(signature_bytes) = hex::decode(signature) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&signature_bytes) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify(&message, &signature).is_ok()
    }

    /// Verify using the signature headers of an inbound request
    pub fn verify_request(&self, headers: &HeaderMap, body: &[u8]) -> bool {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        self.verify(header(SIGNATURE_HEADER), header(TIMESTAMP_HEADER), body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use ed25519_dalek::{Signer, SigningKey};

    pub(crate) fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&[7u8; 32])
    }

    pub(crate) fn sign(key: &SigningKey, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(key.sign(&message).to_bytes())
    }

    fn verifier() -> SignatureVerifier {
        SignatureVerifier::new(signing_key().verifying_key())
    }

    #[test]
    fn test_valid_signature() {
        let body = br#"{"type":1}"#;
        let signature = sign(&signing_key(), "1700000000", body);
        assert!(verifier().verify(Some(&signature), Some("1700000000"), body));
    }

    #[test]
    fn test_missing_headers_rejected() {
        let body = br#"{"type":1}"#;
        let signature = sign(&signing_key(), "1700000000", body);
        assert!(!verifier().verify(None, Some("1700000000"), body));
        assert!(!verifier().verify(Some(&signature), None, body));
        assert!(!verifier().verify(None, None, body));
    }

    #[test]
    fn test_tampered_body_rejected() {
        let signature = sign(&signing_key(), "1700000000", br#"{"type":1}"#);
        assert!(!verifier().verify(Some(&signature), Some("1700000000"), br#"{"type":2}"#));
    }

    #[test]
    fn test_tampered_timestamp_rejected() {
        let body = br#"{"type":1}"#;
        let signature = sign(&signing_key(), "1700000000", body);
        assert!(!verifier().verify(Some(&signature), Some("1700000001"), body));
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let body = br#"{"type":1}"#;
        assert!(!verifier().verify(Some("not-hex"), Some("1700000000"), body));
        assert!(!verifier().verify(Some("abcd"), Some("1700000000"), body));
        assert!(!verifier().verify(Some(""), Some("1700000000"), body));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let body = br#"{"type":1}"#;
        let other = SigningKey::from_bytes(&[9u8; 32]);
        let signature = sign(&other, "1700000000", body);
        assert!(!verifier().verify(Some(&signature), Some("1700000000"), body));
    }

    #[test]
    fn test_verify_request_headers() {
        let body = br#"{"type":1}"#;
        let mut headers = HeaderMap::new();
        headers.insert(
            SIGNATURE_HEADER,
            HeaderValue::from_str(&sign(&signing_key(), "1700000000", body)).unwrap(),
        );
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_static("1700000000"));
        assert!(verifier().verify_request(&headers, body));

        headers.remove(TIMESTAMP_HEADER);
        assert!(!verifier().verify_request(&headers, body));
    }

    #[test]
    fn test_from_hex() {
        let hex_key = hex::encode(signing_key().verifying_key().to_bytes());
        assert!(SignatureVerifier::from_hex(&hex_key).is_ok());
        assert!(SignatureVerifier::from_hex("zz").is_err());
        assert!(SignatureVerifier::from_hex("abcd").is_err());
    }
}
