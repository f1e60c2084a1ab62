use crate::adapters::outbound::network::ApiCredentials;
use crate::shared::Result;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

const AUTH_SCHEME: &str = "VERACODE-HMAC-SHA-256";
const REQUEST_VERSION: &[u8] = b"vcode_request_version_1";

/// Signs requests with the VERACODE-HMAC-SHA-256 scheme
///
/// The signing key is derived by chaining HMACs over the nonce, the
/// millisecond timestamp and the request version; the final HMAC covers
/// `id=..&host=..&url=..&method=..`.
pub struct HmacSigner {
    api_key_id: String,
    api_key_secret: Vec<u8>,
}

impl HmacSigner {
    pub fn new(credentials: &ApiCredentials) -> Result<Self> {
        let api_key_secret = hex::decode(strip_key_prefix(credentials.api_key_secret()))
            .map_err(|e| anyhow::anyhow!("API key secret is not valid hex: {}", e))?;

        Ok(Self {
            api_key_id: strip_key_prefix(credentials.api_key_id()).to_string(),
            api_key_secret,
        })
    }

    /// Builds the `Authorization` header value for one request
    ///
    /// # Arguments
    /// * `host` - Host name, without scheme
    /// * `url` - Path and query string
    /// * `method` - HTTP method
    pub fn authorization_header(&self, host: &str, url: &str, method: &str) -> Result<String> {
        let timestamp = Utc::now().timestamp_millis().to_string();
        let nonce = Uuid::new_v4().into_bytes();
        self.sign(host, url, method, &timestamp, &nonce)
    }

    fn sign(
        &self,
        host: &str,
        url: &str,
        method: &str,
        timestamp: &str,
        nonce: &[u8],
    ) -> Result<String> {
        let data = format!(
            "id={}&host={}&url={}&method={}",
            self.api_key_id.to_lowercase(),
            host.to_lowercase(),
            url,
            method.to_uppercase()
        );

        let key_nonce = hmac_sha256(&self.api_key_secret, nonce)?;
        let key_date = hmac_sha256(&key_nonce, timestamp.as_bytes())?;
        let signature_key = hmac_sha256(&key_date, REQUEST_VERSION)?;
        let signature = hmac_sha256(&signature_key, data.as_bytes())?;

        Ok(format!(
            "{} id={},ts={},nonce={},sig={}",
            AUTH_SCHEME,
            self.api_key_id,
            timestamp,
            hex::encode(nonce),
            hex::encode(signature)
        ))
    }
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| anyhow::anyhow!("Invalid HMAC key: {}", e))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Keys issued with a `vera01..-` prefix are signed without it
fn strip_key_prefix(key: &str) -> &str {
    match key.split_once('-') {
        Some((prefix, rest)) if prefix.starts_with("vera01") => rest,
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_ID: &str = "3ddaeeb10ca690df3fee5e3bd1c329fa";
    const KEY_SECRET: &str = "3ddaeeb10ca690df3fee5e3bd1c329fa3c1d6b95a7e94c4b1d0a3b6ef8d2c1aa";

    fn signer() -> HmacSigner {
        HmacSigner::new(&ApiCredentials::new(KEY_ID, KEY_SECRET)).unwrap()
    }

    #[test]
    fn test_sign_known_vector() {
        let nonce: Vec<u8> = (0u8..16).collect();
        let header = signer()
            .sign(
                "api.veracode.com",
                "/appsec/v1/collections?name=pay",
                "GET",
                "1717243200000",
                &nonce,
            )
            .unwrap();

        assert_eq!(
            header,
            "VERACODE-HMAC-SHA-256 id=3ddaeeb10ca690df3fee5e3bd1c329fa,ts=1717243200000,\
             nonce=000102030405060708090a0b0c0d0e0f,\
             sig=59752ec4808aeffcec7b411ba33a6b05805a610dcf51ee1bd83bffa867ab7e6b"
        );
    }

    #[test]
    fn test_authorization_header_uses_fresh_nonce() {
        let signer = signer();
        let first = signer
            .authorization_header("api.veracode.com", "/api/authn/v2/api_credentials", "GET")
            .unwrap();
        let second = signer
            .authorization_header("api.veracode.com", "/api/authn/v2/api_credentials", "GET")
            .unwrap();

        assert!(first.starts_with("VERACODE-HMAC-SHA-256 id=3ddaeeb10ca690df3fee5e3bd1c329fa,ts="));
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_secret_is_rejected() {
        let result = HmacSigner::new(&ApiCredentials::new(KEY_ID, "not-hex"));
        let err = result.err().unwrap();
        assert!(err.to_string().contains("not valid hex"));
    }

    #[test]
    fn test_strip_key_prefix() {
        assert_eq!(strip_key_prefix("vera01ei-abcdef"), "abcdef");
        assert_eq!(strip_key_prefix("abcdef"), "abcdef");
        assert_eq!(strip_key_prefix("other-abcdef"), "other-abcdef");
    }
}
