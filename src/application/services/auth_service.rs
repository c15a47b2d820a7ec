//! Password login and signed session tokens.

use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_SUBJECT: &str = "admission-advisor";

/// Claims carried inside a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
    pub nonce: String,
}

/// Token handed out after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

/// Shared-password gate for the API.
///
/// Tokens have the form `base64url(claims).hex(hmac)`, where the MAC is
/// HMAC-SHA256 over the encoded claims keyed by `signing_secret`. Nothing is
/// stored server-side; rotating the secret invalidates every session.
pub struct AuthService {
    access_password: String,
    signing_secret: String,
    ttl_seconds: i64,
}

impl AuthService {
    pub fn new(access_password: String, signing_secret: String, ttl_seconds: i64) -> Self {
        Self {
            access_password,
            signing_secret,
            ttl_seconds,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks the password and issues a session token.
    ///
    /// The comparison runs in constant time: both sides are MACed and the
    /// MACs are compared with [`Mac::verify_slice`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on a wrong password.
    pub fn login(&self, password: &str) -> Result<IssuedToken, AppError> {
        let expected = {
            let mut mac = self.mac();
            mac.update(self.access_password.as_bytes());
            mac.finalize().into_bytes()
        };

        let mut candidate = self.mac();
        candidate.update(password.as_bytes());

        if candidate.verify_slice(&expected).is_err() {
            tracing::warn!("Rejected login attempt");
            return Err(AppError::unauthorized(
                "Invalid password",
                json!({ "reason": "Password does not match" }),
            ));
        }

        Ok(self.issue_at(chrono::Utc::now().timestamp()))
    }

    /// Issues a token valid for the configured TTL starting at `now`.
    pub fn issue_at(&self, now: i64) -> IssuedToken {
        let nonce: [u8; 12] = rand::rng().random();
        let claims = SessionClaims {
            sub: TOKEN_SUBJECT.to_string(),
            exp: now + self.ttl_seconds,
            nonce: hex::encode(nonce),
        };

        // Serializing a struct of plain strings and integers cannot fail.
        let json = serde_json::to_vec(&claims).unwrap_or_default();
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload);

        IssuedToken {
            token: format!("{payload}.{signature}"),
            expires_in: self.ttl_seconds,
        }
    }

    /// Validates a bearer token against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, its
    /// signature does not match, or it has expired.
    pub fn authenticate(&self, token: &str) -> Result<SessionClaims, AppError> {
        self.verify_at(token, chrono::Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<SessionClaims, AppError> {
        let invalid = |reason: &str| {
            AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
        };

        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| invalid("Malformed token"))?;
        let signature = hex::decode(signature).map_err(|_| invalid("Malformed token"))?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| invalid("Invalid token signature"))?;

        let json = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| invalid("Malformed token"))?;
        let claims: SessionClaims =
            serde_json::from_slice(&json).map_err(|_| invalid("Malformed token"))?;

        if claims.exp <= now {
            return Err(invalid("Token expired"));
        }

        Ok(claims)
    }
}
