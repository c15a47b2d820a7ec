//! DTOs for the session gate.

use serde::{Deserialize, Serialize};

/// `POST /api/auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Response of `POST /api/auth/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}
