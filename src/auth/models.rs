//! Authentication Models
//! Mission: Define admin identity, token claims and auth request/response bodies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin account as stored in the credential store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
    pub created_at: String,
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // subject (admin id)
    pub username: String,
    pub iat: usize, // issued at
    pub exp: usize, // expiration timestamp
}

impl Claims {
    /// Admin id carried in `sub`, if it is a well-formed UUID.
    pub fn admin_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Signup / login request body. Lives for one request only.
#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Hand-written so the plaintext password can never reach a log line.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signup response
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub username: String,
}

impl SignupResponse {
    pub fn from_admin(admin: &AdminIdentity) -> Self {
        Self {
            id: admin.id.to_string(),
            username: admin.username.clone(),
        }
    }
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: usize, // seconds until expiration
}

/// Dashboard response
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub id: String,
    pub username: String,
    pub message: String,
}
