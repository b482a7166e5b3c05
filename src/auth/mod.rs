//! Authentication Module
//! Mission: Gate admin endpoints behind bcrypt-checked logins and signed JWTs

pub mod admin_store;
pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;

pub use admin_store::AdminStore;
pub use api::AuthState;
pub use jwt::JwtHandler;
pub use middleware::{auth_middleware, AuthError, AuthenticatedAdmin};
