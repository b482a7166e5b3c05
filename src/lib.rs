//! Travel Desk Backend Library
//!
//! Travel request intake with an authenticated admin back office.
//! The binary in `main.rs` only wires configuration to `routes::build_router`.

pub mod auth;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod travel;
