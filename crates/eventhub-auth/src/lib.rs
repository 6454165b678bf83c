//! # eventhub-auth
//!
//! Credential primitives for EventHub.
//!
//! ## Modules
//!
//! - `jwt` — signed, time-limited bearer tokens carrying the user id
//! - `password` — Argon2id password hashing and the signup password policy

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
