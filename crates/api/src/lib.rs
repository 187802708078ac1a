// API crate clippy configuration
#![allow(clippy::needless_borrows_for_generic_args)] // Sometimes needed for clarity
// Test code patterns:
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! ÇizgiHub API Library
//!
//! Account lifecycle (registration, email verification, login, request
//! authentication) plus the catalogue and comment routes it protects.

pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
