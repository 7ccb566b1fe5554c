//! Backend boundary for the DSAMate navigation bar.
//!
//! Two read-only endpoints are consumed:
//! - `GET /api/check-auth` answers whether the visitor has a session.
//! - `GET /api/progress/{user_id}` returns the user's streak.
//!
//! `NavbarApi` is the seam the UI drives; `ApiClient` is the HTTP implementation.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{ApiClient, NavbarApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use model::{CheckAuthResponse, Progress, ProgressResponse, User};
