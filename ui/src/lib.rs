//! Shared UI crate for DSAMate. The navigation bar and the pages behind it live
//! here; platform crates only supply the router and the auth controls.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

/// Page-level theme shared by every platform.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
