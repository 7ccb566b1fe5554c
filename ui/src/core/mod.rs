//! Platform-agnostic navbar state. Nothing here touches the DOM.

pub mod links;
pub mod scroll;
pub mod search;
pub mod session;
pub mod streak;
pub mod timing;
