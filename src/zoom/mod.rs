//! Zoom REST API client.
//!
//! The client is authenticated before it is handed to anything else:
//! credentials are resolved at startup and every request carries a freshly
//! signed short-lived token.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use client::ZoomApiClient;
pub use error::ZoomError;
pub use types::{Meeting, MeetingListType, ZoomUser};
