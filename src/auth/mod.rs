//! Authentication types for the Hub API.
//!
//! This module provides the [`Session`] type holding the bearer token used by
//! every API call, and the [`oauth`] module that obtains it.

pub mod oauth;
pub mod session;

pub use session::Session;
