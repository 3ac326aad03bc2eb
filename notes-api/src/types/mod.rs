//! API Request and Response Types
//!
//! This module defines all request and response types for the notes API.

mod note;
pub use note::*;
