//! Client for the notes REST API.
//!
//! [`RestClient`] is the HTTP transport; [`QueryCache`] keeps per-query
//! results and supports invalidation plus optimistic updates; the
//! [`views`] module carries the state machines behind the list and
//! detail routes.

pub mod api_client;
pub mod cache;
pub mod config;
pub mod error;
pub mod views;

pub use api_client::{NotesApi, RestClient};
pub use cache::{OptimisticUpdate, QueryCache, QueryKey};
pub use config::ClientConfig;
pub use error::ClientError;
pub use views::{DeleteConfirm, DetailOutcome, DetailView, ListView};
