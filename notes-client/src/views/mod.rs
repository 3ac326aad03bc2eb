//! View state machines for the two UI routes.
//!
//! Rendering is out of scope; these types own the interaction state
//! (form buffers, edit mode, delete confirmation) and drive the remote
//! procedures plus cache reconciliation.

pub mod detail;
pub mod list;

pub use detail::{DeleteConfirm, DetailOutcome, DetailView};
pub use list::ListView;
