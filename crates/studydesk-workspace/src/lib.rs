//! Study workspace controller.
//!
//! Holds the state of one study session (selected document, conversation
//! mode, visible turns, essay grader) and drives it against a `StudyApi`.
//! Presentation layers feed `UiEvent`s into a `WorkspaceRuntime` and react
//! to the `Notice`s it publishes.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod notice;
pub mod runtime;
pub mod state;
pub mod update;

pub use events::{EssayCommand, UiEvent};
pub use features::{chat, documents, essay, messages, mode, reveal, tutor};
pub use notice::{Confirmation, Notice, RejectReason, Route};
pub use runtime::{DEFAULT_REVEAL_INTERVAL, RuntimeOptions, WorkspaceRuntime};
pub use state::WorkspaceState;
