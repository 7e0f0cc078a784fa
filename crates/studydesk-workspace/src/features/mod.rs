//! Feature slices of the workspace (state/update per slice).

pub mod chat;
pub mod documents;
pub mod essay;
pub mod messages;
pub mod mode;
pub mod reveal;
pub mod tutor;
