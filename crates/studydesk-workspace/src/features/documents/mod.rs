//! Cached document list, selection and per-document actions.

mod state;
mod update;

pub use state::{DocumentsState, UNCATEGORIZED, categories, category_of, filter_by_category};
pub(crate) use update::confirm_delete;
pub use update::{
    clear_selection, generate_quiz, handle_documents_event, refresh, request_delete, select,
    set_category_filter,
};
