//! Conversation turns: wire decoding, history mapping and the guarded store.

mod codec;
mod history;
mod store;

pub use codec::{DecodedContent, decode, encode};
pub use history::{MappedHistory, map_history};
pub use store::{Generation, MessageStore, Role, Turn, TurnStatus};
