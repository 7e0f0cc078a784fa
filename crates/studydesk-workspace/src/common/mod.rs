//! Shared building blocks for the reducer and runtime.

mod task;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
