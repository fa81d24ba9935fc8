//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - each one is a single
//! backend request to be executed by the runtime as a spawned task. The
//! task identifier rides inside the command, so no handler ever reaches
//! into ambient state to find its target.

use crate::task::{TaskDraft, TaskId};

/// Output commands from the update function.
/// These represent side effects that need to be executed.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch the full task collection and rebuild the board from it.
    LoadTasks,

    /// Submit a draft to the backend. The draft is rendered only after the
    /// backend acknowledges it with an identifier.
    CreateTask { draft: TaskDraft },

    /// Delete a task by identifier.
    DeleteTask { id: TaskId },

    // Timer operations for the selected task
    StartTimer { id: TaskId },
    PauseTimer { id: TaskId },
    ResumeTimer { id: TaskId },
    StopTimer { id: TaskId },

    // App lifecycle
    Quit,
}
