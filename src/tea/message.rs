//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from keyboard
//! events or from the completion of backend requests. Completion order
//! across concurrent requests follows network timing, not submission order.

use crossterm::event::KeyEvent;

use crate::task::{Task, TaskId};

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // Backend request completions
    /// Full task collection arrived (initial load or reload).
    TasksLoaded(Vec<Task>),
    TasksLoadFailed(String),
    /// The backend acknowledged a create with the stored record.
    TaskCreated(Task),
    TaskCreateFailed {
        /// Name from the submitted draft, for the log line.
        name: String,
        error: String,
    },
    TaskDeleted(TaskId),
    TaskDeleteFailed {
        id: TaskId,
        error: String,
    },

    // Timer request completions
    TimerStarted(TaskId),
    TimerPaused(TaskId),
    TimerResumed(TaskId),
    TimerStopped {
        id: TaskId,
        /// Accumulated total as reported by the backend, e.g. "0:42:10".
        total: String,
    },
    TimerFailed {
        id: TaskId,
        error: String,
    },
}
