//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime
//! infrastructure. The board holds only backend-acknowledged records; the
//! pending sets are the in-flight guards that keep a rapid double-submit
//! from issuing duplicate mutation requests.

use std::collections::{HashMap, HashSet};

use crate::board::Board;
use crate::config::Config;
use crate::render::{next_version, QuadrantView, RenderState, TaskView};
use crate::task::{Quadrant, Task, TaskId};

/// Level of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Error notification - displayed in red with "Error:" prefix
    Error,
    /// Informational notification - displayed in green
    Info,
}

/// A notification message to display to the user.
///
/// Used only by the timer feature; list/create/delete failures go to the
/// log file alone and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity level of the notification
    pub level: NotificationLevel,
    /// The notification message text
    pub message: String,
}

/// Application UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Input(InputKind),
}

/// Form fields and the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Name,
    Urgent,
    Important,
    Confirm,
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Name => "Name",
            InputKind::Urgent => "Urgent",
            InputKind::Important => "Important",
            InputKind::Confirm => "Delete?",
        }
    }

    /// Cycle to next form field (Tab behavior).
    /// Returns None for Confirm since it doesn't cycle.
    pub fn next(&self) -> Option<InputKind> {
        match self {
            InputKind::Name => Some(InputKind::Urgent),
            InputKind::Urgent => Some(InputKind::Important),
            InputKind::Important => Some(InputKind::Name),
            InputKind::Confirm => None,
        }
    }
}

/// Display state of a task's work timer.
///
/// The client tracks only what glyph to draw; elapsed time is owned by the
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Paused,
}

/// Pure application state - the single source of truth.
pub struct Model {
    // Core state
    pub board: Board,
    pub focus: Quadrant,
    pub selected: usize,
    pub mode: Mode,

    // Form state
    pub input_buffer: String,
    pub pending_urgent: bool,
    pub pending_important: bool,
    pub pending_delete: Option<TaskId>,

    // In-flight request guards
    /// True while a create request is outstanding. Drafts carry no
    /// identifier yet, so creates share one guard.
    pub create_in_flight: bool,
    /// Identifiers with an outstanding mutation (delete or timer) request.
    pub pending: HashSet<TaskId>,

    // Timer display state, keyed by task id
    pub timers: HashMap<TaskId, TimerState>,

    pub notification: Option<Notification>,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    /// Create a fresh model with an empty board.
    ///
    /// The board stays empty until the initial load completes; there is no
    /// loading indicator by design.
    pub fn new(config: Config) -> Self {
        Self {
            board: Board::new(),
            focus: Quadrant::UrgentImportant,
            selected: 0,
            mode: Mode::default(),
            input_buffer: String::new(),
            pending_urgent: false,
            pending_important: false,
            pending_delete: None,
            create_in_flight: false,
            pending: HashSet::new(),
            timers: HashMap::new(),
            notification: None,
            show_keymap: false,
            dirty: true,
            config,
        }
    }

    // Accessor methods for UI

    /// Task under the selection cursor, if the focused quadrant has any.
    pub fn selected_task(&self) -> Option<&Task> {
        self.board.tasks(self.focus).get(self.selected)
    }

    /// Keep the cursor inside the focused quadrant after board changes.
    pub fn clamp_selection(&mut self) {
        let len = self.board.tasks(self.focus).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number,
    /// enabling the render thread to detect state changes and skip
    /// redundant renders.
    pub fn snapshot(&self) -> RenderState {
        let quadrants = Quadrant::ALL.map(|quadrant| QuadrantView {
            quadrant,
            tasks: self
                .board
                .tasks(quadrant)
                .iter()
                .map(|t| TaskView {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    timer: self.timers.get(&t.id).copied(),
                })
                .collect(),
        });

        let confirm_name = self
            .pending_delete
            .as_ref()
            .and_then(|id| self.board.get(id))
            .map(|t| t.name.clone());

        RenderState {
            version: next_version(),
            quadrants,
            focus: self.focus,
            selected: self.selected,
            mode: self.mode,
            input_buffer: self.input_buffer.clone(),
            urgent: self.pending_urgent,
            important: self.pending_important,
            confirm_name,
            notification: self.notification.clone(),
            show_keymap: self.show_keymap,
        }
    }
}
