use crate::task::{Quadrant, TaskId};
use crate::tea::{Mode, Notification, TimerState};
use std::sync::atomic::{AtomicU64, Ordering};

/// View of a single board entry for the render thread.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub id: TaskId,
    pub name: String,
    /// Timer display state, if a timer is active on this task.
    pub timer: Option<TimerState>,
}

/// View of one quadrant pane: its identity plus the entries under it.
#[derive(Debug, Clone)]
pub struct QuadrantView {
    pub quadrant: Quadrant,
    pub tasks: Vec<TaskView>,
}

impl QuadrantView {
    pub fn empty(quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            tasks: Vec::new(),
        }
    }
}

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable snapshot consumed by the render thread.
///
/// Snapshots carry a monotonically increasing version so the render thread
/// can skip redundant draws. They are published over a bounded(1) channel
/// with latest-wins semantics and never mutated after construction.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    /// One view per quadrant, in [`Quadrant::ALL`] order.
    pub quadrants: [QuadrantView; 4],
    /// Quadrant holding the selection cursor.
    pub focus: Quadrant,
    /// Selected index within the focused quadrant.
    pub selected: usize,
    pub mode: Mode,
    /// Name field contents while the form is open.
    pub input_buffer: String,
    /// Urgent checkbox state while the form is open.
    pub urgent: bool,
    /// Important checkbox state while the form is open.
    pub important: bool,
    /// Name of the task awaiting delete confirmation.
    pub confirm_name: Option<String>,
    pub notification: Option<Notification>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            quadrants: Quadrant::ALL.map(QuadrantView::empty),
            focus: Quadrant::UrgentImportant,
            selected: 0,
            mode: Mode::List,
            input_buffer: String::new(),
            urgent: false,
            important: false,
            confirm_name: None,
            notification: None,
            show_keymap: false,
        }
    }
}
