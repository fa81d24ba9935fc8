//! Task data model for the Eisenhower board.
//!
//! Tasks are owned by the backend task service. The client distinguishes
//! drafts (not yet acknowledged, no identifier) from records (returned by
//! the backend with an assigned identifier), so a task can only reach the
//! board after the backend has acknowledged it.

use serde::{Deserialize, Serialize};

/// Opaque task identifier assigned by the backend.
///
/// The client never generates or inspects these; they are carried verbatim
/// into delete and timer requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Urgency/importance pair that jointly determines quadrant membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Priority {
    pub urgent: bool,
    pub important: bool,
}

impl Priority {
    pub fn new(urgent: bool, important: bool) -> Self {
        Self { urgent, important }
    }
}

/// One of the four buckets of the Eisenhower matrix.
///
/// Membership is a pure function of [`Priority`]; it is computed where
/// needed and never stored on the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Quadrant {
    /// All quadrants in display order: top-left, top-right, bottom-left,
    /// bottom-right of the 2×2 grid.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ];

    /// Classify a priority pair into its quadrant.
    ///
    /// Tie-break order: urgent∧important, then ¬urgent∧important, then
    /// urgent∧¬important, else the remainder. Total over all four boolean
    /// combinations.
    pub fn classify(priority: Priority) -> Self {
        if priority.urgent && priority.important {
            Quadrant::UrgentImportant
        } else if !priority.urgent && priority.important {
            Quadrant::NotUrgentImportant
        } else if priority.urgent && !priority.important {
            Quadrant::UrgentNotImportant
        } else {
            Quadrant::NotUrgentNotImportant
        }
    }

    /// Stable string key for this quadrant, matching the container ids used
    /// by the backend's web frontend.
    pub fn key(&self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "urgent-important",
            Quadrant::NotUrgentImportant => "not-urgent-important",
            Quadrant::UrgentNotImportant => "urgent-not-important",
            Quadrant::NotUrgentNotImportant => "not-urgent-not-important",
        }
    }

    /// Display title for the quadrant pane.
    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "Do first",
            Quadrant::NotUrgentImportant => "Schedule",
            Quadrant::UrgentNotImportant => "Delegate",
            Quadrant::NotUrgentNotImportant => "Eliminate",
        }
    }

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Quadrant::UrgentImportant => 0,
            Quadrant::NotUrgentImportant => 1,
            Quadrant::UrgentNotImportant => 2,
            Quadrant::NotUrgentNotImportant => 3,
        }
    }

    /// Next quadrant in display order, wrapping.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous quadrant in display order, wrapping.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A task as submitted to the backend: no identifier yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>, urgent: bool, important: bool) -> Self {
        Self {
            name: name.into(),
            priority: Priority::new(urgent, important),
        }
    }
}

/// A task record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Backend-assigned identifier, serialized as the Mongo-style `_id`.
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub name: String,
    pub priority: Priority,
}

impl Task {
    /// Quadrant this task belongs to.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.priority)
    }
}

/// Total time reported by the backend when a task timer is stopped.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TimerTotal {
    pub task_id: TaskId,
    pub total_time: String,
}
