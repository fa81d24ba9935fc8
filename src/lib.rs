pub mod board;
pub mod client;
pub mod config;
pub mod error;
pub mod log;
pub mod task;

// Decoupled game loop architecture
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use task::{Priority, Quadrant, Task, TaskDraft, TaskId};
