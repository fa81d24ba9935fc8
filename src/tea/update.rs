//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute. Backend failures for the
//! board operations are swallowed here: they produce a log line, release
//! the relevant in-flight guard, and leave the board exactly as it was.

use crossterm::event::{KeyCode, KeyEvent};

use crate::task::TaskDraft;
use crate::{elog, elog_debug, elog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{InputKind, Mode, Model, Notification, NotificationLevel, TimerState};

/// Helper to set a timer notification and mark model as dirty.
fn notify(model: &mut Model, level: NotificationLevel, message: String) {
    model.notification = Some(Notification { level, message });
    model.dirty = true;
}

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.notification = None; // Clear notification on any key press
            model.dirty = true; // Keyboard input always triggers render
            match model.mode {
                Mode::List => update_list_mode(model, key, &mut cmds),
                Mode::Input(kind) => update_input_mode(model, key, kind, &mut cmds),
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true; // Resize triggers re-render
        }

        // Backend request completions
        Message::TasksLoaded(tasks) => {
            elog_debug!("Message::TasksLoaded count={}", tasks.len());
            model.board = crate::board::Board::new();
            for task in tasks {
                model.board.insert(task);
            }
            // Drop timer glyphs for tasks that no longer exist
            let board = &model.board;
            model.timers.retain(|id, _| board.get(id).is_some());
            model.clamp_selection();
            model.dirty = true;
        }

        Message::TasksLoadFailed(err) => {
            // Log only; the board stays as it was.
            elog_warn!("Message::TasksLoadFailed err={}", err);
        }

        Message::TaskCreated(task) => {
            elog!("Message::TaskCreated id={} name={}", task.id, task.name);
            model.create_in_flight = false;
            let quadrant = model.board.insert(task);
            model.focus = quadrant;
            model.selected = model.board.tasks(quadrant).len() - 1;
            model.dirty = true;
        }

        Message::TaskCreateFailed { name, error } => {
            // Log only; the submitted draft is silently dropped.
            elog_warn!("Message::TaskCreateFailed name={:?} err={}", name, error);
            model.create_in_flight = false;
        }

        Message::TaskDeleted(id) => {
            elog!("Message::TaskDeleted id={}", id);
            model.pending.remove(&id);
            model.board.remove(&id);
            model.timers.remove(&id);
            model.clamp_selection();
            model.dirty = true;
        }

        Message::TaskDeleteFailed { id, error } => {
            // Log only; the stale entry stays on the board.
            elog_warn!("Message::TaskDeleteFailed id={} err={}", id, error);
            model.pending.remove(&id);
        }

        // Timer request completions
        Message::TimerStarted(id) => {
            elog_debug!("Message::TimerStarted id={}", id);
            model.pending.remove(&id);
            model.timers.insert(id, TimerState::Running);
            model.dirty = true;
        }

        Message::TimerPaused(id) => {
            elog_debug!("Message::TimerPaused id={}", id);
            model.pending.remove(&id);
            model.timers.insert(id, TimerState::Paused);
            model.dirty = true;
        }

        Message::TimerResumed(id) => {
            elog_debug!("Message::TimerResumed id={}", id);
            model.pending.remove(&id);
            model.timers.insert(id, TimerState::Running);
            model.dirty = true;
        }

        Message::TimerStopped { id, total } => {
            elog_debug!("Message::TimerStopped id={} total={}", id, total);
            model.pending.remove(&id);
            model.timers.remove(&id);
            let message = match model.board.get(&id) {
                Some(task) => format!("Logged {} on '{}'", total, task.name),
                None => format!("Logged {}", total),
            };
            notify(model, NotificationLevel::Info, message);
        }

        Message::TimerFailed { id, error } => {
            elog_warn!("Message::TimerFailed id={} err={}", id, error);
            model.pending.remove(&id);
            notify(model, NotificationLevel::Error, format!("Timer: {}", error));
        }
    }

    cmds
}

fn update_list_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let len = model.board.tasks(model.focus).len();
            if len > 0 {
                model.selected = (model.selected + 1) % len;
            }
        }

        KeyCode::Char('k') | KeyCode::Up => {
            let len = model.board.tasks(model.focus).len();
            if len > 0 {
                model.selected = model.selected.checked_sub(1).unwrap_or(len - 1);
            }
        }

        KeyCode::Char('h') | KeyCode::Left => {
            model.focus = model.focus.prev();
            model.selected = 0;
        }

        KeyCode::Char('l') | KeyCode::Right => {
            model.focus = model.focus.next();
            model.selected = 0;
        }

        KeyCode::Char('n') => {
            model.mode = Mode::Input(InputKind::Name);
            model.input_buffer.clear();
            model.pending_urgent = false;
            model.pending_important = false;
        }

        KeyCode::Char('d') => {
            if let Some(id) = model.selected_task().map(|t| t.id.clone()) {
                model.pending_delete = Some(id);
                model.mode = Mode::Input(InputKind::Confirm);
            }
        }

        KeyCode::Char('r') => {
            cmds.push(Command::LoadTasks);
        }

        KeyCode::Char('t') => {
            if let Some(id) = model.selected_task().map(|t| t.id.clone()) {
                if model.pending.contains(&id) {
                    elog_debug!("Timer toggle ignored, mutation pending for {}", id);
                } else {
                    let cmd = match model.timers.get(&id) {
                        None => Command::StartTimer { id: id.clone() },
                        Some(_) => Command::StopTimer { id: id.clone() },
                    };
                    model.pending.insert(id);
                    cmds.push(cmd);
                }
            }
        }

        KeyCode::Char('p') => {
            if let Some(id) = model.selected_task().map(|t| t.id.clone()) {
                if model.pending.contains(&id) {
                    elog_debug!("Timer pause ignored, mutation pending for {}", id);
                } else {
                    let cmd = match model.timers.get(&id) {
                        Some(TimerState::Running) => Some(Command::PauseTimer { id: id.clone() }),
                        Some(TimerState::Paused) => Some(Command::ResumeTimer { id: id.clone() }),
                        None => None,
                    };
                    if let Some(cmd) = cmd {
                        model.pending.insert(id);
                        cmds.push(cmd);
                    }
                }
            }
        }

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        _ => {}
    }
}

fn update_input_mode(model: &mut Model, key: KeyEvent, kind: InputKind, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Enter => {
            model.mode = Mode::List;
            match kind {
                InputKind::Name | InputKind::Urgent | InputKind::Important => {
                    submit_create(model, cmds);
                }
                InputKind::Confirm => {
                    if let Some(id) = model.pending_delete.take() {
                        if model.pending.contains(&id) {
                            elog_debug!("Delete ignored, request already pending for {}", id);
                        } else {
                            model.pending.insert(id.clone());
                            cmds.push(Command::DeleteTask { id });
                        }
                    }
                }
            }
        }

        KeyCode::Tab => {
            if let Some(next_kind) = kind.next() {
                model.mode = Mode::Input(next_kind);
            }
        }

        KeyCode::Esc => {
            model.input_buffer.clear();
            model.pending_urgent = false;
            model.pending_important = false;
            model.pending_delete = None;
            model.mode = Mode::List;
        }

        KeyCode::Backspace => {
            if kind == InputKind::Name {
                model.input_buffer.pop();
            }
        }

        KeyCode::Char(' ') => match kind {
            InputKind::Name => model.input_buffer.push(' '),
            InputKind::Urgent => model.pending_urgent = !model.pending_urgent,
            InputKind::Important => model.pending_important = !model.pending_important,
            InputKind::Confirm => {}
        },

        KeyCode::Char(c) => {
            if kind == InputKind::Name {
                model.input_buffer.push(c);
            }
        }

        _ => {}
    }
}

/// Submit the form as a create request.
///
/// No validation: an empty name is forwarded as-is and the backend decides.
/// A second submit while a create is outstanding issues nothing.
fn submit_create(model: &mut Model, cmds: &mut Vec<Command>) {
    if model.create_in_flight {
        elog_debug!("Create ignored, request already in flight");
        return;
    }
    let draft = TaskDraft::new(
        std::mem::take(&mut model.input_buffer),
        model.pending_urgent,
        model.pending_important,
    );
    model.pending_urgent = false;
    model.pending_important = false;
    model.create_in_flight = true;
    cmds.push(Command::CreateTask { draft });
}
