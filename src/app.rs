use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::client::{HttpTaskService, TaskService};
use crate::config::Config;
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{elog_debug, Result};

const MAX_BG_MESSAGES: usize = 50;

pub struct LogicThread;

impl LogicThread {
    pub fn run(config: Config, state_tx: Sender<RenderState>, shutdown: Arc<AtomicBool>) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        let backend_url = config.effective_backend_url().to_string();
        elog_debug!("LogicThread::run_async backend={}", backend_url);
        let service: Arc<dyn TaskService> = Arc::new(HttpTaskService::new(&backend_url));
        let mut model = Model::new(config);

        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();

        // Initial load: runs exactly once at startup; each record is
        // rendered when the response arrives.
        execute_command(Command::LoadTasks, &service, &msg_tx);

        send_state(&state_tx, &model);
        model.dirty = false;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Keyboard input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Message::Key(key),
                    Event::Resize(w, h) => Message::Resize(w, h),
                    _ => continue,
                };

                for cmd in update(&mut model, msg) {
                    if execute_command(cmd, &service, &msg_tx) {
                        shutdown.store(true, Ordering::Relaxed);
                        return Ok(());
                    }
                }

                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Backend completions (bounded per tick)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut model, msg) {
                    if execute_command(cmd, &service, &msg_tx) {
                        shutdown.store(true, Ordering::Relaxed);
                        return Ok(());
                    }
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        Ok(())
    }
}

/// Execute a command, spawning backend requests as detached tasks.
///
/// Returns true when the app should quit. Requests report back through the
/// message channel; nothing here blocks the logic loop, and an in-flight
/// request cannot be cancelled by later input. The model is untouched:
/// update() owns all state transitions.
pub fn execute_command(
    cmd: Command,
    service: &Arc<dyn TaskService>,
    msg_tx: &mpsc::UnboundedSender<Message>,
) -> bool {
    match cmd {
        Command::LoadTasks => {
            elog_debug!("Command::LoadTasks");
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.list_tasks().await {
                    Ok(tasks) => {
                        let _ = tx.send(Message::TasksLoaded(tasks));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TasksLoadFailed(e.to_string()));
                    }
                }
            });
        }

        Command::CreateTask { draft } => {
            elog_debug!(
                "Command::CreateTask name={:?} urgent={} important={}",
                draft.name,
                draft.priority.urgent,
                draft.priority.important
            );
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.create_task(&draft).await {
                    Ok(task) => {
                        let _ = tx.send(Message::TaskCreated(task));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TaskCreateFailed {
                            name: draft.name,
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        Command::DeleteTask { id } => {
            elog_debug!("Command::DeleteTask id={}", id);
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.delete_task(&id).await {
                    Ok(()) => {
                        let _ = tx.send(Message::TaskDeleted(id));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TaskDeleteFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        Command::StartTimer { id } => {
            elog_debug!("Command::StartTimer id={}", id);
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.start_timer(&id).await {
                    Ok(()) => {
                        let _ = tx.send(Message::TimerStarted(id));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TimerFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        Command::PauseTimer { id } => {
            elog_debug!("Command::PauseTimer id={}", id);
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.pause_timer(&id).await {
                    Ok(()) => {
                        let _ = tx.send(Message::TimerPaused(id));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TimerFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        Command::ResumeTimer { id } => {
            elog_debug!("Command::ResumeTimer id={}", id);
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.resume_timer(&id).await {
                    Ok(()) => {
                        let _ = tx.send(Message::TimerResumed(id));
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TimerFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        Command::StopTimer { id } => {
            elog_debug!("Command::StopTimer id={}", id);
            let service = service.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                match service.stop_timer(&id).await {
                    Ok(total) => {
                        let _ = tx.send(Message::TimerStopped {
                            id,
                            total: total.total_time,
                        });
                    }
                    Err(e) => {
                        let _ = tx.send(Message::TimerFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        Command::Quit => {
            elog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}
