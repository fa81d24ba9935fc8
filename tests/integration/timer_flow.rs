//! Task timer flows: start, pause, resume, stop.
//!
//! The backend owns elapsed time; the client only tracks which glyph to
//! draw and surfaces the reported total when a timer stops.

use crossterm::event::KeyCode;

use eisen::task::TaskId;
use eisen::tea::{NotificationLevel, TimerState};

use crate::fixtures::{task, BoardHarness, MockBackend};

#[tokio::test]
async fn test_timer_start_stop_reports_total() {
    let backend = MockBackend::with_tasks(vec![task("1", "deep work", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.key(KeyCode::Char('t'));
    harness.settle().await;
    assert_eq!(
        harness.model.timers.get(&TaskId::from("1")),
        Some(&TimerState::Running)
    );

    harness.key(KeyCode::Char('t'));
    harness.settle().await;

    assert!(harness.model.timers.is_empty());
    let notification = harness.model.notification.as_ref().expect("stop total shown");
    assert_eq!(notification.level, NotificationLevel::Info);
    assert!(notification.message.contains("0:42:10"));
    assert!(notification.message.contains("deep work"));
    assert_eq!(harness.backend.request_count("POST /timer/start 1"), 1);
    assert_eq!(harness.backend.request_count("POST /timer/stop 1"), 1);
}

#[tokio::test]
async fn test_timer_pause_resume() {
    let backend = MockBackend::with_tasks(vec![task("1", "deep work", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.key(KeyCode::Char('t'));
    harness.settle().await;

    harness.key(KeyCode::Char('p'));
    harness.settle().await;
    assert_eq!(
        harness.model.timers.get(&TaskId::from("1")),
        Some(&TimerState::Paused)
    );

    harness.key(KeyCode::Char('p'));
    harness.settle().await;
    assert_eq!(
        harness.model.timers.get(&TaskId::from("1")),
        Some(&TimerState::Running)
    );

    assert_eq!(harness.backend.request_count("POST /timer/pause 1"), 1);
    assert_eq!(harness.backend.request_count("POST /timer/resume 1"), 1);
}

#[tokio::test]
async fn test_pause_without_timer_issues_nothing() {
    let backend = MockBackend::with_tasks(vec![task("1", "idle", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.key(KeyCode::Char('p'));
    harness.settle().await;

    assert_eq!(harness.backend.request_count("POST /timer/pause"), 0);
}

#[tokio::test]
async fn test_timer_failure_shows_error_notification() {
    let backend = MockBackend::with_tasks(vec![task("1", "deep work", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.backend.set_fail(true);
    harness.key(KeyCode::Char('t'));
    harness.settle().await;

    assert!(harness.model.timers.is_empty(), "no glyph without acknowledgment");
    let notification = harness.model.notification.as_ref().expect("timer errors surface");
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(harness.model.board.len(), 1, "board untouched");
}

#[tokio::test]
async fn test_deleting_task_clears_its_timer() {
    let backend = MockBackend::with_tasks(vec![task("1", "timed", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.key(KeyCode::Char('t'));
    harness.settle().await;
    assert!(!harness.model.timers.is_empty());

    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);
    harness.settle().await;

    assert!(harness.model.board.is_empty());
    assert!(harness.model.timers.is_empty());
}
