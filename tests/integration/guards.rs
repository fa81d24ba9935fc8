//! In-flight request guards.
//!
//! A rapid double-submission must not issue duplicate mutation requests:
//! creates share one guard (drafts have no id yet), deletes and timer
//! operations are guarded per task id. Completion messages release the
//! guards, so the next attempt goes through.

use crossterm::event::KeyCode;

use eisen::task::TaskId;

use crate::fixtures::{task, BoardHarness, MockBackend};

#[tokio::test]
async fn test_double_submit_issues_one_create() {
    let backend = MockBackend::new();
    backend.queue_create(task("1", "once", false, false));
    let mut harness = BoardHarness::new(backend);

    harness.key(KeyCode::Char('n'));
    harness.type_str("once");
    harness.key(KeyCode::Enter);

    // Second submit lands before the first completion is processed
    harness.key(KeyCode::Char('n'));
    harness.type_str("once again");
    harness.key(KeyCode::Enter);

    harness.settle().await;

    assert_eq!(harness.backend.request_count("POST /task"), 1);
    assert_eq!(harness.model.board.len(), 1);
}

#[tokio::test]
async fn test_submit_allowed_after_completion() {
    let backend = MockBackend::new();
    backend.queue_create(task("1", "first", false, false));
    backend.queue_create(task("2", "second", false, false));
    let mut harness = BoardHarness::new(backend);

    harness.key(KeyCode::Char('n'));
    harness.type_str("first");
    harness.key(KeyCode::Enter);
    harness.settle().await;

    harness.key(KeyCode::Char('n'));
    harness.type_str("second");
    harness.key(KeyCode::Enter);
    harness.settle().await;

    assert_eq!(harness.backend.request_count("POST /task"), 2);
    assert_eq!(harness.model.board.len(), 2);
}

#[tokio::test]
async fn test_double_delete_issues_one_request() {
    let backend = MockBackend::with_tasks(vec![task("1", "target", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);

    // The entry is still on the board; arm a second delete for the same id
    // before the first completion arrives
    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);

    harness.settle().await;

    assert_eq!(harness.backend.request_count("DELETE /task/1"), 1);
    assert!(harness.model.board.get(&TaskId::from("1")).is_none());
}

#[tokio::test]
async fn test_timer_toggle_guarded_per_id() {
    let backend = MockBackend::with_tasks(vec![task("1", "timed", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.key(KeyCode::Char('t'));
    harness.key(KeyCode::Char('t')); // suppressed: start still outstanding
    harness.settle().await;

    assert_eq!(harness.backend.request_count("POST /timer/start 1"), 1);
    assert_eq!(harness.backend.request_count("POST /timer/stop 1"), 0);
}
