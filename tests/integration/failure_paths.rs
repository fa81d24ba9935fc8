//! Backend failures leave the board untouched.
//!
//! The contract for list/create/delete failures is a silent no-op from the
//! user's perspective: a log line is written, the board does not change,
//! and nothing panics or propagates.

use crossterm::event::KeyCode;

use eisen::task::{Quadrant, TaskId};

use crate::fixtures::{task, BoardHarness, MockBackend};

#[tokio::test]
async fn test_load_failure_leaves_board_empty() {
    let backend = MockBackend::with_tasks(vec![task("1", "unreachable", true, true)]);
    backend.set_fail(true);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    assert!(harness.model.board.is_empty());
    assert!(
        harness.model.notification.is_none(),
        "load failures are log-only"
    );
}

#[tokio::test]
async fn test_create_failure_leaves_board_unchanged() {
    let backend = MockBackend::with_tasks(vec![task("1", "existing", false, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.backend.set_fail(true);
    harness.key(KeyCode::Char('n'));
    harness.type_str("doomed");
    harness.key(KeyCode::Enter);
    harness.settle().await;

    assert_eq!(harness.model.board.len(), 1, "no entry for the failed create");
    assert!(harness.model.notification.is_none(), "create failures are log-only");
    assert_eq!(harness.backend.request_count("POST /task"), 1, "request was issued");
}

#[tokio::test]
async fn test_create_failure_releases_guard() {
    let backend = MockBackend::new();
    let mut harness = BoardHarness::new(backend);

    harness.backend.set_fail(true);
    harness.key(KeyCode::Char('n'));
    harness.type_str("first try");
    harness.key(KeyCode::Enter);
    harness.settle().await;

    // Second attempt after the failure goes through
    harness.backend.set_fail(false);
    harness.backend.queue_create(task("1", "second try", false, false));
    harness.key(KeyCode::Char('n'));
    harness.type_str("second try");
    harness.key(KeyCode::Enter);
    harness.settle().await;

    assert_eq!(harness.model.board.len(), 1);
    assert_eq!(harness.backend.request_count("POST /task"), 2);
}

#[tokio::test]
async fn test_delete_failure_keeps_stale_entry() {
    let backend = MockBackend::with_tasks(vec![task("1", "stubborn", true, false)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.model.focus = Quadrant::UrgentNotImportant;
    harness.backend.set_fail(true);
    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);
    harness.settle().await;

    // The stale entry remains, inconsistent with backend state
    assert!(harness.model.board.get(&TaskId::from("1")).is_some());
    assert!(harness.model.notification.is_none(), "delete failures are log-only");
    assert_eq!(harness.backend.request_count("DELETE /task/1"), 1);
}

#[tokio::test]
async fn test_delete_succeeds_after_earlier_failure() {
    let backend = MockBackend::with_tasks(vec![task("1", "stubborn", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    harness.backend.set_fail(true);
    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);
    harness.settle().await;
    assert_eq!(harness.model.board.len(), 1);

    harness.backend.set_fail(false);
    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);
    harness.settle().await;

    assert!(harness.model.board.is_empty());
    assert_eq!(harness.backend.request_count("DELETE /task/1"), 2);
}
