//! Load, create, and delete happy paths.
//!
//! Each test drives the full path from keyboard input (or page-ready load)
//! through the mock backend to the resulting board state.

use crossterm::event::KeyCode;

use eisen::task::{Quadrant, TaskId};

use crate::fixtures::{task, BoardHarness, MockBackend};

/// Test: Initial load distributes tasks by priority
/// Given a backend returning three tasks, two sharing a quadrant
/// When the page-ready load runs
/// Then exactly three entries appear, two in one container, one in another,
/// zero in the remaining two
#[tokio::test]
async fn test_initial_load_distributes_three_tasks() {
    let backend = MockBackend::with_tasks(vec![
        task("1", "file taxes", true, true),
        task("2", "fix the boiler", true, true),
        task("3", "sort photos", false, false),
    ]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    let board = &harness.model.board;
    assert_eq!(board.len(), 3);
    assert_eq!(board.tasks(Quadrant::UrgentImportant).len(), 2);
    assert_eq!(board.tasks(Quadrant::NotUrgentNotImportant).len(), 1);
    assert_eq!(board.tasks(Quadrant::NotUrgentImportant).len(), 0);
    assert_eq!(board.tasks(Quadrant::UrgentNotImportant).len(), 0);
}

#[tokio::test]
async fn test_initial_load_one_task_per_quadrant() {
    let backend = MockBackend::with_tasks(vec![
        task("1", "a", true, true),
        task("2", "b", false, true),
        task("3", "c", true, false),
        task("4", "d", false, false),
    ]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    for quadrant in Quadrant::ALL {
        assert_eq!(
            harness.model.board.tasks(quadrant).len(),
            1,
            "quadrant {} should hold exactly one task",
            quadrant
        );
    }
}

/// Test: Form submission renders the backend's record
/// Given a backend acknowledging the create with an assigned id
/// When the form is filled and submitted
/// Then one entry appears under urgent-important with the returned name
#[tokio::test]
async fn test_create_renders_acknowledged_record() {
    let backend = MockBackend::new();
    backend.queue_create(task("1", "Write report", true, true));
    let mut harness = BoardHarness::new(backend);

    harness.key(KeyCode::Char('n'));
    harness.type_str("Write report");
    harness.key(KeyCode::Tab); // to urgent
    harness.key(KeyCode::Char(' '));
    harness.key(KeyCode::Tab); // to important
    harness.key(KeyCode::Char(' '));
    harness.key(KeyCode::Enter);

    // Nothing rendered until the backend acknowledges
    assert!(harness.model.board.is_empty());

    harness.settle().await;

    let board = &harness.model.board;
    assert_eq!(board.tasks(Quadrant::UrgentImportant).len(), 1);
    assert_eq!(board.tasks(Quadrant::UrgentImportant)[0].name, "Write report");
    for other in [
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ] {
        assert!(board.tasks(other).is_empty());
    }
    assert_eq!(harness.backend.request_count("POST /task"), 1);
}

/// The rendered entry is the backend's representation, not the local draft.
#[tokio::test]
async fn test_create_renders_backend_name_not_draft() {
    let backend = MockBackend::new();
    backend.queue_create(task("9", "Write report (canonical)", false, true));
    let mut harness = BoardHarness::new(backend);

    harness.key(KeyCode::Char('n'));
    harness.type_str("write rpt");
    harness.key(KeyCode::Enter);
    harness.settle().await;

    let rendered = &harness.model.board.tasks(Quadrant::NotUrgentImportant)[0];
    assert_eq!(rendered.name, "Write report (canonical)");
    assert_eq!(rendered.id, TaskId::from("9"));
}

/// Test: Empty name is forwarded, not blocked client-side
#[tokio::test]
async fn test_empty_name_still_issues_create() {
    let backend = MockBackend::new();
    backend.queue_create(task("1", "", false, false));
    let mut harness = BoardHarness::new(backend);

    harness.key(KeyCode::Char('n'));
    harness.key(KeyCode::Enter);
    harness.settle().await;

    let requests = harness.backend.requests.lock().unwrap().clone();
    assert!(
        requests.iter().any(|r| r == "POST /task name=\"\""),
        "create request should carry the empty name: {:?}",
        requests
    );
    assert_eq!(harness.model.board.len(), 1);
}

/// Test: Successful delete removes exactly the targeted entry
#[tokio::test]
async fn test_delete_removes_exactly_that_entry() {
    let backend = MockBackend::with_tasks(vec![
        task("1", "keep me", true, true),
        task("2", "delete me", true, true),
        task("3", "keep me too", false, true),
    ]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    // Move the cursor to the second entry of the focused quadrant
    harness.key(KeyCode::Char('j'));
    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Enter);
    harness.settle().await;

    let board = &harness.model.board;
    assert_eq!(board.len(), 2);
    assert!(board.get(&TaskId::from("2")).is_none());
    assert!(board.get(&TaskId::from("1")).is_some());
    assert!(board.get(&TaskId::from("3")).is_some());
    assert_eq!(harness.backend.request_count("DELETE /task/2"), 1);
}

/// Duplicate records are rendered twice; the board does not de-duplicate.
#[tokio::test]
async fn test_duplicate_records_render_twice() {
    let backend = MockBackend::with_tasks(vec![
        task("1", "twice", false, true),
        task("1", "twice", false, true),
    ]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;

    assert_eq!(harness.model.board.tasks(Quadrant::NotUrgentImportant).len(), 2);
}

/// Reload replaces the board with the fresh collection.
#[tokio::test]
async fn test_reload_replaces_board() {
    let backend = MockBackend::with_tasks(vec![task("1", "old", true, true)]);
    let mut harness = BoardHarness::new(backend);
    harness.load().await;
    assert_eq!(harness.model.board.len(), 1);

    *harness.backend.tasks.lock().unwrap() =
        vec![task("2", "new a", false, true), task("3", "new b", true, false)];

    harness.key(KeyCode::Char('r'));
    harness.settle().await;

    let board = &harness.model.board;
    assert_eq!(board.len(), 2);
    assert!(board.get(&TaskId::from("1")).is_none());
    assert_eq!(harness.backend.request_count("GET /task"), 2);
}
