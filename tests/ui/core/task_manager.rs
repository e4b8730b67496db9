use std::time::{Duration, Instant};

use summarist::ui::core::actions::Action;
use summarist::ui::core::task_manager::{OperationKind, TaskManager};
use tokio::sync::mpsc;
use tokio::time::timeout;

async fn next_action(rx: &mut mpsc::UnboundedReceiver<Action>) -> Action {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for background action")
        .expect("action channel closed")
}

#[tokio::test]
async fn test_success_delivers_exactly_one_action() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.submit(
        OperationKind::Summarize,
        "test op".to_string(),
        || async { Ok("Short summary.".to_string()) },
        Action::SummarizeCompleted,
        Action::SummarizeFailed,
    );

    match next_action(&mut rx).await {
        Action::SummarizeCompleted(summary) => assert_eq!(summary, "Short summary."),
        other => panic!("expected SummarizeCompleted, got {other:?}"),
    }

    // No second delivery for the same task
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_failure_delivers_error_action_with_message() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.submit(
        OperationKind::LoadModels,
        "failing op".to_string(),
        || async { Err::<Vec<String>, _>(anyhow::anyhow!("connection refused")) },
        Action::ModelsLoaded,
        Action::ModelsLoadFailed,
    );

    match next_action(&mut rx).await {
        Action::ModelsLoadFailed(message) => {
            assert!(!message.is_empty());
            assert!(message.contains("connection refused"));
        }
        other => panic!("expected ModelsLoadFailed, got {other:?}"),
    }

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(rx.try_recv().is_err(), "success action must never fire for a failed task");
}

#[tokio::test]
async fn test_submit_returns_without_blocking() {
    let (mut manager, mut rx) = TaskManager::new();

    let before = Instant::now();
    manager.submit(
        OperationKind::Summarize,
        "slow op".to_string(),
        || async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok("done".to_string())
        },
        Action::SummarizeCompleted,
        Action::SummarizeFailed,
    );
    assert!(
        before.elapsed() < Duration::from_millis(100),
        "submit must not wait for the operation"
    );

    // The result still arrives eventually
    match next_action(&mut rx).await {
        Action::SummarizeCompleted(s) => assert_eq!(s, "done"),
        other => panic!("expected SummarizeCompleted, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_kinds_both_deliver_exactly_once() {
    let (mut manager, mut rx) = TaskManager::new();

    // Slow summarize alongside a fast model load; completion order is the
    // reverse of submission order.
    manager.submit(
        OperationKind::Summarize,
        "slow summarize".to_string(),
        || async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok("summary".to_string())
        },
        Action::SummarizeCompleted,
        Action::SummarizeFailed,
    );
    manager.submit(
        OperationKind::LoadModels,
        "fast load".to_string(),
        || async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(vec!["llama3".to_string()])
        },
        Action::ModelsLoaded,
        Action::ModelsLoadFailed,
    );

    let mut summaries = 0;
    let mut model_loads = 0;
    for _ in 0..2 {
        match next_action(&mut rx).await {
            Action::SummarizeCompleted(_) => summaries += 1,
            Action::ModelsLoaded(_) => model_loads += 1,
            other => panic!("unexpected action {other:?}"),
        }
    }

    assert_eq!(summaries, 1);
    assert_eq!(model_loads, 1);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_is_running_tracks_kind_until_completion() {
    let (mut manager, mut rx) = TaskManager::new();

    manager.submit(
        OperationKind::LoadModels,
        "tracked op".to_string(),
        || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(Vec::<String>::new())
        },
        Action::ModelsLoaded,
        Action::ModelsLoadFailed,
    );

    assert!(manager.is_running(OperationKind::LoadModels));
    assert!(!manager.is_running(OperationKind::Summarize));
    assert_eq!(manager.task_count(), 1);

    let _ = next_action(&mut rx).await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(!manager.is_running(OperationKind::LoadModels));
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].1, "tracked op");
    assert_eq!(manager.task_count(), 0);
}
