//! Integration tests for the JSON document-file repository.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use camshaft::board::{
    adapters::{
        json_store::JsonStoreWorkItemRepository,
        memory::{RecordingBoardNotifier, RecordingCompletionSink},
    },
    domain::{
        CarCode, CheckInDetails, EstimatedMinutes, MechanicRoster, Priority, Section, SectionId,
        WorkItem, WorkItemId, WorkStatus,
    },
    ports::{WorkItemRepository, WorkItemRepositoryError},
    services::{CheckInRequest, SchedulerBoard},
};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::DefaultClock;
use rstest::rstest;
use uuid::Uuid;

const STORE_FILE: &str = "board.json";

/// Creates a unique scratch directory and returns its path and handle.
fn scratch_dir() -> (String, Dir) {
    let path = format!(
        "{}/camshaft-test-{}",
        std::env::temp_dir().display(),
        Uuid::new_v4()
    );
    std::fs::create_dir_all(&path).expect("create scratch dir");
    let dir = Dir::open_ambient_dir(path.as_str(), ambient_authority()).expect("open scratch dir");
    (path, dir)
}

fn cleanup(path: &str) {
    // Best-effort: a leftover scratch dir is harmless.
    drop(std::fs::remove_dir_all(path));
}

fn open_store(path: &str) -> JsonStoreWorkItemRepository {
    let dir = Dir::open_ambient_dir(path, ambient_authority()).expect("open scratch dir");
    JsonStoreWorkItemRepository::new(dir, STORE_FILE)
}

fn checked_in(section: &str, code: &str, priority: Priority) -> WorkItem {
    WorkItem::check_in(
        CheckInDetails {
            car_code: CarCode::new(code).expect("valid car code"),
            car_model: format!("Model {code}"),
            section_id: SectionId::new(section).expect("valid section id"),
            mechanic: None,
            priority,
            estimate: EstimatedMinutes::new(60).expect("valid estimate"),
            note: None,
        },
        &DefaultClock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_file_reads_as_an_empty_board() {
    let (path, dir) = scratch_dir();
    let store = JsonStoreWorkItemRepository::new(dir, STORE_FILE);

    let items = store.list_all().await.expect("read succeeds");

    assert!(items.is_empty());
    cleanup(&path);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insertion_order_survives_a_reopen() {
    let (path, dir) = scratch_dir();
    let store = JsonStoreWorkItemRepository::new(dir, STORE_FILE);
    let codes = ["CAR1", "CAR2", "CAR3"];
    for code in codes {
        let item = checked_in("electrical", code, Priority::Normal);
        store.insert(&item).await.expect("insert succeeds");
    }

    let reopened = open_store(&path);
    let listed: Vec<String> = reopened
        .list_all()
        .await
        .expect("read succeeds")
        .iter()
        .map(|item| item.car_code().to_string())
        .collect();

    assert_eq!(listed, codes);
    cleanup(&path);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_insert_is_rejected() {
    let (path, dir) = scratch_dir();
    let store = JsonStoreWorkItemRepository::new(dir, STORE_FILE);
    let item = checked_in("painting", "CAR1", Priority::Normal);
    store.insert(&item).await.expect("first insert succeeds");

    let result = store.insert(&item).await;

    assert!(matches!(result, Err(WorkItemRepositoryError::Duplicate(_))));
    cleanup(&path);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_and_rejects_stale_revisions() {
    let (path, dir) = scratch_dir();
    let store = JsonStoreWorkItemRepository::new(dir, STORE_FILE);
    let item = checked_in("painting", "CAR1", Priority::Normal);
    store.insert(&item).await.expect("insert succeeds");

    let mut changed = item.clone();
    changed
        .change_status(WorkStatus::InProgress, &DefaultClock)
        .expect("scheduled to in_progress is allowed");
    store.update(&changed).await.expect("fresh write lands");

    // Replaying the same revision is stale.
    let result = store.update(&changed).await;
    assert!(matches!(
        result,
        Err(WorkItemRepositoryError::StaleWrite { .. })
    ));

    let reopened = open_store(&path);
    let listed = reopened.list_all().await.expect("read succeeds");
    let stored = listed.first().expect("one item stored");
    assert_eq!(stored.status(), WorkStatus::InProgress);
    cleanup(&path);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_item() {
    let (path, dir) = scratch_dir();
    let store = JsonStoreWorkItemRepository::new(dir, STORE_FILE);
    let item = checked_in("detailing", "CAR1", Priority::Normal);
    store.insert(&item).await.expect("insert succeeds");

    store.delete(item.id()).await.expect("delete succeeds");

    assert!(store.list_all().await.expect("read succeeds").is_empty());
    let missing = store.delete(WorkItemId::new()).await;
    assert!(matches!(missing, Err(WorkItemRepositoryError::NotFound(_))));
    cleanup(&path);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_board_reloaded_from_the_store_sees_prior_work() {
    let (path, dir) = scratch_dir();
    let store = JsonStoreWorkItemRepository::new(dir, STORE_FILE);
    let electrical = SectionId::new("electrical").expect("valid section id");

    let mut board = SchedulerBoard::load(
        Section::standard_shop(),
        MechanicRoster::default(),
        Arc::new(store),
        Arc::new(RecordingBoardNotifier::new()),
        Arc::new(RecordingCompletionSink::new()),
        Arc::new(DefaultClock),
    )
    .await
    .expect("board loads from empty store");

    let first = board
        .check_in(CheckInRequest::new("electrical", "CAR1", "Corsa B", 60))
        .await
        .expect("check-in succeeds");
    board
        .check_in(CheckInRequest::new("electrical", "CAR2", "Corsa B", 60))
        .await
        .expect("check-in succeeds");
    board
        .change_status(&electrical, first.id(), WorkStatus::InProgress)
        .await
        .expect("start work");
    board
        .change_status(&electrical, first.id(), WorkStatus::Completed)
        .await
        .expect("complete work");

    // A fresh board over the same file sees the same partition.
    let reloaded = SchedulerBoard::load(
        Section::standard_shop(),
        MechanicRoster::default(),
        Arc::new(open_store(&path)),
        Arc::new(RecordingBoardNotifier::new()),
        Arc::new(RecordingCompletionSink::new()),
        Arc::new(DefaultClock),
    )
    .await
    .expect("board reloads");

    let snapshot = reloaded
        .section_snapshot(&electrical)
        .expect("section exists");
    assert_eq!(snapshot.completed_count(), 1);
    let active = snapshot.active.first().expect("CAR2 is active");
    assert_eq!(active.car_code().as_str(), "CAR2");
    cleanup(&path);
}
