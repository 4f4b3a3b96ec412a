//! Unit tests for the work status transition guard.

use mockable::DefaultClock;
use rstest::{fixture, rstest};

use super::fixtures::checked_in;
use crate::board::domain::{BoardDomainError, Priority, WorkStatus};

const ALL_STATUSES: [WorkStatus; 4] = [
    WorkStatus::Scheduled,
    WorkStatus::InProgress,
    WorkStatus::Paused,
    WorkStatus::Completed,
];

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case(WorkStatus::Scheduled, WorkStatus::Scheduled, false)]
#[case(WorkStatus::Scheduled, WorkStatus::InProgress, true)]
#[case(WorkStatus::Scheduled, WorkStatus::Paused, false)]
#[case(WorkStatus::Scheduled, WorkStatus::Completed, false)]
#[case(WorkStatus::InProgress, WorkStatus::Scheduled, false)]
#[case(WorkStatus::InProgress, WorkStatus::InProgress, false)]
#[case(WorkStatus::InProgress, WorkStatus::Paused, true)]
#[case(WorkStatus::InProgress, WorkStatus::Completed, true)]
#[case(WorkStatus::Paused, WorkStatus::Scheduled, false)]
#[case(WorkStatus::Paused, WorkStatus::InProgress, true)]
#[case(WorkStatus::Paused, WorkStatus::Paused, false)]
#[case(WorkStatus::Paused, WorkStatus::Completed, true)]
#[case(WorkStatus::Completed, WorkStatus::Scheduled, false)]
#[case(WorkStatus::Completed, WorkStatus::InProgress, false)]
#[case(WorkStatus::Completed, WorkStatus::Paused, false)]
#[case(WorkStatus::Completed, WorkStatus::Completed, false)]
fn can_transition_to_returns_expected(
    #[case] from: WorkStatus,
    #[case] to: WorkStatus,
    #[case] expected: bool,
) {
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
fn completed_is_terminal() {
    for target in ALL_STATUSES {
        assert!(!WorkStatus::Completed.can_transition_to(target));
    }
}

#[rstest]
#[case("scheduled", WorkStatus::Scheduled)]
#[case(" In_Progress ", WorkStatus::InProgress)]
#[case("paused", WorkStatus::Paused)]
#[case("completed", WorkStatus::Completed)]
fn status_parses_canonical_strings(#[case] value: &str, #[case] expected: WorkStatus) {
    assert_eq!(WorkStatus::try_from(value), Ok(expected));
}

#[rstest]
fn status_round_trips_through_as_str() {
    for status in ALL_STATUSES {
        assert_eq!(WorkStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn change_status_rejects_forbidden_transition(clock: DefaultClock) {
    let mut item = checked_in("mechanical", "CAR3", Priority::Normal, &clock);

    let result = item.change_status(WorkStatus::Completed, &clock);

    assert_eq!(
        result,
        Err(BoardDomainError::InvalidStatusTransition {
            from: "scheduled".to_owned(),
            to: "completed".to_owned(),
        })
    );
    assert_eq!(item.status(), WorkStatus::Scheduled);
    assert_eq!(item.revision(), 0);
}

#[rstest]
fn completing_records_completion_time(clock: DefaultClock) {
    let mut item = checked_in("mechanical", "CAR4", Priority::Normal, &clock);

    item.change_status(WorkStatus::InProgress, &clock)
        .expect("scheduled to in_progress is allowed");
    item.change_status(WorkStatus::Completed, &clock)
        .expect("in_progress to completed is allowed");

    assert_eq!(item.status(), WorkStatus::Completed);
    assert!(item.completed_at().is_some());
    assert_eq!(item.revision(), 2);

    let event = item.completion_event().expect("completed item has an event");
    assert_eq!(event.car_code, "CAR4");
    assert_eq!(event.estimated_minutes, 90);
}

#[rstest]
fn completion_event_is_none_for_open_items(clock: DefaultClock) {
    let item = checked_in("mechanical", "CAR5", Priority::Normal, &clock);
    assert!(item.completion_event().is_none());
}
