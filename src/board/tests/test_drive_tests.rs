//! Unit tests for the test-drive sub-state machine.

use chrono::TimeDelta;
use rstest::rstest;

use super::fixtures::{FixedClock, checked_in, reference_instant};
use crate::board::domain::{BoardDomainError, Priority, TestDriveState, WorkItem};

fn item_at_reference() -> (WorkItem, FixedClock) {
    let clock = FixedClock(reference_instant());
    let item = checked_in("detailing", "CAR1", Priority::Normal, &clock);
    (item, clock)
}

#[rstest]
fn start_requires_driver_name() {
    let (mut item, clock) = item_at_reference();

    let result = item.start_test_drive("   ", &clock);

    assert_eq!(result, Err(BoardDomainError::DriverNameRequired));
    assert_eq!(item.test_drive(), &TestDriveState::Available);
    assert_eq!(item.revision(), 0);
}

#[rstest]
fn start_records_driver_and_start_time() {
    let (mut item, clock) = item_at_reference();

    item.start_test_drive("  Dana ", &clock)
        .expect("available car can go out");

    assert_eq!(
        item.test_drive(),
        &TestDriveState::OnTestDrive {
            driver: "Dana".to_owned(),
            started_at: clock.0,
        }
    );
    assert_eq!(item.revision(), 1);
}

#[rstest]
fn double_start_is_rejected() {
    let (mut item, clock) = item_at_reference();
    item.start_test_drive("Dana", &clock)
        .expect("first start succeeds");

    let result = item.start_test_drive("Elio", &clock);

    assert_eq!(
        result,
        Err(BoardDomainError::TestDriveAlreadyStarted {
            driver: "Dana".to_owned(),
        })
    );
}

#[rstest]
fn a_barred_car_cannot_go_out() {
    let (mut item, clock) = item_at_reference();
    item.bar_test_drives(&clock).expect("idle car can be barred");

    let result = item.start_test_drive("Dana", &clock);

    assert_eq!(result, Err(BoardDomainError::TestDriveUnavailable));
    assert_eq!(item.test_drive(), &TestDriveState::NotAvailable);
}

#[rstest]
fn a_car_out_on_a_drive_cannot_be_barred() {
    let (mut item, clock) = item_at_reference();
    item.start_test_drive("Dana", &clock).expect("start succeeds");

    let result = item.bar_test_drives(&clock);

    assert_eq!(
        result,
        Err(BoardDomainError::TestDriveAlreadyStarted {
            driver: "Dana".to_owned(),
        })
    );
}

#[rstest]
fn clearing_a_bar_makes_the_car_available_again() {
    let (mut item, clock) = item_at_reference();
    item.bar_test_drives(&clock).expect("idle car can be barred");
    let barred_revision = item.revision();

    item.allow_test_drives(&clock);
    assert_eq!(item.test_drive(), &TestDriveState::Available);
    assert_eq!(item.revision(), barred_revision + 1);

    // Clearing again is a no-op and does not touch the item.
    item.allow_test_drives(&clock);
    assert_eq!(item.revision(), barred_revision + 1);

    item.start_test_drive("Dana", &clock)
        .expect("car is available again");
}

#[rstest]
fn end_without_start_is_rejected() {
    let (mut item, clock) = item_at_reference();

    let result = item.end_test_drive(&clock);

    assert_eq!(result, Err(BoardDomainError::TestDriveNotStarted));
}

#[rstest]
fn end_yields_duration_and_frees_the_car() {
    let (mut item, start_clock) = item_at_reference();
    item.start_test_drive("Dana", &start_clock)
        .expect("start succeeds");

    let return_clock = FixedClock(reference_instant() + TimeDelta::minutes(45));
    let record = item.end_test_drive(&return_clock).expect("end succeeds");

    assert_eq!(record.driver, "Dana");
    assert_eq!(record.duration, TimeDelta::minutes(45));
    assert_eq!(record.started_at, start_clock.0);
    assert_eq!(record.ended_at, return_clock.0);
    assert_eq!(item.test_drive(), &TestDriveState::Available);

    // The cycle can start again once the car is back.
    let mut second = item;
    second
        .start_test_drive("Elio", &return_clock)
        .expect("car is available again");
}
