//! Tests for the application timeline stage mapping.

use crate::client::components::placement::applications::{
    timeline_stage_index, TIMELINE_STAGES,
};
use crate::model::placement::ApplicationStatus;

/// Test the four pipeline statuses.
///
/// Expected: each maps to its position on the timeline.
#[test]
fn pipeline_statuses_map_to_their_stage() {
    assert_eq!(timeline_stage_index(ApplicationStatus::Applied), 0);
    assert_eq!(timeline_stage_index(ApplicationStatus::UnderReview), 1);
    assert_eq!(
        timeline_stage_index(ApplicationStatus::InterviewScheduled),
        2
    );
    assert_eq!(timeline_stage_index(ApplicationStatus::Hired), 3);
}

/// Test a rejected application.
///
/// Expected: the timeline stays at the first stage; the badge carries the
/// outcome instead.
#[test]
fn rejected_stays_on_first_stage() {
    assert_eq!(timeline_stage_index(ApplicationStatus::Rejected), 0);
}

/// Test that every stage index stays within the rendered timeline.
///
/// Expected: all mapped indexes address a real stage.
#[test]
fn indexes_stay_within_the_timeline() {
    let statuses = [
        ApplicationStatus::Applied,
        ApplicationStatus::UnderReview,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ];

    for status in statuses {
        assert!(timeline_stage_index(status) < TIMELINE_STAGES.len());
    }
}
