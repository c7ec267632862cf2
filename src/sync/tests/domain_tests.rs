//! Domain type tests: identifiers, states, and task construction.

use super::fixtures::{chart_task, created_at, date, issue, issue_with_body};
use crate::sync::domain::{
    IssueId, IssueMetadata, IssueState, SyncDomainError, Task, chart_order,
};
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(-7)]
fn issue_id_rejects_non_positive_values(#[case] raw: i64) {
    assert_eq!(
        IssueId::new(raw),
        Err(SyncDomainError::InvalidIssueId(raw))
    );
}

#[rstest]
fn issue_id_round_trips_positive_values() {
    let id = IssueId::new(42).expect("positive id should validate");
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "42");
}

#[rstest]
#[case("open", IssueState::Open)]
#[case("closed", IssueState::Closed)]
#[case("  Open ", IssueState::Open)]
#[case("CLOSED", IssueState::Closed)]
fn issue_state_parses_canonical_and_normalized_forms(
    #[case] raw: &str,
    #[case] expected: IssueState,
) {
    assert_eq!(IssueState::try_from(raw), Ok(expected));
}

#[rstest]
fn issue_state_rejects_unknown_values() {
    assert!(IssueState::try_from("merged").is_err());
}

#[rstest]
fn task_mirrors_remote_fields_and_applies_defaults() {
    let remote = issue(7, "Ship the importer");
    let task = Task::from_remote(&remote, &IssueMetadata::default());

    assert_eq!(task.id.value(), 7);
    assert_eq!(task.title, "Ship the importer");
    assert_eq!(task.body, "");
    assert_eq!(task.state, IssueState::Open);
    assert_eq!(task.remote_created_at, created_at());
    assert_eq!(task.start_date, created_at().date_naive());
    assert_eq!(task.end_date, None);
    assert_eq!(task.duration, Task::DEFAULT_DURATION_DAYS);
    assert!(!task.is_deleted);
    assert_eq!(task.kind, None);
    assert_eq!(task.parent, None);
}

#[rstest]
fn task_prefers_extracted_start_date_over_creation_date() {
    let remote = issue_with_body(7, "Ship the importer", "irrelevant", Vec::new());
    let metadata = IssueMetadata {
        start_date: Some(date(2026, 2, 1)),
        due_date: Some(date(2026, 2, 15)),
        ..IssueMetadata::default()
    };
    let task = Task::from_remote(&remote, &metadata);

    assert_eq!(task.start_date, date(2026, 2, 1));
    assert_eq!(task.end_date, Some(date(2026, 2, 15)));
    assert_eq!(task.body, "irrelevant");
}

#[rstest]
fn chart_eligibility_requires_open_live_and_dated() {
    let eligible = chart_task(1, Some("x"), date(2026, 1, 5), date(2026, 1, 20));
    assert!(eligible.is_chart_eligible());

    let closed = Task {
        state: IssueState::Closed,
        ..eligible.clone()
    };
    assert!(!closed.is_chart_eligible());

    let tombstoned = Task {
        is_deleted: true,
        ..eligible.clone()
    };
    assert!(!tombstoned.is_chart_eligible());

    let undated = Task {
        end_date: None,
        ..eligible
    };
    assert!(!undated.is_chart_eligible());
}

#[rstest]
fn chart_order_sorts_label_ascending_then_start_descending() {
    let task_a = chart_task(1, Some("x"), date(2026, 1, 5), date(2026, 1, 30));
    let task_b = chart_task(2, Some("x"), date(2026, 1, 10), date(2026, 1, 30));
    let task_c = chart_task(3, Some("y"), date(2026, 1, 1), date(2026, 1, 30));

    let mut tasks = vec![task_a.clone(), task_b.clone(), task_c.clone()];
    chart_order(&mut tasks);

    // "x" group first (label ascending), newer start first within the group.
    assert_eq!(tasks, vec![task_b, task_a, task_c]);
}

#[rstest]
fn chart_order_places_unlabelled_tasks_first() {
    let unlabelled = chart_task(1, None, date(2026, 1, 5), date(2026, 1, 30));
    let labelled = chart_task(2, Some("a"), date(2026, 1, 5), date(2026, 1, 30));

    let mut tasks = vec![labelled.clone(), unlabelled.clone()];
    chart_order(&mut tasks);

    assert_eq!(tasks, vec![unlabelled, labelled]);
}
