//! End-to-end tests of the serving boundary: refresh, projection, and
//! issue-URL lookup over the in-memory adapters.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use chrono::{DateTime, TimeZone, Utc};
use gantry::app::{App, AppError};
use gantry::sync::{
    adapters::memory::{InMemoryIssueFeed, InMemoryTaskStore},
    domain::{IssueId, IssueState, KeywordConfig, RemoteIssue, RemoteLabel},
};
use std::sync::Arc;

fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 9, 30, 0)
        .single()
        .expect("timestamp should be unambiguous")
}

fn remote_issue(raw_id: i64, title: &str, body: Option<&str>) -> RemoteIssue {
    RemoteIssue {
        id: IssueId::new(raw_id).expect("issue id should be positive"),
        number: u32::try_from(raw_id).expect("issue number should fit"),
        title: title.to_owned(),
        body: body.map(str::to_owned),
        url: format!("https://api.example.test/issues/{raw_id}"),
        html_url: format!("https://example.test/issues/{raw_id}"),
        state: IssueState::Open,
        created_at: created_at(),
        labels: vec![RemoteLabel::new("backend", "1d76db")],
    }
}

fn app_over(
    store: &Arc<InMemoryTaskStore>,
    pages: Vec<Vec<RemoteIssue>>,
) -> App<InMemoryIssueFeed, InMemoryTaskStore> {
    App::new(
        Arc::new(InMemoryIssueFeed::new(pages)),
        Arc::clone(store),
        KeywordConfig::default(),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_syncs_the_feed_and_returns_the_projection() {
    let store = Arc::new(InMemoryTaskStore::new());
    let app = app_over(
        &store,
        vec![
            vec![
                remote_issue(
                    1,
                    "Ship the importer",
                    Some("due date: 2026-03-14\nlabel: backend\nprogress: 0.4"),
                ),
                remote_issue(2, "No schedule yet", Some("just prose")),
            ],
            vec![remote_issue(
                3,
                "Write the docs",
                Some("start date: 2026-02-01\ndue date: 2026-02-10"),
            )],
        ],
    );

    let chart = app.refresh().await.expect("refresh should succeed");

    // Only the two issues with parsed due dates are chart rows.
    let ids: Vec<i64> = chart.data.iter().map(|row| row.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&1));
    assert!(ids.contains(&3));

    let row = chart
        .data
        .iter()
        .find(|candidate| candidate.id == 1)
        .expect("row for issue 1");
    assert_eq!(row.text, "Ship the importer");
    assert_eq!(row.end_date, "14-03-2026");
    assert_eq!(row.color.as_deref(), Some("#1D76DB"));
    assert_eq!(row.progress, Some(0.4));
}

#[tokio::test(flavor = "multi_thread")]
async fn chart_data_reads_the_store_without_syncing() {
    let store = Arc::new(InMemoryTaskStore::new());
    let app = app_over(
        &store,
        vec![vec![remote_issue(1, "one", Some("due date: 2026-03-14"))]],
    );

    let before = app.chart_data().await.expect("projection should succeed");
    assert!(before.data.is_empty());

    app.refresh().await.expect("refresh should succeed");
    let after = app.chart_data().await.expect("projection should succeed");
    assert_eq!(after.data.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn issue_url_resolves_known_ids_and_rejects_unknown_ones() {
    let store = Arc::new(InMemoryTaskStore::new());
    let app = app_over(&store, vec![vec![remote_issue(1, "one", None)]]);
    app.refresh().await.expect("refresh should succeed");

    let url = app
        .issue_url(IssueId::new(1).expect("valid id"))
        .await
        .expect("known id should resolve");
    assert_eq!(url, "https://example.test/issues/1");

    let missing = app.issue_url(IssueId::new(404).expect("valid id")).await;
    assert!(matches!(missing, Err(AppError::TaskNotFound(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn shrunken_feed_tombstones_across_refreshes() {
    let store = Arc::new(InMemoryTaskStore::new());
    let seed = app_over(
        &store,
        vec![vec![
            remote_issue(1, "one", Some("due date: 2026-03-14")),
            remote_issue(2, "two", Some("due date: 2026-03-15")),
        ]],
    );
    seed.refresh().await.expect("seed refresh");

    let shrunk = app_over(
        &store,
        vec![vec![remote_issue(1, "one", Some("due date: 2026-03-14"))]],
    );
    let chart = shrunk.refresh().await.expect("shrunk refresh");

    // Issue 2 vanished from the feed: tombstoned out of the chart but still
    // resolvable by id.
    let ids: Vec<i64> = chart.data.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1]);
    let url = shrunk
        .issue_url(IssueId::new(2).expect("valid id"))
        .await
        .expect("tombstoned record should still resolve");
    assert_eq!(url, "https://example.test/issues/2");
}

#[tokio::test(flavor = "multi_thread")]
async fn sync_reports_run_counters() {
    let store = Arc::new(InMemoryTaskStore::new());
    let app = app_over(
        &store,
        vec![
            vec![remote_issue(1, "one", None), remote_issue(2, "two", None)],
            vec![remote_issue(3, "three", None)],
        ],
    );

    let summary = app.sync().await.expect("sync should succeed");
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.upserted, 3);
    assert_eq!(summary.tombstoned, 0);
}
