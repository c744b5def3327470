//! Crawls that partly fail still produce a usable snapshot.

use std::collections::BTreeSet;
use std::time::Duration;

use super::common::{make_record, ScriptedSource};
use comicdex::build::placeholder_record;
use comicdex::{BuildError, ComicId, CorpusBuilder, CorpusIndex, FetchError};

fn requested_ids(source: &ScriptedSource) -> Vec<ComicId> {
    let mut ids: Vec<ComicId> = source.requested().into_iter().flatten().collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn test_failed_ids_are_omitted_not_fatal() {
    let source = ScriptedSource::with_range(20).failing([2, 11, 20]);
    let report = CorpusBuilder::new(source).concurrency(5).build().await.unwrap();

    assert_eq!(report.max_id, 20);
    assert_eq!(report.failed_ids(), vec![2, 11, 20]);
    assert_eq!(report.snapshot.len(), 17);
    for (num, error) in &report.failures {
        assert!(report.snapshot.get(&num.to_string()).is_none());
        assert!(matches!(error, FetchError::Status { status: 500, .. }));
    }

    // What is left still loads and resolves
    let index = CorpusIndex::load(report.snapshot).unwrap();
    assert_eq!(index.missing_ids(), vec![2, 11]);
    assert!(index.get_by_id(19).is_some());
}

#[tokio::test]
async fn test_every_id_is_attempted_once() {
    let builder = CorpusBuilder::new(ScriptedSource::with_range(30))
        .placeholder_ids(Vec::<ComicId>::new())
        .concurrency(7);
    builder.build().await.unwrap();

    let source = builder.source();
    assert_eq!(source.requested().iter().filter(|r| r.is_none()).count(), 1);
    assert_eq!(requested_ids(source), (1..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_custom_placeholders_replace_default() {
    let builder = CorpusBuilder::new(ScriptedSource::with_range(10)).placeholder_ids([4, 8]);
    let report = builder.build().await.unwrap();

    assert_eq!(report.placeholders, vec![4, 8]);
    assert_eq!(report.snapshot.get("8"), Some(&placeholder_record(8)));
    let requested: BTreeSet<ComicId> = requested_ids(builder.source()).into_iter().collect();
    assert!(!requested.contains(&4));
    assert!(!requested.contains(&8));
    assert!(requested.contains(&5));
}

#[tokio::test]
async fn test_snapshot_is_sorted_by_id() {
    // A delay makes completion order differ from id order
    let source = ScriptedSource::with_range(25).with_delay(Duration::from_millis(1));
    let report = CorpusBuilder::new(source).concurrency(25).build().await.unwrap();

    let nums: Vec<ComicId> = report.snapshot.iter().map(|(_, record)| record.num).collect();
    let mut sorted = nums.clone();
    sorted.sort_unstable();
    assert_eq!(nums, sorted);
}

#[tokio::test]
async fn test_concurrency_cap_is_respected() {
    for cap in [1, 3, 8] {
        let source = ScriptedSource::with_range(24).with_delay(Duration::from_millis(2));
        let builder = CorpusBuilder::new(source).concurrency(cap);
        builder.build_up_to(24).await.unwrap();
        assert!(
            builder.source().peak_in_flight() <= cap,
            "cap {} exceeded: {}",
            cap,
            builder.source().peak_in_flight()
        );
    }
}

#[tokio::test]
async fn test_zero_concurrency_still_makes_progress() {
    let report = CorpusBuilder::new(ScriptedSource::with_range(3))
        .concurrency(0)
        .build()
        .await
        .unwrap();
    assert_eq!(report.snapshot.len(), 3);
}

#[tokio::test]
async fn test_unknown_latest_is_fatal() {
    let builder = CorpusBuilder::new(ScriptedSource::with_range(3).fail_latest());
    let error = builder.build().await.unwrap_err();
    assert!(matches!(error, BuildError::Latest(FetchError::Status { status: 503, .. })));
    assert!(requested_ids(builder.source()).is_empty());
}

#[tokio::test]
async fn test_build_up_to_skips_latest_lookup() {
    let builder = CorpusBuilder::new(ScriptedSource::with_range(50).fail_latest());
    let report = builder.build_up_to(5).await.unwrap();
    assert_eq!(report.snapshot.len(), 5);
    assert!(builder.source().requested().iter().all(Option::is_some));
}

#[tokio::test]
async fn test_records_for_other_ids_are_rejected() {
    let source = ScriptedSource::with_range(6)
        .answering(3, make_record(0, "Comic 0", "Alt 0"))
        .answering(5, make_record(2, "Comic 5", "Alt 5"));
    let report = CorpusBuilder::new(source).build().await.unwrap();

    let keys: Vec<&str> = report.snapshot.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["1", "2", "4", "6"]);
    assert_eq!(report.failed_ids(), vec![3, 5]);
    assert!(!report.is_complete());
    assert!(matches!(
        report.failures[1].1,
        FetchError::Mismatch { expected: 5, got: 2 }
    ));
    assert_eq!(report.snapshot.get("2").map(|r| r.title.as_str()), Some("Comic 2"));

    // The written snapshot must load
    let index = CorpusIndex::load(report.snapshot).unwrap();
    assert_eq!(index.missing_ids(), vec![3, 5]);
}
