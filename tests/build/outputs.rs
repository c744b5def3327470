//! Files a build leaves on disk.

use mockito::Server;
use tempfile::TempDir;

use super::common::{comic_json, ScriptedSource};
use comicdex::build::audit::audit_file_name;
use comicdex::config::BuildConfig;
use comicdex::{build, CorpusBuilder, CorpusIndex, CorpusSnapshot, SearchService};

#[tokio::test]
async fn test_audit_files_written_per_record() {
    let dir = TempDir::new().unwrap();
    let audit = dir.path().join("comics");
    let source = ScriptedSource::with_range(6).failing([5]);
    CorpusBuilder::new(source)
        .placeholder_ids([4])
        .audit_dir(&audit)
        .build()
        .await
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(audit.join("xkcd_00002.txt")).unwrap(),
        "2\nComic 2\nAlt 2\n"
    );
    // Placeholders get one too, failures don't
    assert_eq!(
        std::fs::read_to_string(audit.join(audit_file_name(4))).unwrap(),
        "4\n4\n\n"
    );
    assert!(!audit.join(audit_file_name(5)).exists());
    assert_eq!(std::fs::read_dir(&audit).unwrap().count(), 5);
}

#[tokio::test]
async fn test_write_snapshot_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("xkcd.json");
    let report = CorpusBuilder::new(ScriptedSource::with_range(12))
        .build()
        .await
        .unwrap();
    report.write_snapshot(&path).unwrap();

    let loaded = CorpusSnapshot::read(&path).unwrap();
    assert_eq!(loaded, report.snapshot);

    let service = SearchService::new(CorpusIndex::open(&path).unwrap());
    assert_eq!(service.search("comic 7")[0], 7);
    assert_eq!(service.search("11")[0], 11);
}

#[tokio::test]
async fn test_run_build_end_to_end() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/info.0.json")
        .with_status(200)
        .with_body(comic_json(3, "Island (sketch)", "Hello, island"))
        .create_async()
        .await;
    for (num, title, alt) in [
        (1, "Barrel - Part 1", "Don't we all."),
        (2, "Pétit Trees (sketch)", "“Petit” being a reference"),
        (3, "Island (sketch)", "Hello, island"),
    ] {
        server
            .mock("GET", format!("/{}/info.0.json", num).as_str())
            .with_status(200)
            .with_body(comic_json(num, title, alt))
            .create_async()
            .await;
    }

    let dir = TempDir::new().unwrap();
    let config = BuildConfig {
        base_url: server.url(),
        concurrency: 2,
        output_dir: dir.path().to_path_buf(),
        ..BuildConfig::default()
    };
    let report = build::run_build(&config).await.unwrap();
    assert!(report.is_complete());

    let snapshot_path = dir.path().join("xkcd.json");
    let json = std::fs::read_to_string(&snapshot_path).unwrap();
    assert!(json.contains("Pétit Trees"));
    assert!(json.contains("“Petit”"));
    assert!(dir.path().join("comics").join("xkcd_00003.txt").exists());

    let index = CorpusIndex::open(&snapshot_path).unwrap();
    let keys: Vec<u32> = index.records().map(|r| r.num).collect();
    assert_eq!(keys, vec![1, 2, 3]);
    assert_eq!(SearchService::new(index).search("petit trees")[0], 2);
}

#[tokio::test]
async fn test_run_build_without_audit() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/1/info.0.json")
        .with_status(200)
        .with_body(comic_json(1, "Barrel - Part 1", "Don't we all."))
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = BuildConfig {
        base_url: server.url(),
        output_dir: dir.path().to_path_buf(),
        max_id: Some(1),
        audit: false,
        ..BuildConfig::default()
    };
    build::run_build(&config).await.unwrap();

    assert!(dir.path().join("xkcd.json").exists());
    assert!(!dir.path().join("comics").exists());
}
