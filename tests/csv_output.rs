use std::fs;

use nurse_kg::infrastructure::{CsvSink, WriteOutcome};
use serde::Serialize;
use tempfile::TempDir;

#[derive(Serialize)]
struct Row {
    name: String,
    score: u8,
    active: bool,
    tags: Vec<&'static str>,
}

#[test]
fn test_header_then_one_line_per_record() {
    let dir = TempDir::new().unwrap();
    let mut sink = CsvSink::new(dir.path()).unwrap();
    let rows = vec![
        Row { name: "Ada".into(), score: 4, active: true, tags: vec!["Alcohol", "Smoking"] },
        Row { name: "Lee, Jr.".into(), score: 2, active: false, tags: vec![] },
    ];

    let outcome = sink.write("people", &rows).unwrap();
    assert_eq!(
        outcome,
        WriteOutcome::Written { path: dir.path().join("people.csv"), rows: 2 }
    );

    let text = fs::read_to_string(dir.path().join("people.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "name,score,active,tags");
    assert_eq!(lines[1], "Ada,4,true,Alcohol|Smoking");
    assert_eq!(lines[2], "\"Lee, Jr.\",2,false,");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_empty_collection_warns_once_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut sink = CsvSink::new(dir.path()).unwrap();

    assert_eq!(sink.write::<Row>("ghosts", &[]).unwrap(), WriteOutcome::SkippedEmpty);
    assert!(!dir.path().join("ghosts.csv").exists());
    assert_eq!(sink.warnings().len(), 1);
    assert!(sink.warnings()[0].contains("ghosts.csv"));
    assert_eq!(sink.entries()[0].file, None);
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("people.csv"), "stale\nstale\nstale\n").unwrap();

    let mut sink = CsvSink::new(dir.path()).unwrap();
    sink.write("people", &[Row { name: "Bo".into(), score: 1, active: true, tags: vec!["None"] }])
        .unwrap();

    let text = fs::read_to_string(dir.path().join("people.csv")).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("stale"));
}
