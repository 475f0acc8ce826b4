use std::collections::HashSet;

use nurse_kg::data_seeder::workforce::{FEEDBACK_FRACTION, SUPERVISOR_FRACTION};
use nurse_kg::data_seeder::WorkforceSeeder;
use nurse_kg::{run_workforce, WorkforceConfig};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn test_tables_reference_roster_nurses() {
    let mut seeder = WorkforceSeeder::new(Some(42)).unwrap();
    let dataset = seeder.generate(25, 5);

    assert_eq!(dataset.nurses.len(), 25);
    let roster: HashSet<_> = dataset.nurses.iter().map(|n| n.nurse_id.as_str()).collect();

    assert!(dataset.shifts.iter().all(|s| roster.contains(s.nurse_id.as_str())));
    assert!(dataset.health.iter().all(|h| roster.contains(h.nurse_id.as_str())));
    assert!(dataset.training.iter().all(|t| roster.contains(t.nurse_id.as_str())));
    assert_eq!(dataset.pay.len(), 25);
    assert_eq!(dataset.telehealth.len(), 25);
    assert_eq!(dataset.practice_multistate.len(), 25);

    let expected_feedback = (dataset.shifts.len() as f64 * FEEDBACK_FRACTION).round_ties_even() as usize;
    assert_eq!(dataset.nurses_feedback.len(), expected_feedback);
    let expected_supervised =
        (dataset.nurses_feedback.len() as f64 * SUPERVISOR_FRACTION).round_ties_even() as usize;
    assert_eq!(dataset.supervisors_feedback.len(), expected_supervised);

    for row in &dataset.supervisors_feedback {
        let number: usize = row.supervisor_id.trim_start_matches("SUP").parse().unwrap();
        assert!((1..=5).contains(&number));
    }
    for practice in &dataset.practice_multistate {
        if !practice.multistate_license {
            assert!(!practice.used_multistate_license);
        }
        assert_eq!(practice.purpose.is_empty(), !practice.used_multistate_license);
    }
    for record in &dataset.telehealth {
        assert_eq!(record.mode.is_empty(), !record.used_telehealth);
    }
}

#[test]
fn test_no_supervisors_skips_supervisor_file() {
    let dir = TempDir::new().unwrap();
    let config = WorkforceConfig {
        nurses: 12,
        supervisors: 0,
        output_dir: dir.path().to_path_buf(),
        seed: Some(7),
    };

    let report = run_workforce(&config).unwrap();
    assert_eq!(report.files_written(), 8);
    assert_eq!(report.warnings.len(), 1);
    assert!(!dir.path().join("supervisors_feedback.csv").exists());

    let feedback = std::fs::read_to_string(dir.path().join("nurses_feedback.csv")).unwrap();
    let header = feedback.lines().next().unwrap();
    assert!(header.starts_with("shift_id,nurse_id,date,unit"));
    assert!(header.contains("feedback_id"));

    let manifest: Value =
        serde_json::from_str(&std::fs::read_to_string(&report.manifest_path).unwrap()).unwrap();
    assert_eq!(manifest["dataset"], "workforce");
    assert_eq!(manifest["config"]["supervisors"], 0);
    assert_eq!(manifest["seed"], 7);
}
