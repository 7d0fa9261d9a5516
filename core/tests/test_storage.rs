use std::fs;

use workout_core::{load_packages, run_batch, ErrorPolicy, Metrics, Package, WorkoutError};

#[test]
fn test_load_batch_from_disk() {
    let path = "tests/tmp_batch.json";

    // Sørg for ren start (slett hvis filen finnes)
    let _ = fs::remove_file(path);

    let json = r#"[
        {"workout_type": "RUN", "data": [15000, 1, 75]},
        ["SWM", [720, 1, 80, 25, 40]],
        {"workout_type": "WLK", "data": [9000, 0, 75, 180]}
    ]"#;
    fs::write(path, json).expect("write batch");

    let packages = load_packages(path).expect("load_packages failed");
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[1], Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]));

    let metrics = Metrics::new().unwrap();
    let out = run_batch(&packages, ErrorPolicy::Skip, &metrics);
    assert_eq!(out.succeeded().count(), 2);
    assert_eq!(metrics.failed_count("division_by_zero"), 1);

    // Clean up
    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_packages("tests/does_not_exist.json").unwrap_err();
    assert!(matches!(err, WorkoutError::Io(_)));
}

#[test]
fn test_bad_json_is_parse_error() {
    let path = "tests/tmp_bad_batch.json";
    fs::write(path, r#"{"workout_type": "RUN"}"#).expect("write batch");

    let err = load_packages(path).unwrap_err();
    let _ = fs::remove_file(path);

    match err {
        WorkoutError::Parse { message, .. } => assert!(!message.is_empty()),
        other => panic!("unexpected {other:?}"),
    }
}
