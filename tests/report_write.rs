use etcd_perf_report::model::PerfReport;
use etcd_perf_report::report;

#[test]
fn writes_report_under_artifacts_dir() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("artifacts");

    let doc = report::build_report(&[0.010, 0.020, 0.030]);
    let path = report::write_report(&doc, &target).unwrap();

    assert!(path.starts_with(&target));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("etcd_perf_"));
    assert!(name.ends_with(".json"));

    let body = std::fs::read_to_string(&path).unwrap();
    // 2-space indented JSON
    assert!(body.starts_with("{\n  \"version\""));

    let parsed: PerfReport = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.version, "v1");
    assert_eq!(parsed.data_items.len(), 1);
    assert_eq!(parsed.data_items[0].labels.metric, "APIResponsiveness");
    assert_eq!(parsed.data_items[0].unit, "ms");
}

#[test]
fn two_runs_over_same_samples_agree() {
    let samples = vec![0.004, 0.120, 0.033, 0.033, 0.0071];
    let dir = tempfile::tempdir().unwrap();

    let first = report::write_report(&report::build_report(&samples), &dir.path().join("a")).unwrap();
    let second = report::write_report(&report::build_report(&samples), &dir.path().join("b")).unwrap();

    let a: PerfReport = serde_json::from_slice(&std::fs::read(first).unwrap()).unwrap();
    let b: PerfReport = serde_json::from_slice(&std::fs::read(second).unwrap()).unwrap();
    assert_eq!(a.data_items[0].data, b.data_items[0].data);
}

#[test]
fn directory_collision_is_an_error_value_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("artifacts");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let doc = report::build_report(&[0.010]);
    let err = report::write_report(&doc, &blocker).unwrap_err();
    assert!(format!("{err:#}").contains("write perf report"));

    // The colliding file is left as it was.
    assert_eq!(std::fs::read(&blocker).unwrap(), b"not a directory");
}
