use predicates::str::contains;
use std::fs;

mod common;
use common::{add_work, init_db_with_project, setup_test_db, temp_out, wl};

#[test]
fn test_csv_export_fixed_columns() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_project(&db_path);

    add_work(&db_path, "2025-09-01", "6");
    wl().args([
        "--db", &db_path, "add", "2025-09-02", "--type", "half-leave", "--period", "pm",
    ])
    .assert()
    .success();

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Day,Type,Project,Category,Hours,Period,Comments,Timestamp"
    );
    assert!(content.contains("2025-09-01,Monday,Work,P100-01,Development,6,"));
    assert!(content.contains("2025-09-02,Tuesday,Half Leave,,,4,PM,"));
}

#[test]
fn test_csv_export_range_filter() {
    let db_path = setup_test_db("export_csv_range");
    let out = temp_out("export_csv_range", "csv");
    init_db_with_project(&db_path);

    add_work(&db_path, "2025-08-29", "8");
    add_work(&db_path, "2025-09-01", "8");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-09",
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-08-29"));
}

#[test]
fn test_json_backup_round_trip() {
    let db1 = setup_test_db("backup_src");
    let db2 = setup_test_db("backup_dst");
    let out = temp_out("backup_envelope", "json");

    init_db_with_project(&db1);
    add_work(&db1, "2025-09-01", "6");
    wl().args(["--db", &db1, "add", "2025-09-02", "--type", "holiday"])
        .assert()
        .success();

    wl().args([
        "--db", &db1, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success();

    // the envelope is versioned and groups entries by date
    let content = fs::read_to_string(&out).expect("read envelope");
    assert!(content.contains("\"version\": 1"));
    assert!(content.contains("\"workLogData\""));
    assert!(content.contains("\"projectData\""));
    assert!(content.contains("\"exportDate\""));

    wl().args(["--db", &db2, "--test", "init"]).assert().success();
    wl().args(["--db", &db2, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries and 1 projects"));

    wl().args(["--db", &db2, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("Holiday"))
        .stdout(contains("2 entries"));
}

#[test]
fn test_import_rejects_unknown_version() {
    let db_path = setup_test_db("import_bad_version");
    let out = temp_out("bad_version", "json");
    init_db_with_project(&db_path);

    fs::write(
        &out,
        r#"{"version": 99, "exportDate": "2025-09-01T00:00:00+00:00",
            "workLogData": {}, "projectData": [],
            "metadata": {"entryCount": 0, "projectCount": 0}}"#,
    )
    .unwrap();

    wl().args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Unsupported backup version: 99"));
}

#[test]
fn test_import_rejects_rule_violations() {
    let db_path = setup_test_db("import_bad_rules");
    let out = temp_out("bad_rules", "json");
    init_db_with_project(&db_path);

    // two full-day entries on the same date can never be valid
    fs::write(
        &out,
        r#"{"version": 1, "exportDate": "2025-09-01T00:00:00+00:00",
            "workLogData": {"2025-09-01": [
                {"id": "a1", "date": "2025-09-01", "type": "holiday", "project": null,
                 "hours": 8.0, "halfDayPeriod": null, "comments": "", "createdAt": "x"},
                {"id": "a2", "date": "2025-09-01", "type": "full-leave", "project": null,
                 "hours": 8.0, "halfDayPeriod": null, "comments": "", "createdAt": "x"}
            ]},
            "projectData": [],
            "metadata": {"entryCount": 2, "projectCount": 0}}"#,
    )
    .unwrap();

    wl().args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Import error"));

    // the bad import must not have touched local data (project still there)
    wl().args(["--db", &db_path, "list", "--projects"])
        .assert()
        .success()
        .stdout(contains("P100-01"));
}

#[test]
fn test_import_rejects_unknown_project() {
    let db_path = setup_test_db("import_ghost_project");
    let out = temp_out("ghost_project", "json");
    init_db_with_project(&db_path);

    // work entry booked against a project the envelope does not carry
    fs::write(
        &out,
        r#"{"version": 1, "exportDate": "2025-09-01T00:00:00+00:00",
            "workLogData": {"2025-09-01": [
                {"id": "a1", "date": "2025-09-01", "type": "work", "project": "GHOST-99",
                 "hours": 6.0, "halfDayPeriod": null, "comments": "", "createdAt": "x"}
            ]},
            "projectData": [],
            "metadata": {"entryCount": 1, "projectCount": 0}}"#,
    )
    .unwrap();

    wl().args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("unknown project GHOST-99"));

    // local data untouched
    wl().args(["--db", &db_path, "list", "--projects"])
        .assert()
        .success()
        .stdout(contains("P100-01"));
}

#[test]
fn test_import_keeps_archived_project_history() {
    let db_path = setup_test_db("import_archived_history");
    let out = temp_out("archived_history", "json");
    init_db_with_project(&db_path);

    // an archived project with a historical entry must still restore;
    // only new bookings against it are blocked
    fs::write(
        &out,
        r#"{"version": 1, "exportDate": "2025-09-01T00:00:00+00:00",
            "workLogData": {"2025-09-01": [
                {"id": "a1", "date": "2025-09-01", "type": "work", "project": "OLD-01",
                 "hours": 6.0, "halfDayPeriod": null, "comments": "", "createdAt": "x"}
            ]},
            "projectData": [
                {"id": "p1", "projectId": "OLD", "subCode": "01",
                 "projectTitle": "Legacy", "category": "Ops", "isActive": false,
                 "usageCount": 1, "createdAt": "x", "updatedAt": "x"}
            ],
            "metadata": {"entryCount": 1, "projectCount": 1}}"#,
    )
    .unwrap();

    wl().args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 1 entries and 1 projects"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));

    wl().args([
        "--db", &db_path, "add", "2025-09-02", "--type", "work", "--project", "OLD-01",
        "--hours", "2",
    ])
    .assert()
    .failure()
    .stderr(contains("archived"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_project(&db_path);

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2020",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("No entries found"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");
    init_db_with_project(&db_path);
    add_work(&db_path, "2025-09-01", "6");

    wl().args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&out).unwrap().len() > 0);
}
