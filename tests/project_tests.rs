use predicates::str::contains;

mod common;
use common::{add_work, init_db_with_project, setup_test_db, wl};

#[test]
fn test_project_add_and_list() {
    let db_path = setup_test_db("project_add");
    init_db_with_project(&db_path);

    wl().args([
        "--db", &db_path, "project", "add", "--id", "P200", "--sub", "02", "--title",
        "Maintenance", "--category", "Support",
    ])
    .assert()
    .success()
    .stdout(contains("Added project P200-02"));

    wl().args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("P100-01"))
        .stdout(contains("P200-02"))
        .stdout(contains("Maintenance"));
}

#[test]
fn test_duplicate_project_is_rejected() {
    let db_path = setup_test_db("project_dup");
    init_db_with_project(&db_path);

    wl().args([
        "--db", &db_path, "project", "add", "--id", "P100", "--sub", "01",
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));
}

#[test]
fn test_referenced_project_cannot_be_deleted() {
    let db_path = setup_test_db("project_refcount");
    init_db_with_project(&db_path);

    add_work(&db_path, "2025-09-01", "4");

    wl().args(["--db", &db_path, "project", "del", "P100-01"])
        .assert()
        .failure()
        .stderr(contains("referenced by 1 entries"));

    // delete the entry, then the project goes away cleanly
    wl().args(["--db", &db_path, "del", "2025-09-01", "--entry", "1"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "project", "del", "P100-01"])
        .assert()
        .success()
        .stdout(contains("Deleted project P100-01"));
}

#[test]
fn test_usage_count_tracks_entries() {
    let db_path = setup_test_db("project_usage");
    init_db_with_project(&db_path);

    add_work(&db_path, "2025-09-01", "4");
    add_work(&db_path, "2025-09-02", "4");

    wl().args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("2"));

    wl().args(["--db", &db_path, "del", "2025-09-01", "--entry", "1"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "list", "--projects"])
        .assert()
        .success()
        .stdout(contains("P100-01"));
}

#[test]
fn test_archived_project_cannot_be_booked() {
    let db_path = setup_test_db("project_archive");
    init_db_with_project(&db_path);

    wl().args(["--db", &db_path, "project", "archive", "P100-01"])
        .assert()
        .success()
        .stdout(contains("Archived project P100-01"));

    wl().args([
        "--db", &db_path, "add", "2025-09-01", "--type", "work", "--project", "P100-01",
        "--hours", "4",
    ])
    .assert()
    .failure()
    .stderr(contains("archived"));

    wl().args(["--db", &db_path, "project", "restore", "P100-01"])
        .assert()
        .success();

    add_work(&db_path, "2025-09-01", "4");
}
