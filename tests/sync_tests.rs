use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add_work, init_db_with_project, setup_remote_root, setup_test_db, wl};

fn count_docs(root: &str, user: &str, collection: &str) -> usize {
    let dir = Path::new(root).join(user).join(collection);
    if !dir.is_dir() {
        return 0;
    }
    fs::read_dir(dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .map(|x| x == "json")
                .unwrap_or(false)
        })
        .count()
}

#[test]
fn test_guest_mode_stays_local() {
    let db_path = setup_test_db("sync_guest");
    init_db_with_project(&db_path);

    wl().args(["--db", &db_path, "sync"])
        .assert()
        .success()
        .stdout(contains("Guest mode"))
        .stdout(contains("Sync status: local"));

    wl().args(["--db", &db_path, "sync", "--status"])
        .assert()
        .success()
        .stdout(contains("local"));
}

#[test]
fn test_push_mirrors_and_never_duplicates() {
    let db_path = setup_test_db("sync_push");
    let remote = setup_remote_root("sync_push");
    init_db_with_project(&db_path);

    add_work(&db_path, "2025-09-01", "6");
    add_work(&db_path, "2025-09-02", "4");

    let sync = ["--db", &db_path, "--remote", &remote, "--user", "alice", "sync"];

    wl().args(sync).assert().success().stdout(contains(
        "Pushed 2 entries and 1 projects.",
    ));

    assert_eq!(count_docs(&remote, "alice", "worklogs"), 2);
    assert_eq!(count_docs(&remote, "alice", "projects"), 1);

    // pushing again must not create duplicate documents
    wl().args(sync).assert().success();
    assert_eq!(count_docs(&remote, "alice", "worklogs"), 2);
    assert_eq!(count_docs(&remote, "alice", "projects"), 1);
}

#[test]
fn test_push_prunes_deleted_entries() {
    let db_path = setup_test_db("sync_prune");
    let remote = setup_remote_root("sync_prune");
    init_db_with_project(&db_path);

    add_work(&db_path, "2025-09-01", "6");
    add_work(&db_path, "2025-09-02", "4");

    wl().args(["--db", &db_path, "--remote", &remote, "--user", "alice", "sync"])
        .assert()
        .success();
    assert_eq!(count_docs(&remote, "alice", "worklogs"), 2);

    wl().args(["--db", &db_path, "del", "2025-09-01", "--entry", "1"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "--remote", &remote, "--user", "alice", "sync"])
        .assert()
        .success();
    assert_eq!(count_docs(&remote, "alice", "worklogs"), 1);
}

#[test]
fn test_offline_push_keeps_pending_then_recovers() {
    let db_path = setup_test_db("sync_offline");
    init_db_with_project(&db_path);
    add_work(&db_path, "2025-09-01", "6");

    // unreachable remote root: the push fails softly and keeps the dirty flag
    let missing = format!("{}/does-not-exist", std::env::temp_dir().display());
    wl().args(["--db", &db_path, "--remote", &missing, "--user", "alice", "sync"])
        .assert()
        .success()
        .stdout(contains("changes kept pending"))
        .stdout(contains("Sync status: error"));

    wl().args(["--db", &db_path, "--remote", &missing, "--user", "alice", "sync", "--status"])
        .assert()
        .success()
        .stdout(contains("Pending changes:  yes"));

    // remote comes back: the retry replays everything without loss
    let remote = setup_remote_root("sync_offline");
    wl().args(["--db", &db_path, "--remote", &remote, "--user", "alice", "sync"])
        .assert()
        .success()
        .stdout(contains("Pushed 1 entries and 1 projects."));

    assert_eq!(count_docs(&remote, "alice", "worklogs"), 1);

    wl().args(["--db", &db_path, "--remote", &remote, "--user", "alice", "sync", "--status"])
        .assert()
        .success()
        .stdout(contains("Pending changes:  no"))
        .stdout(contains("synced"));
}

#[test]
fn test_pull_replaces_local_mirror() {
    let db1 = setup_test_db("sync_pull_src");
    let db2 = setup_test_db("sync_pull_dst");
    let remote = setup_remote_root("sync_pull");

    init_db_with_project(&db1);
    add_work(&db1, "2025-09-01", "6");

    wl().args(["--db", &db1, "--remote", &remote, "--user", "alice", "sync"])
        .assert()
        .success();

    // a second device pulls the same account
    wl().args(["--db", &db2, "--test", "init"]).assert().success();
    wl().args(["--db", &db2, "--remote", &remote, "--user", "alice", "sync", "--pull"])
        .assert()
        .success()
        .stdout(contains("Pulled 1 entries and 1 projects."));

    wl().args(["--db", &db2, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("P100-01"));

    // usage counters are rebuilt from the pulled entries
    wl().args(["--db", &db2, "project", "del", "P100-01"])
        .assert()
        .failure()
        .stderr(contains("referenced by 1 entries"));
}

#[test]
fn test_pull_with_unreachable_remote_falls_back_to_local() {
    let db_path = setup_test_db("sync_pull_offline");
    init_db_with_project(&db_path);
    add_work(&db_path, "2025-09-01", "6");

    let missing = format!("{}/also-missing", std::env::temp_dir().display());
    wl().args(["--db", &db_path, "--remote", &missing, "--user", "alice", "sync", "--pull"])
        .assert()
        .success()
        .stdout(contains("using local data"))
        .stdout(contains("Sync status: error"));

    // local data survived the failed pull
    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}
