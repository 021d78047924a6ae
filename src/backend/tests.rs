use std::collections::BTreeMap;

use mocks::{IoEvent, TEST_UID, TestBackendIo};

use super::*;
use crate::config::AppConfig;


#[tokio::test]
async fn fs_read_absent_key_is_none() {
    let backend = FsBackendImpl::new_internal("/data", TestBackendIo::new());
    let value = backend.read("notes-guest_123").await
        .expect("read failed");
    assert_eq!(value, None);
}

#[tokio::test]
async fn fs_read_existing_key() {
    let io = TestBackendIo::new()
        .with_file("/data/notes-guest_123.json", "[]");
    let backend = FsBackendImpl::new_internal("/data", io);
    let value = backend.read("notes-guest_123").await
        .expect("read failed");
    assert_eq!(value.as_deref(), Some("[]"));
}

#[tokio::test]
async fn fs_read_error_is_surfaced() {
    let io = TestBackendIo::new();
    io.fail_reads(true);
    let backend = FsBackendImpl::new_internal("/data", io);
    let err = backend.read("notes-guest_123").await
        .expect_err("should fail");
    assert!(matches!(err, BackendError::Io(_)), "wrong error: {err:#?}");
}

#[tokio::test]
async fn fs_write_creates_dir_then_replaces_through_tmp() {
    let backend = FsBackendImpl::new_internal("/data", TestBackendIo::new());
    backend.write("notes-guest_123", "[]").await.expect("write failed");

    let events = backend.io.events();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        IoEvent::CreateDir { path: "/data".into() },
    );
    let tmp_path = match &events[1] {
        IoEvent::Write { path, data } => {
            assert!(
                path.to_str().unwrap()
                    .starts_with("/data/notes-guest_123.json.tmp."),
                "unexpected tmp path {path:?}",
            );
            assert_eq!(data, b"[]");
            path.clone()
        }
        other => panic!("not a write event: {other:?}"),
    };
    assert_eq!(
        events[2],
        IoEvent::Rename {
            from: tmp_path,
            to: "/data/notes-guest_123.json".into(),
        },
    );
    assert_eq!(
        backend.io.file("/data/notes-guest_123.json").as_deref(),
        Some("[]"),
    );
}

#[tokio::test]
async fn fs_write_rename_failure_removes_tmp_file() {
    let io = TestBackendIo::new();
    io.fail_renames(true);
    let backend = FsBackendImpl::new_internal("/data", io);
    backend.write("notes-guest_123", "[]").await
        .expect_err("should fail");

    let events = backend.io.events();
    assert_eq!(events.len(), 4);
    assert!(matches!(events[1], IoEvent::Write { .. }));
    assert!(matches!(events[2], IoEvent::Rename { .. }));
    let removed = match &events[3] {
        IoEvent::Remove { path } => path,
        other => panic!("not a remove event: {other:?}"),
    };
    assert_eq!(backend.io.file(removed), None);
    assert_eq!(backend.io.file("/data/notes-guest_123.json"), None);
}

#[tokio::test]
async fn kv_read_missing_state_file_is_none() {
    let backend =
        KvBackendImpl::new_internal("/state.json", TestBackendIo::new());
    let value = backend.read("local_user").await.expect("read failed");
    assert_eq!(value, None);
}

#[tokio::test]
async fn kv_write_preserves_other_keys() {
    let io = TestBackendIo::new()
        .with_file("/state.json", r#"{"local_user":"{}"}"#);
    let backend = KvBackendImpl::new_internal("/state.json", io);
    backend.write("notes-guest_123", "[]").await.expect("write failed");

    let state: BTreeMap<String, String> = serde_json::from_str(
        &backend.io.file("/state.json").expect("state file missing"),
    ).expect("state file unparseable");
    assert_eq!(state.get("local_user").map(String::as_str), Some("{}"));
    assert_eq!(state.get("notes-guest_123").map(String::as_str), Some("[]"));

    let value = backend.read("notes-guest_123").await.expect("read failed");
    assert_eq!(value.as_deref(), Some("[]"));
}

#[tokio::test]
async fn kv_corrupt_state_file_is_an_error() {
    let io = TestBackendIo::new().with_file("/state.json", "not json");
    let backend = KvBackendImpl::new_internal("/state.json", io);
    let err = backend.read("local_user").await.expect_err("should fail");
    assert!(
        matches!(err, BackendError::Corrupted(_)),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn kv_write_creates_parent_dir() {
    let backend = KvBackendImpl::new_internal(
        "/var/pocketnotes/state.json",
        TestBackendIo::new(),
    );
    backend.write("local_user", "{}").await.expect("write failed");
    assert!(
        backend.io.events().contains(
            &IoEvent::CreateDir { path: "/var/pocketnotes".into() }
        )
    );
}

#[tokio::test]
async fn secure_creates_private_dir_when_missing() {
    let backend =
        SecureBackendImpl::new_internal("/secure", TestBackendIo::new())
            .await
            .expect("backend creation failed");
    assert_eq!(
        backend.io.events(),
        vec![IoEvent::CreatePrivateDir { path: "/secure".into() }],
    );
}

#[tokio::test]
async fn secure_accepts_owned_private_dir() {
    let io = TestBackendIo::new().with_dir(
        "/secure",
        Metadata { is_dir: true, uid: TEST_UID, mode: 0o700 },
    );
    SecureBackendImpl::new_internal("/secure", io).await
        .expect("backend creation failed");
}

#[tokio::test]
async fn secure_rejects_foreign_owner() {
    let io = TestBackendIo::new().with_dir(
        "/secure",
        Metadata { is_dir: true, uid: TEST_UID + 1, mode: 0o700 },
    );
    let err = SecureBackendImpl::new_internal("/secure", io).await
        .expect_err("should fail");
    assert!(
        matches!(err, BackendError::Permission),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn secure_rejects_group_accessible_dir() {
    let io = TestBackendIo::new().with_dir(
        "/secure",
        Metadata { is_dir: true, uid: TEST_UID, mode: 0o750 },
    );
    let err = SecureBackendImpl::new_internal("/secure", io).await
        .expect_err("should fail");
    assert!(
        matches!(err, BackendError::Permission),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn secure_rejects_plain_file_at_root() {
    let io = TestBackendIo::new().with_file("/secure", "");
    let err = SecureBackendImpl::new_internal("/secure", io).await
        .expect_err("should fail");
    assert!(
        matches!(err, BackendError::NotADirectory),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn secure_write_then_read() {
    let backend =
        SecureBackendImpl::new_internal("/secure", TestBackendIo::new())
            .await
            .expect("backend creation failed");
    backend.write("local_user", "{}").await.expect("write failed");
    let value = backend.read("local_user").await.expect("read failed");
    assert_eq!(value.as_deref(), Some("{}"));
    assert_eq!(backend.io.file("/secure/local_user.json").as_deref(), Some("{}"));
}

#[test]
fn platform_detection_follows_config_data_dir() {
    let config = AppConfig::default();
    assert_eq!(
        Platform::detect(&config),
        Platform::Native { data_dir: config.data_directory.clone() },
    );

    let no_fs_root = AppConfig { data_directory: None, ..config };
    assert_eq!(
        Platform::detect(&no_fs_root),
        Platform::Native { data_dir: None },
    );
}
