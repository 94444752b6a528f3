use super::*;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("kalyanam-storage-{}", uuid::Uuid::new_v4()))
}

// =============================================================================
// naming
// =============================================================================

#[test]
fn object_name_keeps_extension_and_timestamp() {
    let name = object_name("IMG_2041.JPG", 1_747_000_000_000);
    assert!(name.starts_with("1747000000000-"), "{name}");
    assert!(name.ends_with(".jpg"), "{name}");
    assert_eq!(object_timestamp(&name), Some(1_747_000_000_000));
}

#[test]
fn object_name_is_unique_per_call() {
    let a = object_name("a.png", 1);
    let b = object_name("a.png", 1);
    assert_ne!(a, b);
}

#[test]
fn object_name_without_usable_extension_has_none() {
    assert!(!object_name("photo", 5).contains('.'));
    assert!(!object_name(".hidden", 5).contains('.'));
    assert!(!object_name("weird.j/pg", 5).contains('.'));
}

#[test]
fn object_timestamp_rejects_foreign_names() {
    assert_eq!(object_timestamp("cover.jpg"), None);
    assert_eq!(object_timestamp("abc-def.jpg"), None);
}

#[test]
fn validate_name_rejects_traversal() {
    for bad in ["", "../etc/passwd", "a/b.jpg", "a\\b.jpg", ".env"] {
        assert!(matches!(validate_name(bad), Err(ObjectStoreError::InvalidName(_))), "{bad:?}");
    }
    assert!(validate_name("1-abc.jpg").is_ok());
}

// =============================================================================
// disk store
// =============================================================================

#[tokio::test]
async fn disk_store_put_list_remove() {
    let dir = temp_dir();
    let store = DiskStore::open(dir.clone()).await.unwrap();

    store.put("1-a.jpg", b"jpeg").await.unwrap();
    store.put("2-b.png", b"png").await.unwrap();
    assert_eq!(store.list().await.unwrap(), vec!["1-a.jpg".to_owned(), "2-b.png".to_owned()]);
    assert_eq!(tokio::fs::read(dir.join("1-a.jpg")).await.unwrap(), b"jpeg");

    store.remove("1-a.jpg").await.unwrap();
    assert_eq!(store.list().await.unwrap(), vec!["2-b.png".to_owned()]);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn disk_store_put_never_overwrites() {
    let dir = temp_dir();
    let store = DiskStore::open(dir.clone()).await.unwrap();

    store.put("1-a.jpg", b"first").await.unwrap();
    let err = store.put("1-a.jpg", b"second").await.unwrap_err();
    assert!(matches!(err, ObjectStoreError::Exists(_)));
    assert_eq!(tokio::fs::read(dir.join("1-a.jpg")).await.unwrap(), b"first");

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn disk_store_remove_missing_is_ok() {
    let dir = temp_dir();
    let store = DiskStore::open(dir.clone()).await.unwrap();
    assert!(store.remove("404-gone.jpg").await.is_ok());
    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn disk_store_rejects_path_escape() {
    let dir = temp_dir();
    let store = DiskStore::open(dir.clone()).await.unwrap();
    assert!(matches!(store.put("../escape.jpg", b"x").await, Err(ObjectStoreError::InvalidName(_))));
    let _ = tokio::fs::remove_dir_all(&dir).await;
}
