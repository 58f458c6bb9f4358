//! Integration Tests — Collection Store Persistence
//!
//! Exercises the full store against real temp directories: seeding,
//! repair, atomic-write crash safety, and append ordering.

use tempfile::TempDir;

use tribute_api::domain::records::Wish;
use tribute_api::store::CollectionStore;

#[tokio::test]
async fn test_fresh_store_seeds_all_collections() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());
    store.initialize().await;

    assert_eq!(store.wishes.read().await.len(), 3);
    assert_eq!(store.pledges.read().await.len(), 83);
    assert!(store.nominations.read().await.is_empty());
    assert!(store.postcards.read().await.is_empty());

    for name in ["wishes", "pledges", "nominations", "postcards"] {
        assert!(
            dir.path().join(format!("{name}.json")).exists(),
            "{name}.json should exist after initialize"
        );
    }
}

#[tokio::test]
async fn test_reads_are_idempotent_after_seeding() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());

    let first = store.wishes.read().await;
    let second = store.wishes.read().await;
    assert_eq!(first, second, "repeated reads with no writes must match");
}

#[tokio::test]
async fn test_deleted_file_is_bootstrapped_again() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());
    store.initialize().await;

    let path = dir.path().join("wishes.json");
    std::fs::remove_file(&path).unwrap();

    let records = store.wishes.read().await;
    assert_eq!(records.len(), 3);
    assert!(path.exists(), "read must recreate the backing file");
}

#[tokio::test]
async fn test_corrupt_wishes_file_is_replaced_with_seed() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());
    store.initialize().await;

    // Real user content, then corruption.
    store
        .wishes
        .append(Wish::new("Hello".into()))
        .await
        .unwrap();
    let path = dir.path().join("wishes.json");
    std::fs::write(&path, b"\x00\x01 not json").unwrap();

    let records = store.wishes.read().await;
    assert_eq!(records.len(), 3, "corrupt content is replaced, not merged");

    let on_disk: Vec<Wish> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, records);
}

#[tokio::test]
async fn test_unreadable_file_degrades_to_seed_without_touching_disk() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());

    // A directory at the backing path makes the read fail with a
    // non-NotFound error: degrade to seeds, leave the path alone.
    let path = dir.path().join("wishes.json");
    std::fs::create_dir(&path).unwrap();

    let records = store.wishes.read().await;
    assert_eq!(records.len(), 3, "degraded read returns the seed set");
    assert!(path.is_dir(), "degraded read must not touch the path");
}

#[tokio::test]
async fn test_uncreatable_data_dir_degrades_to_seed() {
    let dir = TempDir::new().unwrap();

    // A file where the data directory should go makes create_dir_all
    // fail; reads still serve the in-memory seed set.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let store = CollectionStore::new(&blocker.join("data"));

    let records = store.wishes.read().await;
    assert_eq!(records.len(), 3);
    assert!(!blocker.join("data").exists(), "nothing was written on disk");
}

#[tokio::test]
async fn test_interrupted_write_leaves_file_valid() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());

    let original = vec![Wish::new("survives".into())];
    store.wishes.write(&original).await.unwrap();

    // A crash between temp-write and rename leaves only a stale .tmp.
    std::fs::write(dir.path().join("wishes.json.tmp"), b"half-writt").unwrap();

    assert_eq!(store.wishes.read().await, original);
}

#[tokio::test]
async fn test_append_order_is_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());
    store.wishes.write(&[]).await.unwrap();

    for message in ["A", "B", "C"] {
        store.wishes.append(Wish::new(message.into())).await.unwrap();
    }

    let messages: Vec<String> = store
        .wishes
        .read()
        .await
        .into_iter()
        .map(|w| w.message)
        .collect();
    assert_eq!(messages, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_pretty_printed_on_disk_format() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());
    store.wishes.write(&[Wish::new("hi".into())]).await.unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join("wishes.json")).unwrap();
    assert!(on_disk.starts_with("[\n"), "expected a pretty-printed array");
    assert!(on_disk.contains("  {"), "expected 2-space indentation");
}

#[tokio::test]
async fn test_store_reports_healthy_in_writable_dir() {
    let dir = TempDir::new().unwrap();
    let store = CollectionStore::new(dir.path());
    store.initialize().await;

    assert!(store.is_healthy().await);
}
