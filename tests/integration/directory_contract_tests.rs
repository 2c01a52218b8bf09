//! The same directory contract checked against every bundled directory
use backend_lib::directory::{DirectoryError, FlatFileDirectory, InMemoryDirectory, UserDirectory};
use tempfile::TempDir;

async fn check_contract<D: UserDirectory>(dir: &D) {
    assert!(dir.find_by_email("a@b.com").await.unwrap().is_empty());

    let a = dir.create("a@b.com", "00.11").await.unwrap();
    let c = dir.create("c@d.com", "22.33").await.unwrap();
    assert_ne!(a.id, c.id);
    assert_eq!(a.email, "a@b.com");
    assert_eq!(a.password, "00.11");

    assert_eq!(dir.find_by_email("a@b.com").await.unwrap(), vec![a.clone()]);
    assert_eq!(dir.find_by_email("c@d.com").await.unwrap(), vec![c]);

    // lookups are exact, not case-folded or prefix-matched
    assert!(dir.find_by_email("A@B.COM").await.unwrap().is_empty());
    assert!(dir.find_by_email("a@b").await.unwrap().is_empty());

    assert!(matches!(
        dir.create("a@b.com", "44.55").await,
        Err(DirectoryError::DuplicateEmail { .. })
    ));
    assert_eq!(dir.find_by_email("a@b.com").await.unwrap(), vec![a]);
}

#[tokio::test]
async fn test_in_memory_directory_contract() {
    check_contract(&InMemoryDirectory::new()).await;
}

#[tokio::test]
async fn test_flat_file_directory_contract() {
    let temp_dir = TempDir::new().unwrap();
    check_contract(&FlatFileDirectory::new(temp_dir.path()).unwrap()).await;
}

#[tokio::test]
async fn test_flat_file_concurrent_creates_get_distinct_ids() {
    let temp_dir = TempDir::new().unwrap();
    let dir = FlatFileDirectory::new(temp_dir.path()).unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let dir = dir.clone();
        handles.push(tokio::spawn(async move {
            dir.create(&format!("user{i}@b.com"), "aa.bb").await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}
