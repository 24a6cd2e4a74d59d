use std::collections::HashSet;

use ephemeral::{DirectoryOptions, FileOptions, temporary_directory, temporary_file};

const CONCURRENCY: usize = 1000;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_files_are_unique() {
    let tasks = (0..CONCURRENCY)
        .map(|_| tokio::spawn(async { temporary_file(&FileOptions::default()).unwrap() }))
        .collect::<Vec<_>>();

    let mut paths = HashSet::with_capacity(CONCURRENCY);
    for task in tasks {
        assert!(paths.insert(task.await.unwrap()));
    }

    assert_eq!(paths.len(), CONCURRENCY);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_directories_are_unique() {
    let tasks = (0..CONCURRENCY)
        .map(|_| {
            tokio::spawn(async { temporary_directory(&DirectoryOptions::prefix("unique_")).unwrap() })
        })
        .collect::<Vec<_>>();

    let mut paths = HashSet::with_capacity(CONCURRENCY);
    for task in tasks {
        assert!(paths.insert(task.await.unwrap()));
    }

    assert_eq!(paths.len(), CONCURRENCY);

    for path in paths {
        std::fs::remove_dir(path).unwrap();
    }
}
