use std::io;
use std::path::PathBuf;

use ephemeral::{
    DirectoryOptions, Error, root_temporary_directory, temporary_directory,
    temporary_directory_task,
};
use futures::FutureExt;

#[test]
fn directory() {
    let path = temporary_directory(&DirectoryOptions::default()).unwrap();

    assert!(path.starts_with(root_temporary_directory()));
    assert!(path.is_dir());

    std::fs::remove_dir(path).unwrap();
}

#[test]
fn prefix() {
    let path = temporary_directory(&DirectoryOptions::prefix("name_")).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("name_"));
    assert!(path.is_dir());

    std::fs::remove_dir(path).unwrap();
}

#[tokio::test]
async fn task() {
    testify::trace_init();

    let mut seen = PathBuf::new();
    let got = temporary_directory_task(&DirectoryOptions::default(), |path| {
        seen = path.clone();

        async move {
            tokio::fs::create_dir_all(path.join("a/b")).await?;
            tokio::fs::write(path.join("a/b/unicorn"), "unicorn").await?;

            Ok::<_, io::Error>(path)
        }
    })
    .await
    .unwrap();

    assert_eq!(got, seen);
    assert!(!seen.exists());
}

#[tokio::test]
async fn task_cleans_up_when_callback_fails() {
    let mut seen = PathBuf::new();
    let err = temporary_directory_task(&DirectoryOptions::default(), |path| {
        seen = path;

        async move { Err::<(), _>(io::Error::other("Catch me if you can!")) }
    })
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Catch me if you can!");
    assert!(!seen.as_os_str().is_empty());
    assert!(!seen.exists());
}

#[tokio::test]
async fn task_cleans_up_when_callback_panics() {
    let mut seen = PathBuf::new();
    let outcome = std::panic::AssertUnwindSafe(temporary_directory_task(
        &DirectoryOptions::prefix("panic_"),
        |path| {
            seen = path;

            async move {
                if true {
                    panic!("Catch me if you can!");
                }

                Ok::<(), Error>(())
            }
        },
    ))
    .catch_unwind()
    .await;

    assert!(outcome.is_err());
    assert!(!seen.exists());
}
