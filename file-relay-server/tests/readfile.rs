//! Tests which invoke the `readfile` binary like a shell user would.

use std::path::PathBuf;
use std::process::Output;

fn scratch_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("file-relay-cli-{}-{name}", fastrand::u64(..)));
    path
}

async fn run_readfile(args: &[&str]) -> Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_readfile"))
        .args(args)
        .output()
        .await
        .expect("Couldn't spawn readfile")
}

#[tokio::test(flavor = "current_thread")]
async fn prints_existing_file_verbatim() {
    let path = scratch_path("hello.txt");
    tokio::fs::write(&path, "This is a sample demo file.\n")
        .await
        .unwrap();

    let out = run_readfile(&["-f", &path.to_string_lossy()]).await;
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"This is a sample demo file.\n");
    assert!(out.stderr.is_empty());

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn long_flag_is_equivalent() {
    let path = scratch_path("long-flag.txt");
    tokio::fs::write(&path, "no trailing newline").await.unwrap();

    let out = run_readfile(&["--file", &path.to_string_lossy()]).await;
    assert_eq!(out.status.code(), Some(0));
    // Verbatim means no newline gets appended either.
    assert_eq!(out.stdout, b"no trailing newline");

    tokio::fs::remove_file(&path).await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn missing_file_reports_resolved_path_on_stderr() {
    let path = scratch_path("absent.txt");

    let out = run_readfile(&["-f", &path.to_string_lossy()]).await;
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).expect("stderr is text");
    assert!(
        stderr.contains(&*path.to_string_lossy()),
        "stderr should name the resolved path: {stderr}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn relative_path_resolves_against_working_directory() {
    let dir = scratch_path("relative-dir");
    tokio::fs::create_dir(&dir).await.unwrap();

    let out = tokio::process::Command::new(env!("CARGO_BIN_EXE_readfile"))
        .current_dir(&dir)
        .args(["-f", "nope.txt"])
        .output()
        .await
        .expect("Couldn't spawn readfile");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).expect("stderr is text");
    assert!(
        stderr.contains(&*dir.join("nope.txt").to_string_lossy()),
        "stderr should carry the absolute path: {stderr}"
    );

    tokio::fs::remove_dir(&dir).await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn missing_flag_is_a_usage_error() {
    let out = run_readfile(&[]).await;
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_utf8_fails_the_read() {
    let path = scratch_path("binary.bin");
    tokio::fs::write(&path, [0xffu8, 0xfe, 0x00, 0x01])
        .await
        .unwrap();

    let out = run_readfile(&["-f", &path.to_string_lossy()]).await;
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());

    tokio::fs::remove_file(&path).await.unwrap();
}
