use std::ffi::OsStr;
use std::process::{Command, Output};

use rhid_mock::{MockRhid, Replies, StatusCode};

const SUCCESS_LINE: &str = "Script finished successfully!";

/// Run the binary against the mock without blocking the runtime serving it.
async fn run_cli<S: AsRef<OsStr>>(mock: &MockRhid, args: &[S]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rhid-unlock"));
    cmd.args(args)
        .env("RHID_BASE_URL", &mock.base_url)
        .env("EMAIL", "ops@example.com")
        .env("PASSWORD", "secret")
        .env("RUST_LOG", "warn");
    tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn test_missing_arguments_exit_without_requests() {
    let mock = MockRhid::start(Replies::ok("T", "{}")).await;

    let cases: [&[&str]; 4] = [
        &[],
        &["--serial=ABC123"],
        &["--senha=xyz"],
        &["--serial=", "--senha=xyz"],
    ];
    for args in cases {
        let output = run_cli(&mock, args).await;
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(stderr(&output).contains("Usage: rhid-unlock --serial=<serial> --senha=<senha>"));
        assert!(!stdout(&output).contains(SUCCESS_LINE));
    }

    assert!(mock.hits().is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_utf8_argument_prints_usage_and_exits_one() {
    use std::os::unix::ffi::OsStrExt;

    let mock = MockRhid::start(Replies::ok("T", "{}")).await;

    let args = [
        OsStr::new("--serial=ABC"),
        OsStr::from_bytes(b"--senha=\xff\xfe"),
    ];
    let output = run_cli(&mock, &args).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not valid UTF-8"));
    assert!(stderr(&output).contains("Usage: rhid-unlock"));
    assert!(mock.hits().is_empty());
}

#[tokio::test]
async fn test_end_to_end_prints_payload_once() {
    let mock = MockRhid::start(Replies::ok("tok-1", r#"{"result":"ok"}"#)).await;

    let output = run_cli(&mock, &["--serial=ABC123", "--senha=xyz"]).await;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert_eq!(out.matches(r#"{"result":"ok"}"#).count(), 1);
    assert!(out.contains(SUCCESS_LINE));

    let hits = mock.hits();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[2].raw_query.as_deref(), Some("serial=ABC123&senha=xyz"));
    assert_eq!(hits[2].authorization.as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn test_unlock_http_error_exits_nonzero() {
    let mut replies = Replies::ok("tok-1", "");
    replies.unlock_status = StatusCode::BAD_REQUEST;
    replies.unlock_body = r#"{"error":"senha inválida"}"#.to_string();
    let mock = MockRhid::start(replies).await;

    let output = run_cli(&mock, &["--serial=ABC123", "--senha=wrong"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains(SUCCESS_LINE));
    assert!(stderr(&output).contains("Script failed to complete."));
}

#[tokio::test]
async fn test_missing_access_token_exits_nonzero() {
    let mut replies = Replies::ok("unused", "{}");
    replies.login_body = serde_json::json!({"message": "no token here"});
    let mock = MockRhid::start(replies).await;

    let output = run_cli(&mock, &["--serial=ABC123", "--senha=xyz"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains(SUCCESS_LINE));
    assert_eq!(mock.hits().len(), 2);
}

#[tokio::test]
async fn test_help_prints_usage() {
    let mock = MockRhid::start(Replies::ok("T", "{}")).await;

    let output = run_cli(&mock, &["--help"]).await;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--serial=<serial>"));
    assert!(mock.hits().is_empty());
}
