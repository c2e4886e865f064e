use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RSS_BODY: &str = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;

/// Runs the binary from an empty directory with no inherited flag or log variables.
fn hermes_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hermes").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("HERMES_CHECK")
        .env_remove("HERMES_GUESS")
        .env_remove("RUST_LOG");
    cmd
}

async fn serve(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[test]
fn test_help_shows_flags() {
    let dir = TempDir::new().unwrap();

    hermes_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--check"))
        .stdout(predicate::str::contains("--guess"))
        .stdout(predicate::str::contains("Probe common feed paths"));
}

#[test]
fn test_missing_url_is_usage_error() {
    let dir = TempDir::new().unwrap();

    hermes_cmd(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Usage: hermes"));
}

#[test]
fn test_invalid_url_fails() {
    let dir = TempDir::new().unwrap();

    hermes_cmd(&dir)
        .arg("not a url")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lists_advertised_feeds() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/",
        r#"<html><head>
             <link rel="alternate" type="application/rss+xml" href="/rss.xml" title="RSS">
             <link rel="alternate" type="application/feed+json" href="feed.json">
           </head><body></body></html>"#,
    )
    .await;
    let dir = TempDir::new().unwrap();

    let expected = format!(
        "- {uri}/rss.xml (application/rss+xml)\n- {uri}/feed.json (application/feed+json)\n",
        uri = server.uri()
    );
    hermes_cmd(&dir)
        .arg(server.uri())
        .assert()
        .success()
        .stdout(expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_guess_prints_single_line() {
    let server = MockServer::start().await;
    serve(&server, "/", "<!doctype html><html><head></head></html>").await;
    serve(&server, "/rss.xml", RSS_BODY).await;
    let dir = TempDir::new().unwrap();

    hermes_cmd(&dir)
        .arg("--guess")
        .arg(server.uri())
        .assert()
        .success()
        .stdout(format!("- {}/rss.xml (application/rss+xml)\n", server.uri()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_page_not_found_fails() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    hermes_cmd(&dir)
        .arg(format!("{}/missing", server.uri()))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: Not Found\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_flags_from_env_file() {
    let server = MockServer::start().await;
    serve(&server, "/", "<html><head></head></html>").await;
    serve(&server, "/atom.xml", "<feed/>").await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "HERMES_GUESS=true\n").unwrap();

    hermes_cmd(&dir)
        .arg(server.uri())
        .assert()
        .success()
        .stdout(format!("- {}/atom.xml (application/atom+xml)\n", server.uri()));
}
