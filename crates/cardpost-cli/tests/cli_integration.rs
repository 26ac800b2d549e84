use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `cardpost` command isolated from the caller's environment and config.
fn cardpost(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardpost").unwrap();
    cmd.env_remove("TRELLO_API_KEY")
        .env_remove("TRELLO_API_TOKEN")
        .env_remove("TRELLO_LIST_ID")
        .env_remove("TRELLO_API_BASE_URL")
        .env_remove("CARDPOST_DEBUG_LOG")
        .env("CARDPOST_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

/// The JSON envelope is the last line; warnings may precede it on stderr.
fn parse_json_output(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let last_line = text.lines().rev().find(|line| !line.trim().is_empty()).unwrap_or("");
    serde_json::from_str(last_line).expect("Failed to parse JSON output")
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_without_request() {
        let dir = tempdir().unwrap();
        let output = cardpost(&dir)
            .args(["--api-base-url", "http://127.0.0.1:1/1", "create", "--name", "Task A"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], false);
        assert_eq!(
            json["error"],
            "Description is required; Due Date is required; Start Date is required"
        );
    }

    #[test]
    fn test_invalid_date_is_reported() {
        let dir = tempdir().unwrap();
        cardpost(&dir)
            .args([
                "--api-base-url",
                "http://127.0.0.1:1/1",
                "create",
                "--name",
                "Task A",
                "--description",
                "Docs",
                "--due",
                "someday",
                "--start",
                "2024-05-01",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Due Date must be a valid date"));
    }
}

mod submission_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_create_posts_card_and_prints_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/cards"))
            .and(query_param("key", "cli-key"))
            .and(query_param("token", "cli-token"))
            .and(query_param("idList", "list-9"))
            .and(query_param("name", "Task A"))
            .and(query_param("desc", "Docs"))
            .and(query_param("due", "2024-05-10"))
            .and(query_param("start", "2024-05-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "c1",
                "name": "Task A"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let output = cardpost(&dir)
            .env("TRELLO_API_KEY", "cli-key")
            .env("TRELLO_API_TOKEN", "cli-token")
            .env("TRELLO_LIST_ID", "list-9")
            .env("TRELLO_API_BASE_URL", format!("{}/1", server.uri()))
            .args([
                "create",
                "--name",
                "Task A",
                "--description",
                "Docs",
                "--due",
                "2024-05-10",
                "--start",
                "2024-05-01",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "Card created successfully: Task A");
        assert_eq!(json["data"]["card"]["id"], "c1");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_remote_rejection_reports_server_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/cards"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "message": "Unauthorized" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let output = cardpost(&dir)
            .args([
                "--api-base-url",
                &format!("{}/1", server.uri()),
                "create",
                "--name",
                "Task A",
                "--description",
                "Docs",
                "--due",
                "2024-05-10",
                "--start",
                "2024-05-01",
            ])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["error"], "Error creating card: Unauthorized");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_config_file_supplies_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(query_param("key", "file-key"))
            .and(query_param("idList", "file-list"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "From file" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            format!(
                "[trello]\napi_key = \"file-key\"\napi_token = \"file-token\"\nlist_id = \"file-list\"\napi_base_url = \"{}/1\"\n",
                server.uri()
            ),
        )
        .unwrap();

        cardpost(&dir)
            .args([
                "create",
                "--name",
                "From file",
                "--description",
                "Docs",
                "--due",
                "2024-05-10",
                "--start",
                "2024-05-01",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("From file"));
    }
}

#[test]
fn test_completions_generate_without_config() {
    let dir = tempdir().unwrap();
    cardpost(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cardpost"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[trello\n").unwrap();

    cardpost(&dir)
        .args(["create", "--name", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_version_prints_package_version() {
    let dir = tempdir().unwrap();
    cardpost(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("cardpost {}\n", env!("CARGO_PKG_VERSION")));
}
