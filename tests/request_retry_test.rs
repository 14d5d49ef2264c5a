use httpmock::prelude::*;
use robot_escape::{ConfigProvider, Direction, HttpRobotClient, RobotApi, RobotError};
use serde_json::json;

struct TestConfig {
    base_url: String,
    retry_max: u32,
}

impl ConfigProvider for TestConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn email(&self) -> &str {
        "test@test.com"
    }

    fn retry_max(&self) -> u32 {
        self.retry_max
    }

    fn insecure(&self) -> bool {
        false
    }
}

fn client_for(base_url: String, retry_max: u32) -> HttpRobotClient {
    HttpRobotClient::from_config(&TestConfig {
        base_url,
        retry_max,
    })
    .unwrap()
}

#[tokio::test]
async fn test_successful_request_consumes_a_single_attempt() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body(json!({"email": "test@test.com"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"id": "abc123"}));
    });

    let client = client_for(server.url("/"), 10);
    let id = client.create_robot("test@test.com").await.unwrap();

    assert_eq!(id, "abc123");
    create_mock.assert_hits(1);
}

#[tokio::test]
async fn test_move_sends_direction_and_distance_and_returns_granted() {
    let server = MockServer::start();
    let move_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/abc123/move")
            .json_body(json!({"direction": "right", "distance": 5}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"distance": 4}));
    });

    let client = client_for(server.url("/"), 3);
    let moved = client
        .move_robot("abc123", Direction::Right, 5)
        .await
        .unwrap();

    // The server granted less than requested; the client reports it as-is.
    assert_eq!(moved, 4);
    move_mock.assert();
}

#[tokio::test]
async fn test_gone_is_terminal_and_never_retried() {
    let server = MockServer::start();
    let move_mock = server.mock(|when, then| {
        when.method(PUT).path("/abc123/move");
        then.status(410);
    });

    let client = client_for(server.url("/"), 7);
    let err = client
        .move_robot("abc123", Direction::Up, 5)
        .await
        .unwrap_err();

    assert!(matches!(err, RobotError::OutOfEnergy));
    move_mock.assert_hits(1);
}

#[tokio::test]
async fn test_retryable_status_exhausts_all_attempts() {
    let server = MockServer::start();
    let move_mock = server.mock(|when, then| {
        when.method(PUT).path("/abc123/move");
        then.status(503).body("service melting");
    });

    let client = client_for(server.url("/"), 3);
    let err = client
        .move_robot("abc123", Direction::Left, 5)
        .await
        .unwrap_err();

    assert!(matches!(err, RobotError::RetriesExhausted { attempts: 3, .. }));
    let message = err.to_string();
    assert!(message.contains("503"), "missing status in: {}", message);
    assert!(
        message.contains("service melting"),
        "missing body in: {}",
        message
    );
    move_mock.assert_hits(3);
}

#[tokio::test]
async fn test_transport_errors_also_consume_attempts() {
    // Nothing listens on the discard port, every attempt fails in transit.
    let client = client_for("http://127.0.0.1:9/".to_string(), 2);
    let err = client.create_robot("test@test.com").await.unwrap_err();

    assert!(matches!(err, RobotError::RetriesExhausted { attempts: 2, .. }));
    assert!(err.to_string().contains("transport error"));
}

#[tokio::test]
async fn test_escape_sends_the_fixed_salary_payload() {
    let server = MockServer::start();
    let escape_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/abc123/escape")
            .json_body(json!({"salary": 60000}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"success": true}));
    });

    let client = client_for(server.url("/"), 3);
    let escaped = client.escape("abc123").await.unwrap();

    assert!(escaped);
    escape_mock.assert();
}

#[tokio::test]
async fn test_escape_without_success_field_counts_as_denied() {
    let server = MockServer::start();
    let escape_mock = server.mock(|when, then| {
        when.method(PUT).path("/abc123/escape");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({}));
    });

    let client = client_for(server.url("/"), 3);
    let escaped = client.escape("abc123").await.unwrap();

    assert!(!escaped);
    escape_mock.assert();
}

#[tokio::test]
async fn test_base_url_without_trailing_slash_keeps_its_path() {
    let server = MockServer::start();
    let move_mock = server.mock(|when, then| {
        when.method(PUT).path("/robot/abc123/move");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"distance": 0}));
    });

    let client = client_for(server.url("/robot"), 1);
    let moved = client
        .move_robot("abc123", Direction::Down, 5)
        .await
        .unwrap();

    assert_eq!(moved, 0);
    move_mock.assert();
}
