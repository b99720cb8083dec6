//! Integration tests for the HTTP gateway client

use mockito::Matcher;
use pathogen_portal::adapters::gateway::{GatewayClient, NotificationTransport};
use pathogen_portal::config::{secret_string, GatewayConfig};
use pathogen_portal::domain::{NotificationType, TransportError};
use serde_json::json;

fn config(base_url: String) -> GatewayConfig {
    GatewayConfig {
        base_url,
        auth_token: Some(secret_string("gateway-token".to_string())),
        timeout_seconds: 5,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_post_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/ng/notification/pathogen")
        .match_header("authorization", "Bearer gateway-token")
        .match_body(Matcher::PartialJson(json!({
            "notifiedPerson": {"info": {"lastName": "Meier"}}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "content": "JVBERi0xLjQ=",
                "notificationId": "c7f2-11aa",
                "authorEmail": "lab@example.org",
                "authorName": "Labor Nord",
                "timestamp": "2024-03-01T14:30:05+01:00",
                "status": "All OK",
                "contentType": "application/pdf",
                "title": "Meldevorgangsquittung"
            }"#,
        )
        .create_async()
        .await;

    let config = config(server.url());
    let client = GatewayClient::new(&config).unwrap();
    let response = client
        .post(
            &config.url_for(NotificationType::Nominal),
            &json!({"notifiedPerson": {"info": {"lastName": "Meier"}}}),
        )
        .await
        .unwrap();

    assert_eq!(response.notification_id, "c7f2-11aa");
    assert_eq!(response.content, "JVBERi0xLjQ=");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_failure_body_is_decoded() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/ng/notification/pathogen/7.3/non_nominal")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"validationErrors":[{"message":"Error A","field":"notifiedPerson"},{"message":"Error B"}]}"#,
        )
        .create_async()
        .await;

    let config = config(server.url());
    let client = GatewayClient::new(&config).unwrap();
    let err = client
        .post(&config.url_for(NotificationType::NonNominal), &json!({}))
        .await
        .unwrap_err();

    match err {
        TransportError::Http { status, body } => {
            assert_eq!(status, 422);
            let errors = body.validation_errors.unwrap();
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].field.as_deref(), Some("notifiedPerson"));
            assert_eq!(errors[1].message, "Error B");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_failure_becomes_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let config = config(server.url());
    let client = GatewayClient::new(&config).unwrap();
    let err = client
        .post(&config.url_for(NotificationType::FollowUp), &json!({}))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Gateway returned status 502");
    assert_eq!(
        err.body().and_then(|b| b.message.as_deref()),
        Some("Bad Gateway")
    );
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let config = config(server.url());
    let client = GatewayClient::new(&config).unwrap();
    let err = client
        .post(&config.url_for(NotificationType::Nominal), &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_gateway() {
    // Nothing listens on port 9 (discard) in the test environment
    let config = config("http://127.0.0.1:9".to_string());
    let client = GatewayClient::new(&config).unwrap();
    let err = client
        .post(&config.url_for(NotificationType::Nominal), &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::ConnectionFailed(_)));
}
