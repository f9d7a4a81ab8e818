//! Contact submission tests
//!
//! Posts the form to a mock endpoint and checks the state machine transitions

use mockito::{Matcher, Server};
use portfolio_common::contact::{ContactFormController, FormStatus, Interest, FALLBACK_EMAIL};
use portfolio_common::Error as CommonError;
use portfolio_site::contact::ContactClient;
use portfolio_site::error::SiteError;
use std::time::Duration;

fn filled_controller() -> ContactFormController {
    let mut controller = ContactFormController::new();
    controller.form.name = "Grace Hopper".to_string();
    controller.form.email = "grace@example.com".to_string();
    controller.form.organization = "Navy".to_string();
    controller.form.interests = vec![Interest::DataEngineering];
    controller.form.message = "Pipeline help".to_string();
    controller
}

fn client_for(url: String) -> ContactClient {
    ContactClient::new(Some(url), Duration::from_secs(5)).expect("client should build")
}

/// Successful response: success state, cleared form, reset back to idle
#[tokio::test]
async fn test_submit_success_clears_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/f/test")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "Grace Hopper".into()),
            Matcher::UrlEncoded("email".into(), "grace@example.com".into()),
            Matcher::UrlEncoded("interest".into(), "Data Engineering".into()),
            Matcher::UrlEncoded("type".into(), "contact".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}/f/test", server.url()));
    let mut controller = filled_controller();

    let ticket = client.send(&mut controller).await.expect("send should run");

    mock.assert_async().await;
    assert_eq!(controller.status(), FormStatus::Success);
    assert!(controller.form.name.is_empty());
    assert!(controller.form.message.is_empty());

    let ticket = ticket.expect("success hands out a reset ticket");
    assert!(controller.reset_after_success(ticket));
    assert_eq!(controller.status(), FormStatus::Idle);
}

/// Non-success status: error state, input kept
#[tokio::test]
async fn test_submit_server_error_keeps_input() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/f/test")
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(format!("{}/f/test", server.url()));
    let mut controller = filled_controller();
    let before = controller.form.clone();

    let ticket = client.send(&mut controller).await.expect("send should run");

    mock.assert_async().await;
    assert!(ticket.is_none());
    assert_eq!(controller.status(), FormStatus::Error);
    assert_eq!(controller.form, before);
    assert!(controller.last_error().unwrap().contains("500"));
    assert!(controller.status_message().unwrap().contains(FALLBACK_EMAIL));
}

/// Validation error in the form response body is still just a failure
#[tokio::test]
async fn test_submit_unprocessable() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/f/test")
        .with_status(422)
        .with_body(r#"{"errors":[{"field":"email"}]}"#)
        .create_async()
        .await;

    let client = client_for(format!("{}/f/test", server.url()));
    let mut controller = filled_controller();
    client.send(&mut controller).await.expect("send should run");
    assert_eq!(controller.status(), FormStatus::Error);
}

/// Unreachable endpoint: transport failure collapses into the error state
#[tokio::test]
async fn test_submit_transport_failure() {
    let client = client_for("http://127.0.0.1:1/unreachable".to_string());
    let mut controller = filled_controller();

    let ticket = client.send(&mut controller).await.expect("send should run");

    assert!(ticket.is_none());
    assert_eq!(controller.status(), FormStatus::Error);
    assert!(controller.last_error().unwrap().starts_with("network error"));
    assert_eq!(controller.form.name, "Grace Hopper");
}

/// No endpoint configured: nothing is sent, error state points at the email
#[tokio::test]
async fn test_submit_without_endpoint_fails_closed() {
    let client = ContactClient::new(None, Duration::from_secs(5)).expect("client should build");
    assert_eq!(client.endpoint(), None);
    let mut controller = filled_controller();

    let ticket = client.send(&mut controller).await.expect("send should run");

    assert!(ticket.is_none());
    assert_eq!(controller.status(), FormStatus::Error);
    assert!(controller.status_message().unwrap().contains(FALLBACK_EMAIL));
    assert_eq!(controller.form.message, "Pipeline help");
}

/// Invalid input never reaches the network
#[tokio::test]
async fn test_invalid_form_not_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(format!("{}/f/test", server.url()));
    let mut controller = filled_controller();
    controller.form.email = "grace-at-example".to_string();

    let result = client.send(&mut controller).await;

    assert!(matches!(
        result,
        Err(SiteError::Common(CommonError::Validation(_)))
    ));
    assert_eq!(controller.status(), FormStatus::Idle);
    mock.assert_async().await;
}
