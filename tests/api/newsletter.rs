use std::net::TcpListener;

use wiremock::matchers::any;
use wiremock::matchers::body_string;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;
use crate::helpers::spawn_app_with_default_newsletter_url;

#[tokio::test]
async fn missing_email_is_rejected() {
    let app = spawn_app_with_default_newsletter_url().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.newsletter_server)
        .await;

    let resp = app.post_substack(&serde_json::json!({})).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Email is required" }));
}

#[tokio::test]
async fn url_required_without_default() {
    let app = spawn_app().await;

    let resp = app
        .post_substack(&serde_json::json!({ "email": "a@example.com" }))
        .await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Newsletter URL is required" }));
}

#[tokio::test]
async fn default_url_is_used() {
    let app = spawn_app_with_default_newsletter_url().await;
    Mock::given(path("/subscribe"))
        .and(method("POST"))
        .and(body_string("email=a%40example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let resp = app
        .post_substack(&serde_json::json!({ "email": "a@example.com" }))
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "status": "success",
            "message": "Subscription request sent to Substack",
            "statusCode": 200,
        })
    );
}

#[tokio::test]
async fn rejection_reports_status_code() {
    let app = spawn_app().await;
    Mock::given(path("/subscribe"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let resp = app
        .post_substack(&serde_json::json!({
            "email": "a@example.com",
            "substackUrl": format!("{}/subscribe", app.substack_url()),
        }))
        .await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "status": "error",
            "message": "Substack returned status 403",
            "statusCode": 403,
        })
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_a_500() {
    let app = spawn_app().await;
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let resp = app
        .post_substack(&serde_json::json!({
            "email": "a@example.com",
            "substackUrl": format!("http://127.0.0.1:{port}"),
        }))
        .await;
    assert_eq!(resp.status().as_u16(), 500);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert!(body.get("statusCode").is_none());
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to submit to Substack: "));
}
