use reqwest::Method;
use wiremock::matchers::any;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;

#[tokio::test]
async fn preflight_does_not_relay() {
    let app = spawn_app().await;
    for server in [&app.tracking_server, &app.newsletter_server] {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    for path in ["/subscribe", "/substack"] {
        let resp = app.request(Method::OPTIONS, path).await;
        assert_eq!(resp.status().as_u16(), 200, "{path}");
        let headers = resp.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*", "{path}");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS", "{path}");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type", "{path}");
        assert_eq!(headers["Access-Control-Max-Age"], "86400", "{path}");
    }
}

#[tokio::test]
async fn every_response_allows_any_origin() {
    let app = spawn_app().await;

    let ok = app
        .post_subscribe(&serde_json::json!({ "email": "a@example.com" }))
        .await;
    let bad = app.post_subscribe(&serde_json::json!({})).await;
    let not_allowed = app.request(Method::GET, "/subscribe").await;

    for resp in [ok, bad, not_allowed] {
        assert_eq!(
            resp.headers()["Access-Control-Allow-Origin"],
            "*",
            "{}",
            resp.status()
        );
    }
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = spawn_app().await;

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let resp = app.request(method.clone(), "/subscribe").await;
        assert_eq!(resp.status().as_u16(), 405, "{method}");
        assert_eq!(resp.text().await.unwrap(), "Method not allowed");
    }
}
