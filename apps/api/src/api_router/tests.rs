use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use crowdfund_application::PlatformService;
use crowdfund_domain::Validator;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use super::{build_router, build_session_layer};
use crate::api_config::ApiConfig;
use crate::state::AppState;

fn test_router() -> Router {
    let config = ApiConfig {
        api_host: "127.0.0.1".to_owned(),
        api_port: 3001,
        frontend_url: "http://localhost:3000".to_owned(),
        cookie_secure: false,
        session_idle_minutes: 30,
    };
    let validator =
        Validator::new().unwrap_or_else(|error| panic!("rules should compile: {error}"));

    build_router(
        AppState::new(PlatformService::new(validator)),
        config.frontend_url.as_str(),
        build_session_layer(&config),
    )
    .unwrap_or_else(|error| panic!("router should build: {error}"))
}

/// Browser stand-in that keeps the session cookie between requests.
struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    fn new() -> Self {
        Self {
            router: test_router(),
            cookie: None,
        }
    }

    async fn send(&mut self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie.as_str());
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap_or_else(|error| panic!("request should build: {error}"));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|error| panic!("router should respond: {error}"));

        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let header = set_cookie
                .to_str()
                .unwrap_or_else(|error| panic!("cookie should be ascii: {error}"));
            self.cookie = header.split(';').next().map(ToOwned::to_owned);
        }

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|error| panic!("body should be readable: {error}"));
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|error| panic!("body should be json: {error}"))
        };

        (status, json)
    }

    async fn first_campaign_id(&mut self) -> String {
        let (_, campaigns) = self.send(Method::GET, "/api/campaigns", None).await;
        campaigns[0]["campaign_id"]
            .as_str()
            .unwrap_or_else(|| panic!("campaign id should be a string"))
            .to_owned()
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let mut client = TestClient::new();

    let (status, json) = client.send(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn overview_seeds_sample_campaigns_once() {
    let mut client = TestClient::new();

    let (status, first) = client.send(Method::GET, "/api/overview", None).await;
    let (_, second) = client.send(Method::GET, "/api/overview", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["stats"]["total_campaigns"], 3);
    assert_eq!(first["stats"]["total_raised"], "0");
    assert_eq!(first["campaigns"][0]["title"], "Cancer Treatment for Sarah");
    assert_eq!(first["campaigns"][1]["kind"], "Community");
    assert_eq!(
        first["campaigns"][0]["campaign_id"],
        second["campaigns"][0]["campaign_id"]
    );
}

#[tokio::test]
async fn donation_updates_totals_and_thanks_once() {
    let mut client = TestClient::new();
    let campaign_id = client.first_campaign_id().await;

    let (status, receipt) = client
        .send(
            Method::POST,
            format!("/api/campaigns/{campaign_id}/donations").as_str(),
            Some(json!({ "donor_name": "Alice", "amount": "100" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        receipt["message"],
        "Thanks Alice! Donated $100.00 to Cancer Treatment for Sarah"
    );

    let (_, notification) = client
        .send(Method::GET, "/api/notifications/last-donation", None)
        .await;
    let (_, cleared) = client
        .send(Method::GET, "/api/notifications/last-donation", None)
        .await;
    assert_eq!(notification["donation"]["donor_name"], "Alice");
    assert_eq!(cleared["donation"], Value::Null);

    let (_, overview) = client.send(Method::GET, "/api/overview", None).await;
    assert_eq!(overview["stats"]["total_raised"], "100");
    assert_eq!(overview["stats"]["total_donors"], 1);

    let (_, details) = client
        .send(Method::GET, format!("/api/campaigns/{campaign_id}").as_str(), None)
        .await;
    assert_eq!(details["heading"], "Medical Campaign: Cancer Treatment for Sarah");
    assert_eq!(details["recent_donors"][0]["name"], "Alice");
}

#[tokio::test]
async fn rejected_donation_lists_every_failing_field() {
    let mut client = TestClient::new();
    let campaign_id = client.first_campaign_id().await;

    let (status, json) = client
        .send(
            Method::POST,
            format!("/api/campaigns/{campaign_id}/donations").as_str(),
            Some(json!({ "donor_name": "", "donor_email": "nope", "amount": "50001" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "Name");
    assert_eq!(json["errors"][1]["field"], "Email");
    assert_eq!(json["errors"][2]["message"], "Amount cannot exceed $50,000");

    let (_, overview) = client.send(Method::GET, "/api/overview", None).await;
    assert_eq!(overview["stats"]["total_donors"], 0);
}

#[tokio::test]
async fn unknown_campaign_is_not_found() {
    let mut client = TestClient::new();

    let (status, _) = client
        .send(
            Method::GET,
            "/api/campaigns/00000000-0000-4000-8000-000000000000",
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn campaign_type_preference_drives_creation() {
    let mut client = TestClient::new();

    let (status, preference) = client
        .send(
            Method::PUT,
            "/api/preferences/campaign-type",
            Some(json!({ "campaign_type": "Community" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preference["campaign_type"], "Community");

    let (status, created) = client
        .send(
            Method::POST,
            "/api/campaigns",
            Some(json!({
                "creator_name": "Mary Wilson",
                "creator_email": "mary@parkfriends.org",
                "title": "Help Rebuild the Library",
                "target": "5000",
                "location": "Main Street",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["heading"], "Community Project: Help Rebuild the Library");

    let (_, campaigns) = client.send(Method::GET, "/api/campaigns", None).await;
    assert_eq!(campaigns[3]["position"], 4);
}

#[tokio::test]
async fn unknown_campaign_type_is_rejected() {
    let mut client = TestClient::new();

    let (status, _) = client
        .send(
            Method::PUT,
            "/api/preferences/campaign-type",
            Some(json!({ "campaign_type": "Sports" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rule_check_reports_canonical_message() {
    let mut client = TestClient::new();

    let (status, rejected) = client
        .send(
            Method::POST,
            "/api/validation/rules/campaign_title/check",
            Some(json!({ "text": "Ab" })),
        )
        .await;
    let (_, accepted) = client
        .send(
            Method::POST,
            "/api/validation/rules/campaign_title/check",
            Some(json!({ "text": "Help Rebuild the Library" })),
        )
        .await;
    let (missing_status, _) = client
        .send(
            Method::POST,
            "/api/validation/rules/zip_code/check",
            Some(json!({ "text": "12345" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["valid"], false);
    assert_eq!(
        rejected["message"],
        "Title must be 5-100 characters with letters, numbers, and basic punctuation"
    );
    assert_eq!(accepted["valid"], true);
    assert_eq!(missing_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rule_catalog_lists_every_rule() {
    let mut client = TestClient::new();

    let (status, rules) = client.send(Method::GET, "/api/validation/rules", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rules.as_array().map(Vec::len), Some(8));
}
