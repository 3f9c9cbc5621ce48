//! Access gate and navigation integration tests.
//!
//! Run with: `cargo test -p detachd-api --test access_test`

mod helpers;

use helpers::ROLE_HEADER;
use serde_json::{json, Value};

async fn decide(session: Value, policy: Value) -> Value {
    let server = helpers::quiet_server();
    let response = server
        .post("/api/v0/access/decide")
        .json(&json!({ "session": session, "policy": policy }))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

#[tokio::test]
async fn test_unauthenticated_redirects_to_login() {
    let decision = decide(
        json!({ "is_authenticated": false, "role": null }),
        json!({ "allowed_roles": ["policyholder"] }),
    )
    .await;

    assert_eq!(decision["action"], "redirect");
    assert_eq!(decision["to"], "/login");
    assert_eq!(decision["replace"], true);
}

#[tokio::test]
async fn test_allowed_role_renders() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": "insurer_agent" }),
        json!({ "allowed_roles": ["insurer_agent", "insurer_admin"] }),
    )
    .await;

    assert_eq!(decision["action"], "render");
}

#[tokio::test]
async fn test_disallowed_role_with_redirect_target() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": "witness" }),
        json!({ "allowed_roles": ["insurer_admin"], "redirect_to": "/claims" }),
    )
    .await;

    assert_eq!(decision["action"], "redirect");
    assert_eq!(decision["to"], "/claims");
}

#[tokio::test]
async fn test_disallowed_role_gets_denial_screen() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": "policyholder" }),
        json!({ "allowed_roles": ["insurer_admin", "super_admin"] }),
    )
    .await;

    assert_eq!(decision["action"], "access_denied");
    assert_eq!(decision["title"], "Access Denied");
    assert_eq!(decision["actual_role"], "policyholder");
    let message = decision["message"].as_str().unwrap();
    assert!(message.contains("insurer_admin, super_admin"));
    assert!(message.contains("Your role: policyholder."));
}

#[tokio::test]
async fn test_disallowed_role_without_denial_screen_goes_to_dashboard() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": "responder" }),
        json!({ "allowed_roles": ["insurer_admin"], "show_access_denied": false }),
    )
    .await;

    assert_eq!(decision["action"], "redirect");
    assert_eq!(decision["to"], "/dashboard");
}

#[tokio::test]
async fn test_unknown_role_is_denied() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": "auditor" }),
        json!({ "allowed_roles": ["insurer_admin"] }),
    )
    .await;

    assert_eq!(decision["action"], "access_denied");
    assert_eq!(decision["actual_role"], "auditor");
}

#[tokio::test]
async fn test_blank_role_redirects_to_login() {
    for role in ["", "   "] {
        let decision = decide(
            json!({ "is_authenticated": true, "role": role }),
            json!({ "allowed_roles": ["insurer_admin"] }),
        )
        .await;

        assert_eq!(decision["action"], "redirect", "role {:?}", role);
        assert_eq!(decision["to"], "/login");
    }
}

#[tokio::test]
async fn test_padded_role_is_trimmed() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": " insurer_admin" }),
        json!({ "allowed_roles": ["insurer_admin"] }),
    )
    .await;

    assert_eq!(decision["action"], "render");
}

#[tokio::test]
async fn test_duplicate_allowed_roles_are_listed_once() {
    let decision = decide(
        json!({ "is_authenticated": true, "role": "witness" }),
        json!({ "allowed_roles": ["insurer_admin", "insurer_admin", "super_admin"] }),
    )
    .await;

    assert_eq!(decision["action"], "access_denied");
    assert_eq!(
        decision["allowed_roles"],
        json!(["insurer_admin", "super_admin"])
    );
    assert!(decision["message"]
        .as_str()
        .unwrap()
        .contains("Required role(s): insurer_admin, super_admin."));
}

#[tokio::test]
async fn test_navigation_requires_session() {
    let server = helpers::quiet_server();

    let response = server.get("/api/v0/navigation").await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.json::<Value>()["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_navigation_for_role() {
    let server = helpers::quiet_server();

    let response = server
        .get("/api/v0/navigation")
        .add_header(ROLE_HEADER, "insurer_admin")
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["role"], "insurer_admin");
    assert!(!body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_navigation_for_unknown_role_uses_fallback() {
    let server = helpers::quiet_server();

    let response = server
        .get("/api/v0/navigation")
        .add_header(ROLE_HEADER, "auditor")
        .await;

    assert_eq!(response.status_code(), 200);
    let labels: Vec<String> = response.json::<Value>()["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["Dashboard", "Settings"]);
}
