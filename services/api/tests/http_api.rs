use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use holland_inventory::assessment::{
    assessment_router, AssessmentService, ResultSubmitter, SubmissionError, SubmissionPayload,
    ATTITUDE_ITEMS,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Accepts every payload; the submission contents are covered by the
/// library's own tests.
struct AcceptingSubmitter;

impl ResultSubmitter for AcceptingSubmitter {
    fn submit(&self, _payload: SubmissionPayload) -> Result<(), SubmissionError> {
        Ok(())
    }
}

fn router() -> axum::Router {
    let service = Arc::new(AssessmentService::new(Arc::new(AcceptingSubmitter)));
    assessment_router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

async fn start_session(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            json!({
                "name": "Ada",
                "surname": "Lovelace",
                "section": "5th F",
                "gender": "Female"
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    body["session_id"].as_str().expect("session id").to_string()
}

#[tokio::test]
async fn starting_with_a_blank_field_is_unprocessable() {
    let app = router();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            json!({
                "name": "Ada",
                "surname": "",
                "section": "5th F",
                "gender": "Female"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_session_returns_not_found() {
    let app = router();

    let response = app
        .oneshot(empty_request("GET", "/api/v1/assessments/assessment-999999"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_self_rating_is_rejected_over_http() {
    let app = router();
    let id = start_session(&app).await;

    let answers_uri = format!("/api/v1/assessments/{id}/answers");
    let response = app
        .clone()
        .oneshot(json_request("POST", &answers_uri, json!({ "item": 60, "value": 4 })))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request("POST", &answers_uri, json!({ "item": 61, "value": 4 })))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .contains("already used"),
        "error explains the duplicate: {body}"
    );
}

#[tokio::test]
async fn full_assessment_flow_over_http() {
    let app = router();
    let id = start_session(&app).await;

    let advance_uri = format!("/api/v1/assessments/{id}/advance");
    let answers_uri = format!("/api/v1/assessments/{id}/answers");

    let response = app
        .clone()
        .oneshot(empty_request("POST", &advance_uri))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    for item in 0..ATTITUDE_ITEMS {
        let response = app
            .clone()
            .oneshot(json_request("POST", &answers_uri, json!({ "item": item, "value": 3 })))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(empty_request("POST", &advance_uri))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    for offset in 0..6 {
        let item = ATTITUDE_ITEMS + offset;
        let value = offset + 1;
        let response = app
            .clone()
            .oneshot(json_request("POST", &answers_uri, json!({ "item": item, "value": value })))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(empty_request("POST", &format!("/api/v1/assessments/{id}/score")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let report = json_body(response).await;
    assert_eq!(report["top3"], json!(["conventional", "enterprising", "social"]));

    let response = app
        .clone()
        .oneshot(empty_request("POST", &format!("/api/v1/assessments/{id}/submit")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = json_body(response).await;
    assert_eq!(payload["name"], "Ada");
    assert_eq!(payload["top3"], json!(["C", "E", "S"]));
    assert_eq!(payload["answers"].as_array().expect("answers array").len(), 66);
}

#[tokio::test]
async fn going_back_floors_at_profile_entry() {
    let app = router();
    let id = start_session(&app).await;

    let back_uri = format!("/api/v1/assessments/{id}/back");
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(empty_request("POST", &back_uri))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/v1/assessments/{id}")))
        .await
        .expect("router responds");
    let body = json_body(response).await;
    assert_eq!(body["step"]["kind"], "profile_entry");
}
