
use std::time::{Duration, Instant};

use portfolio_api::entities::{collection::ListResponse, project::Project};
use reqwest::StatusCode;
use serde_json::{Value, json};
use test_utils::*;

#[actix_rt::test]
async fn list_projects_returns_the_seed_in_order() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/projects", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ListResponse<Project> = response.json().await.unwrap();
    let ids: Vec<_> = body.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
}

#[actix_rt::test]
async fn get_project_by_id_returns_the_record() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/projects/3", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let project: Project = response.json().await.unwrap();
    assert_eq!(project.id, "3");
    assert_eq!(project.project_name, "Task Management System");
}

#[actix_rt::test]
async fn missing_project_is_a_404_with_message_body() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/projects/99", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], json!("Project not found"));
}

#[actix_rt::test]
async fn contact_submission_is_acknowledged_after_the_demo_delay() {
    let app = TestApp::spawn().await;

    let started = Instant::now();
    let response = app
        .client
        .post(format!("{}/api/contact", app.address))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Nice portfolio."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        started.elapsed() >= Duration::from_millis(1000),
        "contact ack carries the artificial delay"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Message received successfully"));
}

#[actix_rt::test]
async fn empty_contact_fields_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/contact", app.address))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "",
            "message": "Nice portfolio."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Validation failed"));
}

#[actix_rt::test]
async fn malformed_json_gets_a_json_400() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/contact", app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn health_reports_uptime_and_version() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert!(body["uptime"].is_string());
}

#[actix_rt::test]
async fn home_lists_the_available_endpoints() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("Ok"));
    assert!(
        body["endpoints"]
            .as_array()
            .unwrap()
            .contains(&json!("/api/contact"))
    );
}
