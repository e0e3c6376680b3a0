//! Integration tests for the assessment HTTP API.
//!
//! Drives one respondent through the whole questionnaire over the router:
//! blocked navigation, answer validation, the submit jump to the first
//! incomplete section, then the report in JSON and text form.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use capability_assessment::adapters::http::{app_router, AssessmentAppState};
use capability_assessment::adapters::{InMemoryAssessmentRepository, InMemoryEventBus};
use capability_assessment::config::AppConfig;
use capability_assessment::domain::questionnaire::Questionnaire;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    events: Arc<InMemoryEventBus>,
}

impl TestApp {
    fn new() -> Self {
        let events = Arc::new(InMemoryEventBus::new());
        let state = AssessmentAppState::new(
            Arc::new(InMemoryAssessmentRepository::new()),
            events.clone(),
            Arc::new(Questionnaire::embedded().unwrap()),
        );
        Self {
            router: app_router(state, &AppConfig::default()),
            events,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    async fn answer_capabilities(&self, id: &str, capabilities: std::ops::Range<usize>, level: u8) {
        for capability in capabilities {
            for question in 0..3 {
                let (status, _) = self
                    .send(
                        "PUT",
                        &format!("/api/assessments/{}/answers/{}-{}", id, capability, question),
                        Some(json!({ "level": level })),
                    )
                    .await;
                assert_eq!(status, StatusCode::OK);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_questionnaire_flow() {
    let app = TestApp::new();

    // Start
    let (status, view) = app.send("POST", "/api/assessments", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = view["id"].as_str().unwrap().to_string();
    assert_eq!(view["activeSection"], "organizational");

    // Next with nothing answered is blocked and focuses the first question
    let (status, body) = app
        .send("POST", &format!("/api/assessments/{}/advance", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "blocked");
    assert_eq!(body["missing"].as_array().unwrap().len(), 12);
    assert_eq!(body["focus"]["target"], json!({ "kind": "question", "target": "0-0" }));
    assert_eq!(body["assessment"]["highlightedQuestion"], "0-0");
    assert_eq!(body["assessment"]["activeSection"], "organizational");

    // Out-of-range level and unknown question are rejected
    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/assessments/{}/answers/0-0", id),
            Some(json!({ "level": 9 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, error) = app
        .send(
            "PUT",
            &format!("/api/assessments/{}/answers/99-0", id),
            Some(json!({ "level": 3 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "QUESTION_NOT_FOUND");

    // Complete Organizational and move on
    app.answer_capabilities(&id, 0..4, 2).await;
    let (_, body) = app
        .send("POST", &format!("/api/assessments/{}/advance", id), None)
        .await;
    assert_eq!(body["outcome"], "section_changed");
    assert_eq!(body["to"], "contextual");
    assert_eq!(body["assessment"]["showErrors"], false);

    // Back is never gated
    let (_, body) = app
        .send("POST", &format!("/api/assessments/{}/retreat", id), None)
        .await;
    assert_eq!(body["assessment"]["activeSection"], "organizational");
    app.send("POST", &format!("/api/assessments/{}/advance", id), None)
        .await;

    // Submit with Technical untouched jumps there
    app.answer_capabilities(&id, 4..7, 3).await;
    let (_, body) = app
        .send("POST", &format!("/api/assessments/{}/submit", id), None)
        .await;
    assert_eq!(body["outcome"], "blocked");
    assert_eq!(body["assessment"]["activeSection"], "technical");
    assert_eq!(body["assessment"]["highlightedQuestion"], "7-0");

    // No report before submission
    let (status, error) = app
        .send("GET", &format!("/api/assessments/{}/report", id), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "RESULTS_NOT_AVAILABLE");

    // Finish and submit
    app.answer_capabilities(&id, 7..10, 4).await;
    let (_, body) = app
        .send("POST", &format!("/api/assessments/{}/submit", id), None)
        .await;
    assert_eq!(body["outcome"], "submitted");
    assert_eq!(body["focus"]["target"], json!({ "kind": "results" }));
    assert_eq!(body["assessment"]["submitted"], true);
    let focus_id = body["focus"]["id"].as_u64().unwrap();

    // Report: ties at 2.0 go to the first Organizational capability
    let (status, report) = app
        .send("GET", &format!("/api/assessments/{}/report", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["results"].as_array().unwrap().len(), 10);
    assert_eq!(report["chart"]["xAxis"]["min"], 1);
    assert_eq!(report["chart"]["xAxis"]["max"], 5);
    assert_eq!(
        report["recommendation"],
        json!({
            "kind": "focus",
            "capability": "Strategic Leadership & Vision",
            "average": 2.0
        })
    );

    let (status, text) = app
        .send("GET", &format!("/api/assessments/{}/report.txt", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let text = text.as_str().unwrap();
    assert!(text.contains("Strategic Leadership & Vision"));
    assert!(text.contains("Scale: 1 = Ad-hoc"));
    assert!(text.contains("Focus your next improvement efforts on Strategic Leadership & Vision"));

    // Acknowledge the results focus request
    let (_, body) = app
        .send(
            "DELETE",
            &format!("/api/assessments/{}/focus/{}", id, focus_id),
            None,
        )
        .await;
    assert_eq!(body["outcome"], "focus_cleared");
    assert!(body["assessment"].get("pendingFocus").is_none());

    // Events were published along the way
    assert_eq!(app.events.events_of_type("assessment.started.v1").len(), 1);
    assert_eq!(app.events.events_of_type("assessment.submitted.v1").len(), 1);
    assert_eq!(
        app.events
            .events_of_type("assessment.answer_recorded.v1")
            .len(),
        30
    );
}

#[tokio::test]
async fn editing_after_submit_updates_report() {
    let app = TestApp::new();
    let (_, view) = app.send("POST", "/api/assessments", None).await;
    let id = view["id"].as_str().unwrap().to_string();

    app.answer_capabilities(&id, 0..10, 5).await;
    for _ in 0..2 {
        app.send("POST", &format!("/api/assessments/{}/advance", id), None)
            .await;
    }
    let (_, body) = app
        .send("POST", &format!("/api/assessments/{}/submit", id), None)
        .await;
    assert_eq!(body["outcome"], "submitted");

    let (_, report) = app
        .send("GET", &format!("/api/assessments/{}/report", id), None)
        .await;
    assert_eq!(report["recommendation"], json!({ "kind": "all_optimized" }));

    app.send(
        "PUT",
        &format!("/api/assessments/{}/answers/8-1", id),
        Some(json!({ "level": 2 })),
    )
    .await;

    let (_, report) = app
        .send("GET", &format!("/api/assessments/{}/report", id), None)
        .await;
    assert_eq!(report["recommendation"]["capability"], "Model Development & Evaluation");
    assert_eq!(report["recommendation"]["average"], 4.0);
}

#[tokio::test]
async fn health_and_questionnaire_are_served() {
    let app = TestApp::new();

    let (status, health) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, questionnaire) = app.send("GET", "/api/questionnaire", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(questionnaire["title"], "LLM Capability Framework Assessment");
    assert_eq!(
        questionnaire["maturityLevels"][4]["label"],
        "Optimized"
    );
}
