mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{analyzer, broken_analyzer, SCENARIO_TEXT};
use nlp_hub::server::{router, AppState};
use nlp_hub::{Analyzer, CompositeResult};

fn app_with(analyzer: Analyzer) -> Router {
    router(AppState::new(Arc::new(analyzer)))
}

fn app() -> Router {
    app_with(analyzer())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("request succeeds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, bytes.to_vec())
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).expect("valid json"))
}

#[tokio::test]
async fn live_probe() {
    let request = Request::get("/health/live").body(Body::empty()).unwrap();
    let (status, body) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "live"}));
}

#[tokio::test]
async fn analyze_returns_composite_result() {
    let request = post_json(
        "/analyze",
        json!({"text": SCENARIO_TEXT, "categories": ["technology", "business", "sports", "politics"]}),
    );
    let (status, bytes) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let result: CompositeResult = serde_json::from_slice(&bytes).expect("composite result");
    assert_eq!(result.sentiment.label, "POSITIVE");
    assert_eq!(result.classification.all_scores.len(), 4);
    assert_eq!(
        result.classification.top_category,
        result.classification.all_scores[0].category
    );
    assert!(result.entities.entities.iter().any(|e| e.text == "SpaceX"));
    assert_eq!(result.summary.summary, SCENARIO_TEXT);
}

#[tokio::test]
async fn analyze_without_categories_uses_defaults() {
    let request = post_json("/analyze", json!({"text": "Stocks and finance news"}));
    let (status, body) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"]["top_category"], "finance");
    let mut categories: Vec<&str> = body["classification"]["all_scores"]
        .as_array()
        .expect("scores")
        .iter()
        .map(|s| s["category"].as_str().expect("category"))
        .collect();
    categories.sort_unstable();
    assert_eq!(categories, ["finance", "politics", "sports", "technology"]);
}

#[tokio::test]
async fn analyze_serializes_entity_type_field() {
    let request = post_json("/analyze", json!({"text": SCENARIO_TEXT}));
    let (_, body) = send_json(app(), request).await;

    assert_eq!(
        body["entities"]["entities"][0],
        json!({"text": "Elon Musk", "type": "PER", "confidence": 0.998})
    );
    assert!(body["summary"].get("original_words").is_none());
}

#[tokio::test]
async fn empty_text_is_a_bad_request() {
    let request = post_json("/analyze", json!({"text": "  "}));
    let (status, body) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn blank_categories_are_a_bad_request() {
    let request = post_json("/analyze", json!({"text": "hello", "categories": [" "]}));
    let (status, _) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inference_failure_is_a_server_error() {
    let request = post_json("/analyze", json!({"text": SCENARIO_TEXT}));
    let (status, body) = send_json(app_with(broken_analyzer()), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "model exploded");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::post("/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{\"text\": "))
        .unwrap();
    let (status, _) = send(app(), request).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn demo_page_is_served() {
    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, bytes) = send(app(), request).await;
    let html = String::from_utf8(bytes).expect("utf-8");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>NLP Intelligence Hub</title>"));
    for label in ["Analyze", "Extract", "Classify", "Summarize"] {
        assert!(html.contains(&format!(">{label}</button>")), "{label}");
    }
    assert!(html.contains("finance, sports, politics, technology"));
}

#[tokio::test]
async fn demo_sentiment_panel() {
    let request = post_json("/demo/sentiment", json!({"text": "A lovely day"}));
    let (status, body) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["markdown"], "**POSITIVE** (confidence: 0.97)");
    assert!(body["html"]
        .as_str()
        .is_some_and(|h| h.contains("<strong>POSITIVE</strong>")));
}

#[tokio::test]
async fn demo_panels_prompt_for_missing_text() {
    for panel in ["sentiment", "entities", "classify", "summarize"] {
        let request = post_json(&format!("/demo/{panel}"), json!({"text": ""}));
        let (status, body) = send_json(app(), request).await;

        assert_eq!(status, StatusCode::OK, "{panel}");
        assert_eq!(body["markdown"], "Enter some text first", "{panel}");
    }
}

#[tokio::test]
async fn demo_entities_lists_spans() {
    let request = post_json("/demo/entities", json!({"text": SCENARIO_TEXT}));
    let (_, body) = send_json(app(), request).await;

    assert_eq!(
        body["markdown"],
        "- **Elon Musk** [PER]\n- **SpaceX** [ORG]\n- **Mars** [LOC]\n- **Texas** [LOC]"
    );
}

#[tokio::test]
async fn demo_classify_needs_a_category() {
    let request = post_json("/demo/classify", json!({"text": "hello", "categories": " , "}));
    let (_, body) = send_json(app(), request).await;

    assert_eq!(body["markdown"], "Enter at least one category");
}

#[tokio::test]
async fn demo_classify_defaults_categories() {
    let request = post_json("/demo/classify", json!({"text": "Big sports weekend"}));
    let (_, body) = send_json(app(), request).await;

    let markdown = body["markdown"].as_str().expect("markdown");
    assert!(markdown.starts_with("**Winner: sports**\n\n"));
    assert_eq!(markdown.lines().count(), 6);
}

#[tokio::test]
async fn demo_summarize_needs_fifty_words() {
    let request = post_json("/demo/summarize", json!({"text": "Too short to summarize."}));
    let (_, body) = send_json(app(), request).await;

    assert_eq!(
        body["markdown"],
        "Enter longer text (50+ words) for summarization"
    );
}

#[tokio::test]
async fn demo_summarize_reports_word_counts() {
    let text = common::words(60);
    let request = post_json("/demo/summarize", json!({"text": text}));
    let (_, body) = send_json(app(), request).await;

    let markdown = body["markdown"].as_str().expect("markdown");
    assert!(markdown.starts_with("**Summary:**\n\n"));
    assert!(markdown.ends_with("*60 words → 10 words*"));
}
