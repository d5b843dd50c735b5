use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, RecordedCall};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

fn log_request() -> Request<String> {
    Request::builder().uri("/log").body(String::new()).unwrap()
}

// --- log ---

#[tokio::test]
async fn log_starts_empty() {
    let app = app();
    let resp = app.oneshot(log_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let log: Vec<RecordedCall> = body_json(resp).await;
    assert!(log.is_empty());
}

// --- analyze, form shape ---

#[tokio::test]
async fn analyze_answers_ok_status() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/calls/text/TextGetTextSentiment",
            "text=I+love+pizza&apikey=k&outputMode=json",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["call"], "TextGetTextSentiment");
}

#[tokio::test]
async fn analyze_records_form_params() {
    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/calls/text/TextGetTargetedSentiment",
            "text=I+love+pizza&target=pizza&apikey=k&outputMode=json",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app).await.unwrap().call(log_request()).await.unwrap();
    let log: Vec<RecordedCall> = body_json(resp).await;

    assert_eq!(log.len(), 1);
    assert_eq!(log[0].path, "/text/TextGetTargetedSentiment");
    assert_eq!(log[0].params["text"], "I love pizza");
    assert_eq!(log[0].params["target"], "pizza");
    assert_eq!(log[0].params["apikey"], "k");
    assert_eq!(log[0].params["outputMode"], "json");
    assert!(log[0].query.is_empty());
    assert_eq!(
        log[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
}

// --- analyze, raw-image shape ---

#[tokio::test]
async fn analyze_records_image_shape() {
    let mut app = app().into_service();

    let image = [0x89u8, 0x50, 0x4E, 0x47];
    let request = Request::builder()
        .method("POST")
        .uri("/calls/image/ImageGetRankedImageKeywords?apikey=k&outputMode=json")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(String::from_utf8_lossy(&image).into_owned())
        .unwrap();

    let resp = ServiceExt::ready(&mut app).await.unwrap().call(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app).await.unwrap().call(log_request()).await.unwrap();
    let log: Vec<RecordedCall> = body_json(resp).await;

    assert_eq!(log.len(), 1);
    assert_eq!(log[0].path, "/image/ImageGetRankedImageKeywords");
    assert!(log[0].params.is_empty());
    assert_eq!(log[0].query["apikey"], "k");
    assert_eq!(log[0].query["outputMode"], "json");
    assert!(log[0].body_bytes > 0);
}

// --- call counting ---

#[tokio::test]
async fn every_call_is_recorded_in_order() {
    let mut app = app().into_service();

    for path in [
        "/calls/text/TextGetTextSentiment",
        "/calls/url/URLGetRankedNamedEntities",
        "/calls/html/HTMLGetAuthor",
    ] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(form_request(path, "apikey=k&outputMode=json"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = ServiceExt::ready(&mut app).await.unwrap().call(log_request()).await.unwrap();
    let log: Vec<RecordedCall> = body_json(resp).await;

    assert_eq!(log.len(), 3);
    assert_eq!(log[0].path, "/text/TextGetTextSentiment");
    assert_eq!(log[1].path, "/url/URLGetRankedNamedEntities");
    assert_eq!(log[2].path, "/html/HTMLGetAuthor");
}
