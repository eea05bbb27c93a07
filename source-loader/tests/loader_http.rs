//! Loader tests against a local mock HTTP server.

use std::time::Duration;

use httpmock::prelude::*;
use source_loader::{LoadError, LoaderConfig, PageLoader, SourceLoader, VideoLoader};

fn cfg() -> LoaderConfig {
    LoaderConfig {
        language: "en".into(),
        page_timeout_secs: 5,
    }
}

#[tokio::test]
async fn page_loader_returns_one_document_with_title() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/article");
            then.status(200).header("content-type", "text/html").body(
                "<html><head><title>Sample</title></head>\
                 <body><p>Alpha beta.</p><p>Gamma delta.</p></body></html>",
            );
        })
        .await;

    let loader = PageLoader::new(&cfg()).unwrap();
    let docs = loader.load(&server.url("/article")).await.unwrap();

    assert_eq!(docs.len(), 1);
    assert!(docs[0].text.contains("Alpha beta."));
    assert!(docs[0].text.contains("Gamma delta."));
    assert_eq!(
        docs[0].metadata.get("title").and_then(|v| v.as_str()),
        Some("Sample")
    );
}

#[tokio::test]
async fn page_loader_maps_http_failure_to_unreachable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/gone");
            then.status(404);
        })
        .await;

    let loader = PageLoader::new(&cfg()).unwrap();
    let err = loader.load(&server.url("/gone")).await.unwrap_err();
    assert!(matches!(err, LoadError::Unreachable { .. }), "got {err:?}");
}

#[tokio::test]
async fn page_loader_maps_slow_response_to_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .body("<html><body>too late</body></html>");
        })
        .await;

    let loader = PageLoader::new(&LoaderConfig {
        language: "en".into(),
        page_timeout_secs: 1,
    })
    .unwrap();
    let err = loader.load(&server.url("/slow")).await.unwrap_err();
    assert!(
        matches!(err, LoadError::Timeout { seconds: 1, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn video_loader_fetches_transcript_and_metadata() {
    let server = MockServer::start_async().await;

    let track_url = server.url("/timedtext");
    let watch_body = format!(
        r#"{{"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[{{"baseUrl":"{track_url}","languageCode":"en"}}]}}}},"videoDetails":{{"title":"Mock Talk","author":"Mock Author","lengthSeconds":"60"}}}}"#
    );

    server
        .mock_async(move |when, then| {
            when.method(GET).path("/watch");
            then.status(200).body(watch_body);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/timedtext");
            then.status(200).body(
                "<transcript><text start=\"0\" dur=\"1\">Hello</text>\
                 <text start=\"1\" dur=\"1\">world</text></transcript>",
            );
        })
        .await;

    let loader = VideoLoader::new(&cfg()).unwrap();
    let docs = loader.load(&server.url("/watch")).await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].text, "Hello world");
    assert_eq!(
        docs[0].metadata.get("title").and_then(|v| v.as_str()),
        Some("Mock Talk")
    );
    assert_eq!(
        docs[0].metadata.get("length_seconds").and_then(|v| v.as_u64()),
        Some(60)
    );
}

#[tokio::test]
async fn video_loader_without_captions_is_no_transcript() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/watch");
            then.status(200).body("<html>plain watch page</html>");
        })
        .await;

    let loader = VideoLoader::new(&cfg()).unwrap();
    let err = loader.load(&server.url("/watch")).await.unwrap_err();
    assert!(
        matches!(err, LoadError::NoTranscript { ref language, .. } if language == "en"),
        "got {err:?}"
    );
}
