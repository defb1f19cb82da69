//! HTTP endpoint tests over the demo fixtures.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use keystone_lookup::server::{serve, ErrorResponse, ServerState};
use keystone_lookup::{Aggregator, Config};

async fn start(cache_seconds: u64) -> String {
    let config = Config {
        fixtures_dir: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/demo")),
        ..Default::default()
    };
    let state = ServerState {
        aggregator: Arc::new(Aggregator::new(&config).expect("aggregator")),
        cache_seconds,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(serve(listener, state));
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_lookup_returns_json_with_expires() {
    let base = start(180).await;
    let response = reqwest::get(format!(
        "{}/api/lookup?region=eu&realm=blackmoore&character=Dyrael",
        base
    ))
    .await
    .expect("request");

    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("expires"));

    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["class"], "Druid");
    assert_eq!(body["perDungeonResults"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["perDungeonResults"][6]["runs"][0]["reportId"], "DeF2");
    assert_eq!(body["perDungeonResults"][6]["runs"][0]["inTimeTier"], 0);
}

#[tokio::test]
async fn test_zero_cache_seconds_omits_expires() {
    let base = start(0).await;
    let response = reqwest::get(format!(
        "{}/api/lookup?region=EU&realm=blackmoore&character=dyrael",
        base
    ))
    .await
    .expect("request");

    assert_eq!(response.status(), 200);
    assert!(!response.headers().contains_key("expires"));
}

#[tokio::test]
async fn test_bad_requests() {
    let base = start(180).await;
    let cases = [
        "region=eu&realm=blackmoore",
        "region=atlantis&realm=blackmoore&character=dyrael",
        "region=eu&region=us&realm=blackmoore&character=dyrael",
        "region=eu&realm=&character=dyrael",
        // Profile unavailable
        "region=eu&realm=blackmoore&character=nobody",
    ];

    for query in cases {
        let response = reqwest::get(format!("{}/api/lookup?{}", base, query))
            .await
            .expect("request");
        assert_eq!(response.status(), 400, "query {query}");
        let body: ErrorResponse = response.json().await.expect("error body");
        assert!(!body.error.is_empty());
    }
}
