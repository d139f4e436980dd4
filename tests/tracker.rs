use mite_rs::{ApiClient, MiteConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_config(MiteConfig::new("test", "test-key").with_api_base(server.uri()))
}

#[tokio::test]
async fn status_returns_the_tracking_entry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracker.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracker": {
                "tracking_time_entry": {"id": 36135321, "minutes": 247, "since": "2015-10-15T17:05:04+02:00"}
            }
        })))
        .mount(&server)
        .await;

    let status = client_for(&server).tracker().status().await.unwrap();
    assert_eq!(status["tracking_time_entry"]["minutes"], 247);
}

#[tokio::test]
async fn status_of_idle_tracker_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracker.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracker": {}})))
        .mount(&server)
        .await;

    let status = client_for(&server).tracker().status().await.unwrap();
    assert_eq!(status, json!({}));
}

#[tokio::test]
async fn start_patches_the_tracker_without_a_body() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/tracker/36135322.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracker": {
                "tracking_time_entry": {"id": 36135322, "minutes": 0},
                "stopped_time_entry": {"id": 36134329, "minutes": 46}
            }
        })))
        .mount(&server)
        .await;

    let tracker = client_for(&server).tracker().start(36_135_322).await.unwrap();
    assert_eq!(tracker["tracking_time_entry"]["id"], 36_135_322);
    assert_eq!(tracker["stopped_time_entry"]["minutes"], 46);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn stop_deletes_the_tracker_entry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tracker/36135322.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracker": {
                "stopped_time_entry": {"id": 36135322, "minutes": 4}
            }
        })))
        .mount(&server)
        .await;

    let tracker = client_for(&server).tracker().stop(36_135_322).await.unwrap();
    assert_eq!(tracker["stopped_time_entry"]["minutes"], 4);
}
