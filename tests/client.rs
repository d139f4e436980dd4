use mite_rs::config::USER_AGENT;
use mite_rs::{ApiClient, Error, MiteConfig, QueryParams};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_config(MiteConfig::new("test", "test-key").with_api_base(server.uri()))
}

#[tokio::test]
async fn get_sends_fixed_headers_and_json_suffix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account.json"))
        .and(header("accept", "application/json"))
        .and(header("x-miteapikey", "test-key"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account": {"id": 1}})))
        .mount(&server)
        .await;

    let response = client_for(&server).get("account", None).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn user_agent_extras_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account.json"))
        .and(header("user-agent", format!("{USER_AGENT} my-app/2.0")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account": {}})))
        .mount(&server)
        .await;

    let config = MiteConfig::new("test", "test-key")
        .with_api_base(server.uri())
        .with_user_agent_extra("my-app/2.0");

    ApiClient::with_config(config).get("account", None).await.unwrap();
}

#[tokio::test]
async fn empty_params_produce_no_trailing_question_mark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get("time_entries", None).await.unwrap();
    client
        .get("time_entries", Some(&QueryParams::new()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.url.path(), "/time_entries.json");
        assert!(request.url.query().is_none());
    }
}

#[tokio::test]
async fn query_string_preserves_order_and_escapes_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let params = QueryParams::new()
        .set("note", "hello world")
        .set("at", "2024-01-31")
        .set("q", "a&b=c");
    client_for(&server)
        .get("time_entries", Some(&params))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("note=hello%20world&at=2024-01-31&q=a%26b%3Dc")
    );
}

#[tokio::test]
async fn post_carries_content_type_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers.json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"customer": {"name": "Acme"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"customer": {"id": 1}})),
        )
        .mount(&server)
        .await;

    let body = json!({"customer": {"name": "Acme"}});
    let response = client_for(&server)
        .post("customers", Some(&body))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn bodyless_requests_carry_no_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/tracker/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracker": {}})))
        .mount(&server)
        .await;

    client_for(&server).patch("tracker/1", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn delete_accepts_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/time_entries/7.json"))
        .and(wiremock::matchers::query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let params = QueryParams::new().set("force", true);
    client_for(&server)
        .delete("time_entries/7", Some(&params))
        .await
        .unwrap();
}

#[tokio::test]
async fn head_requests_are_supported() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/time_entries.json"))
        .respond_with(ResponseTemplate::new(200).insert_header("x-mite-total", "120"))
        .mount(&server)
        .await;

    let response = client_for(&server).head("time_entries", None).await.unwrap();
    assert_eq!(response.headers().get("x-mite-total").unwrap(), "120");
}

#[tokio::test]
async fn http_404_with_json_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/42.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).get("customers/42", None).await.unwrap_err();
    let Error::ApiClient(err) = err else {
        panic!("expected an API client error, got {err:?}");
    };
    assert_eq!(err.code(), 404);
    assert_eq!(err.message(), "Not found");
    assert!(err.has_response());
    assert_eq!(err.response().unwrap().status().as_u16(), 404);
    assert!(err.request().url().ends_with("/customers/42.json"));
}

#[tokio::test]
async fn http_500_with_non_json_body_uses_reason_phrase() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("account", None).await.unwrap_err();
    let Error::ApiClient(err) = err else {
        panic!("expected an API client error, got {err:?}");
    };
    assert_eq!(err.code(), 500);
    assert_eq!(err.message(), "Internal Server Error");
}

#[tokio::test]
async fn transport_failure_has_no_response_and_code_zero() {
    // An unpooled server so the listener actually shuts down on drop;
    // `MockServer::start()` returns the listener to wiremock's pool alive.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = ApiClient::with_config(MiteConfig::new("test", "test-key").with_api_base(uri));

    let err = client.get("account", None).await.unwrap_err();
    let Error::ApiClient(err) = err else {
        panic!("expected an API client error, got {err:?}");
    };
    assert!(!err.has_response());
    assert_eq!(err.code(), 0);
    assert!(err.message().contains("unable to send GET request to account"));
}

#[tokio::test]
async fn empty_endpoint_is_rejected_before_dispatch() {
    let server = MockServer::start().await;

    let err = client_for(&server).get("", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_parameter_key_is_rejected_before_dispatch() {
    let server = MockServer::start().await;

    let params = QueryParams::new().set("", "value");
    let err = client_for(&server)
        .get("time_entries", Some(&params))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_credentials_are_rejected_before_dispatch() {
    let server = MockServer::start().await;

    let client = ApiClient::with_config(MiteConfig::new("", "key").with_api_base(server.uri()));
    let err = client.get("account", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn successful_response_body_is_returned_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let response = client_for(&server).get("account", None).await.unwrap();
    assert_eq!(response.text().unwrap(), "not json at all");
}
