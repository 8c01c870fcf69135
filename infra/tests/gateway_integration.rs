//! End-to-end gateway tests: dispatcher, provider, and metrics wired
//! together against a mocked provider API

use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sg_core::{Dispatcher, ProviderRegistry, SmsRequest};
use sg_infra::metrics::create_metrics_recorder;
use sg_infra::sms::OvhSmsProvider;
use sg_shared::{MetricsOptions, OvhConfig};

fn request(value: Value) -> SmsRequest {
    serde_json::from_value(value).expect("test request must deserialize")
}

/// Dispatcher with one OVH provider pointed at the mock server and an
/// active metrics recorder
fn gateway_against(
    server: &MockServer,
) -> (Dispatcher, prometheus::Registry) {
    let provider = OvhSmsProvider::with_base_url(
        server.uri(),
        OvhConfig {
            application_key: "app-key".to_string(),
            application_secret: "app-secret".to_string(),
            consumer_key: "consumer-key".to_string(),
            endpoint: Default::default(),
        },
    )
    .expect("provider builds");

    let mut registry = ProviderRegistry::new();
    registry.register("OVH", Arc::new(provider));

    let prometheus_registry = prometheus::Registry::new();
    let recorder = create_metrics_recorder(
        Some(&MetricsOptions {
            sla: vec![100, 500, 2000],
        }),
        &prometheus_registry,
    )
    .expect("recorder builds");

    (Dispatcher::new(registry, recorder), prometheus_registry)
}

async fn mount_happy_provider(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/1.0/auth/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1700000000"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1.0/sms/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["service123"])))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/1.0/sms/service123/jobs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ids": [146],
            "validReceivers": ["+33600000000"],
            "invalidReceivers": [],
            "totalCreditsRemoved": 1.0
        })))
        .mount(server)
        .await;
}

fn histogram_count(registry: &prometheus::Registry) -> u64 {
    registry
        .gather()
        .iter()
        .find(|f| f.get_name() == "sms_sending_time_milliseconds")
        .map(|f| f.get_metric()[0].get_histogram().get_sample_count())
        .unwrap_or(0)
}

fn failure_count(registry: &prometheus::Registry) -> f64 {
    registry
        .gather()
        .iter()
        .find(|f| f.get_name() == "sms_sending_failures_total")
        .map(|f| f.get_metric()[0].get_counter().get_value())
        .unwrap_or(0.0)
}

#[tokio::test]
async fn test_send_sms_round_trip() {
    let server = MockServer::start().await;
    mount_happy_provider(&server).await;
    let (dispatcher, metrics) = gateway_against(&server);

    let reply = dispatcher
        .handle(request(json!({
            "action": "send-sms",
            "provider": "OVH",
            "parameters": { "receivers": ["0600000000"], "message": "hello" }
        })))
        .await;

    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({
            "status": "ok",
            "data": {
                "ids": ["146"],
                "validReceivers": ["+33600000000"],
                "invalidReceivers": []
            }
        })
    );

    // One successful send was recorded, no failures
    assert_eq!(histogram_count(&metrics), 1);
    assert_eq!(failure_count(&metrics), 0.0);
}

#[tokio::test]
async fn test_failed_discovery_replies_call_error_and_counts_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1.0/auth/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1700000000"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1.0/sms/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/1\.0/sms/.+/jobs/$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (dispatcher, metrics) = gateway_against(&server);
    let reply = dispatcher
        .handle(request(json!({
            "action": "send-sms",
            "provider": "OVH",
            "parameters": { "receivers": ["0600000000"], "message": "hello" }
        })))
        .await;

    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({ "status": "error", "message": "provider.apicall.error" })
    );
    assert_eq!(histogram_count(&metrics), 0);
    assert_eq!(failure_count(&metrics), 1.0);
}

#[tokio::test]
async fn test_ping_answers_without_touching_the_provider() {
    let server = MockServer::start().await;
    // No mounts: any HTTP call would 404 and the mock server records it
    let (dispatcher, metrics) = gateway_against(&server);

    let reply = dispatcher
        .handle(request(json!({ "action": "ping", "provider": "OVH" })))
        .await;

    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({ "status": "ok" })
    );
    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(histogram_count(&metrics), 0);
    assert_eq!(failure_count(&metrics), 0.0);
}

#[tokio::test]
async fn test_create_gateway_wires_configured_providers() {
    let config: sg_shared::GatewayConfig = serde_json::from_value(json!({
        "providers": { "Mock": { "kind": "mock" } },
        "metrics": { "sla": [250] }
    }))
    .unwrap();
    let prometheus_registry = prometheus::Registry::new();
    let dispatcher = sg_infra::create_gateway(&config, &prometheus_registry).unwrap();

    let reply = dispatcher
        .handle(request(json!({
            "action": "send-sms",
            "provider": "Mock",
            "parameters": { "receivers": ["0600000000"], "message": "hello" }
        })))
        .await;

    assert!(reply.is_ok());
    let data = reply.data.unwrap();
    assert_eq!(data["validReceivers"], json!(["+33600000000"]));
    assert_eq!(histogram_count(&prometheus_registry), 1);
}

#[tokio::test]
async fn test_unregistered_provider_replies_invalid_provider() {
    let server = MockServer::start().await;
    let (dispatcher, _metrics) = gateway_against(&server);

    let reply = dispatcher
        .handle(request(json!({ "action": "send-sms", "provider": "Nexmo" })))
        .await;

    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({ "status": "error", "message": "invalid.provider" })
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}
