//! Wire contract of `RestClient` against a mock HTTP backend.

use httpmock::prelude::*;
use invoice_portal::{ClientConfig, ClientError, RestClient, GENERIC_REQUEST_ERROR};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Invoice {
    id: i64,
    client_id: i64,
    number: String,
}

fn client(server: &MockServer) -> RestClient<Invoice> {
    RestClient::new(&ClientConfig::new(server.url("/api")), "/invoices").unwrap()
}

fn invoice() -> Invoice {
    Invoice {
        id: 7,
        client_id: 42,
        number: "INV-0007".into(),
    }
}

#[tokio::test]
async fn create_posts_json_body_to_collection() {
    let server = MockServer::start_async().await;
    let item = json!({"clientId": 42, "number": "INV-0007"});
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/invoices")
            .header("content-type", "application/json")
            .json_body(item.clone());
        then.status(201).json_body(json!(invoice()));
    });

    let created = client(&server).create(&item).await.unwrap();
    assert_eq!(created, invoice());
    mock.assert();
}

#[tokio::test]
async fn get_all_and_get_by_id_decode_records() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/invoices");
        then.status(200).json_body(json!([invoice()]));
    });
    let one = server.mock(|when, then| {
        when.method(GET).path("/api/invoices/7");
        then.status(200).json_body(json!(invoice()));
    });

    let c = client(&server);
    assert_eq!(c.get_all().await.unwrap(), vec![invoice()]);
    assert_eq!(c.get_by_id(7).await.unwrap(), invoice());
    list.assert();
    one.assert();
}

#[tokio::test]
async fn update_puts_to_item_url() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/invoices/7")
            .header("content-type", "application/json")
            .json_body(json!({"number": "INV-0007-A"}));
        then.status(200).json_body(json!(invoice()));
    });

    client(&server)
        .update(7, &json!({"number": "INV-0007-A"}))
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn delete_accepts_empty_success_body() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/invoices/7");
        then.status(204);
    });

    client(&server).delete(7).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn get_by_name_sends_name_query() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/invoices").query_param("name", "Acme");
        then.status(200).json_body(json!([invoice()]));
    });

    let found = client(&server).get_by_name("Acme").await.unwrap();
    assert_eq!(found.len(), 1);
    mock.assert();
}

#[tokio::test]
async fn get_by_type_sends_type_query() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/invoices").query_param("type", "invoice");
        then.status(200)
            .json_body(json!([{"id": 1, "type": "invoice", "message": "Invoice 7 is overdue"}]));
    });

    let notes = client(&server).get_by_type("invoice").await.unwrap();
    assert_eq!(notes[0].message, "Invoice 7 is overdue");
    mock.assert();
}

#[tokio::test]
async fn persistent_server_error_is_attempted_three_times() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/invoices/7");
        then.status(500).body("database unavailable");
    });

    let err = client(&server).get_by_id(7).await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed));
    assert_eq!(err.to_string(), GENERIC_REQUEST_ERROR);
    mock.assert_hits(3);
}

#[tokio::test]
async fn unreachable_backend_yields_generic_error() {
    let config = ClientConfig::new("http://127.0.0.1:1/api");
    let c: RestClient<Invoice> = RestClient::new(&config, "/invoices").unwrap();

    let err = c.get_all().await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_REQUEST_ERROR);
}
