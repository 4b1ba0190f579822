use managed_records::types::{RecordId, RetrieveOptions};
use managed_records::{Client, ClientConfig, Error, ErrorKind, StatusPolicy};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn records_url(server: &MockServer) -> String {
    format!("{}/records", server.uri())
}

#[tokio::test]
async fn retrieve_first_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("records_page.json");

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("limit", "11"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let result = client.retrieve(&RetrieveOptions::default()).await.unwrap();

    assert_eq!(result.ids.len(), 10);
    assert_eq!(result.ids.first(), Some(&RecordId::Number(1)));
    assert_eq!(result.ids.last(), Some(&RecordId::Number(10)));
    assert_eq!(result.previous_page, None);
    assert_eq!(result.next_page, Some(2));

    let open: Vec<(RecordId, bool)> = result
        .open
        .iter()
        .map(|r| (r.record.id.clone(), r.is_primary))
        .collect();
    assert_eq!(
        open,
        vec![
            (RecordId::Number(1), true),
            (RecordId::Number(3), true),
            (RecordId::Number(4), false),
            (RecordId::Number(6), false),
            (RecordId::Number(7), true),
            (RecordId::Number(9), true),
            (RecordId::Number(10), false),
        ]
    );
    // the closed red lookahead record is not counted
    assert_eq!(result.closed_primary_count, 2);
}

#[tokio::test]
async fn retrieve_with_colors() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("records_mixed.json");

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("limit", "11"))
        .and(query_param("offset", "10"))
        .and(query_param("color[]", "red"))
        .and(query_param("color[]", "blue"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let options = RetrieveOptions::default()
        .with_page(2)
        .with_color("red")
        .with_color("blue");
    let result = client.retrieve(&options).await.unwrap();

    assert_eq!(result.previous_page, Some(1));
    assert_eq!(result.next_page, None);
    assert_eq!(result.ids.len(), 3);
    assert_eq!(result.open.len(), 2);
    assert!(result.open[0].is_primary);
    assert!(!result.open[1].is_primary);
    assert_eq!(result.closed_primary_count, 1);
}

#[tokio::test]
async fn retrieve_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let result = client
        .retrieve(&RetrieveOptions::default().with_page(50))
        .await
        .unwrap();

    assert!(result.ids.is_empty());
    assert!(result.open.is_empty());
    assert_eq!(result.closed_primary_count, 0);
    assert_eq!(result.previous_page, Some(49));
    assert_eq!(result.next_page, None);
}

#[tokio::test]
async fn retrieve_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let result = client.retrieve(&RetrieveOptions::default()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn retrieve_lenient_non_200() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("records_mixed.json");

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(206).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_base_url(&records_url(&mock_server))
        .with_status_policy(StatusPolicy::Lenient);
    let client = Client::with_config(config);
    let result = client.retrieve(&RetrieveOptions::default()).await.unwrap();
    assert_eq!(result.ids.len(), 3);
}

#[tokio::test]
async fn retrieve_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let err = client
        .retrieve(&RetrieveOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn retrieve_connection_refused() {
    let client = Client::with_base_url("http://127.0.0.1:1/records");
    let err = client
        .retrieve(&RetrieveOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn concurrent_retrievals_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("records_page.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("records_mixed.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let first_options = RetrieveOptions::default();
    let second_options = RetrieveOptions::default().with_page(2);
    let (first, second) = tokio::join!(
        client.retrieve(&first_options),
        client.retrieve(&second_options),
    );
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.ids.len(), 10);
    assert_eq!(first.next_page, Some(2));
    assert_eq!(second.ids.len(), 3);
    assert_eq!(second.previous_page, Some(1));
    assert_eq!(second.next_page, None);
}

#[tokio::test]
async fn retrieve_tolerates_odd_records() {
    let mock_server = MockServer::start().await;
    let body = r#"[
        {"id": 1, "disposition": "open", "color": "red"},
        {"id": 2.5, "disposition": 3, "color": "blue"},
        {"id": null, "disposition": "closed", "color": 7}
    ]"#;

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&records_url(&mock_server));
    let result = client.retrieve(&RetrieveOptions::default()).await.unwrap();

    assert_eq!(result.ids.len(), 3);
    assert_eq!(result.open.len(), 1);
    assert_eq!(result.open[0].record.id, RecordId::Number(1));
    assert_eq!(result.closed_primary_count, 0);
}
