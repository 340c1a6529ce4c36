//! Pagination tests: page walking, limits and error propagation.

mod common;

use atlas_client::PaginationLimit;
use common::*;
use futures::TryStreamExt;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};

fn alerts(range: std::ops::Range<u32>) -> Vec<serde_json::Value> {
    range
        .map(|i| json!({"id": format!("alert-{i}"), "status": "OPEN"}))
        .collect()
}

async fn mount_page(server: &MockServer, page_num: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(group_path("/alerts")))
        .and(query_param("pageNum", page_num))
        .and(query_param("itemsPerPage", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_stream_walks_until_short_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", page_json(alerts(0..2), 5)).await;
    mount_page(&mock_server, "2", page_json(alerts(2..4), 5)).await;
    mount_page(&mock_server, "3", page_json(alerts(4..5), 5)).await;

    let page = PageRequest::new(1, 2).unwrap();
    let all: Vec<_> = client(&mock_server)
        .alerts_stream(None, page)
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<_> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["alert-0", "alert-1", "alert-2", "alert-3", "alert-4"]);
}

#[tokio::test]
async fn test_stream_stops_at_total_count() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", page_json(alerts(0..2), 4)).await;
    mount_page(&mock_server, "2", page_json(alerts(2..4), 4)).await;

    let all: Vec<_> = client(&mock_server)
        .alerts_stream(None, PageRequest::new(1, 2).unwrap())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_stream_starts_at_requested_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "3", page_json(alerts(4..5), 5)).await;

    let all: Vec<_> = client(&mock_server)
        .alerts_stream(None, PageRequest::new(3, 2).unwrap())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "alert-4");
}

#[tokio::test]
async fn test_stream_yields_error_and_ends() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "1", page_json(alerts(0..2), 6)).await;
    Mock::given(method("GET"))
        .and(path(group_path("/alerts")))
        .and(query_param("pageNum", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let mut stream = client.alerts_stream(None, PageRequest::new(1, 2).unwrap());

    assert!(stream.try_next().await.unwrap().is_some());
    assert!(stream.try_next().await.unwrap().is_some());
    let err = stream.try_next().await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError(_)));
    assert!(futures::StreamExt::next(&mut stream).await.is_none());
}

#[tokio::test]
async fn test_single_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "2", page_json(alerts(2..4), 5)).await;

    let page = client(&mock_server)
        .alerts_page(None, PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.total_count, Some(5));
}

#[test]
fn test_page_limits_are_validated_before_sending() {
    assert!(matches!(
        PageRequest::new(0, 100),
        Err(ClientError::PaginationLimits(PaginationLimit::PageNumTooSmall { page_num: 0 }))
    ));
    assert!(matches!(
        PageRequest::new(1, 0),
        Err(ClientError::PaginationLimits(
            PaginationLimit::ItemsPerPageOutOfRange { items_per_page: 0, .. }
        ))
    ));
    assert!(matches!(
        PageRequest::new(1, 2001),
        Err(ClientError::PaginationLimits(
            PaginationLimit::ItemsPerPageOutOfRange { items_per_page: 2001, .. }
        ))
    ));
    assert!(PageRequest::new(1, 2000).is_ok());

    let default = PageRequest::default();
    assert_eq!(default.page_num(), 1);
    assert_eq!(default.items_per_page(), 1000);
}
