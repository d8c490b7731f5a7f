//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: HTTP page fetch → table state → cross-page
//! bulk selection, against a catalog-shaped mock API.

use artic_table::{
    ArtworkSource, HttpClient, HttpClientConfig, PageSource, SourceConfig, TableModel,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve a fixed collection split into pages of the given sizes.
/// Record ids run 1..=total in page order; pages past the end are empty.
async fn mount_catalog(server: &MockServer, sizes: &[usize]) {
    let total: usize = sizes.iter().sum();
    let mut next_id = 1usize;

    for (index, &size) in sizes.iter().enumerate() {
        let page = index + 1;
        let data: Vec<_> = (next_id..next_id + size)
            .map(|id| {
                json!({
                    "id": id,
                    "title": format!("Artwork {id}"),
                    "place_of_origin": "Chicago",
                    "artist_display": null,
                    "inscriptions": null,
                    "date_start": 1900 + id,
                    "date_end": 1900 + id
                })
            })
            .collect();
        next_id += size;

        Mock::given(method("GET"))
            .and(path("/artworks"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "pagination": {
                    "total": total,
                    "limit": size,
                    "total_pages": sizes.len(),
                    "current_page": page
                },
                "data": data
            })))
            .mount(server)
            .await;
    }

    // Everything past the last page is an empty page
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "total": total, "current_page": sizes.len() + 1 },
            "data": []
        })))
        .mount(server)
        .await;
}

fn table_for(server: &MockServer) -> TableModel<ArtworkSource> {
    let client = HttpClient::with_config(HttpClientConfig::builder().max_retries(0).build());
    let source =
        ArtworkSource::new(client, SourceConfig::new().base_url(server.uri())).unwrap();
    TableModel::new(source)
}

#[tokio::test]
async fn test_page_navigation_over_http() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[10, 10, 5]).await;

    let mut table = table_for(&server);
    table.load_first().await;

    assert_eq!(table.records().len(), 10);
    assert_eq!(table.total(), 25);
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.records()[0].title, "Artwork 1");

    table.load_page(3).await;
    assert_eq!(table.records().len(), 5);
    assert_eq!(table.current_page(), 3);
    assert_eq!(table.records()[0].id, 21);
}

#[tokio::test]
async fn test_bulk_selection_spans_pages_over_http() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[10, 10, 5]).await;

    let mut table = table_for(&server);
    table.select_first(22).await;

    assert_eq!(table.selection().len(), 22);
    let ids: Vec<i64> = table.selection().records().iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=22).collect::<Vec<i64>>());
    assert!(!table.is_loading());
}

#[tokio::test]
async fn test_bulk_selection_terminates_on_exhausted_source() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[10, 10, 5]).await;

    let mut table = table_for(&server);
    table.select_first(30).await;

    // Only 25 records exist; the empty page after the last one stops the loop
    assert_eq!(table.selection().len(), 25);
}

#[tokio::test]
async fn test_failed_fetch_keeps_view_and_selection() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[10, 10, 5]).await;

    let mut table = table_for(&server);
    table.load_first().await;
    table.select_first(5).await;

    // Point the table at a dead endpoint and navigate
    let dead = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&dead)
        .await;
    let client = HttpClient::with_config(HttpClientConfig::builder().max_retries(0).build());
    let source = ArtworkSource::new(client, SourceConfig::new().base_url(dead.uri())).unwrap();
    let mut broken = TableModel::new(source);
    broken.load_first().await;

    // First load against a failing source shows nothing and raises nothing
    assert!(broken.records().is_empty());
    assert_eq!(broken.total(), 0);

    // The healthy table's state is untouched by any of this
    assert_eq!(table.records().len(), 10);
    assert_eq!(table.selection().len(), 5);
}

#[tokio::test]
async fn test_clear_after_bulk_selection() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[10, 10, 5]).await;

    let mut table = table_for(&server);
    table.select_first(12).await;
    assert_eq!(table.selection().len(), 12);

    table.clear_selection();
    assert!(table.selection().is_empty());
}

#[tokio::test]
async fn test_fetch_page_direct() {
    let server = MockServer::start().await;
    mount_catalog(&server, &[3, 2]).await;

    let client = HttpClient::with_config(HttpClientConfig::builder().max_retries(0).build());
    let source =
        ArtworkSource::new(client, SourceConfig::new().base_url(server.uri())).unwrap();

    let page = source.fetch_page(2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.current_page, Some(2));
    assert_eq!(page.data[0].place_of_origin.as_deref(), Some("Chicago"));
}
