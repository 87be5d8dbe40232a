use crate::common::{page_query, test_client};
use mockito::Server;
use nationbuilder_client::prelude::*;

#[tokio::test]
async fn test_get_lists() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/lists")
        .match_query(page_query(1, 100))
        .with_status(200)
        .with_body(
            r#"{"page":1,"total_pages":1,"results":[{"id":5,"name":"Donors","slug":"donors","count":120}]}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let lists = client.get_lists(100).await.unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, 5);
    assert_eq!(lists[0].count, Some(120));
}

#[tokio::test]
async fn test_get_list_stops_on_empty_page() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/lists/5/people")
        .match_query(page_query(1, 2))
        .with_status(200)
        .with_body(r#"{"page":1,"total_pages":4,"results":[{"id":1},{"id":2}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1/lists/5/people")
        .match_query(page_query(2, 2))
        .with_status(200)
        .with_body(r#"{"page":2,"total_pages":4,"results":[]}"#)
        .create_async()
        .await;
    let third = server
        .mock("GET", "/api/v1/lists/5/people")
        .match_query(page_query(3, 2))
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let people = client.get_list(5, 2).await.unwrap();
    assert_eq!(people.len(), 2);
    third.assert_async().await;
}

#[tokio::test]
async fn test_list_paginator_error_is_retryable() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("GET", "/api/v1/lists/5/people")
        .match_query(page_query(1, 10))
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let client = test_client(&server);
    let mut people = client.list_people(5, 10);
    assert!(people.next().await.is_err());
    assert!(people.next().await.is_err());
    assert_eq!(people.pages_fetched(), 0);
    failing.assert_async().await;
}
