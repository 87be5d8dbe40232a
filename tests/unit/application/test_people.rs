use crate::common::{TOKEN, page_query, test_client};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use nationbuilder_client::prelude::*;

#[tokio::test]
async fn test_get_person_sends_auth_and_json_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/people/42")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"person":{"id":42,"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","tags":["donor"]},"precinct":null}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    assert_eq!(client.session_state(), SessionState::Unauthenticated);

    let response = client.get_person(42).await.unwrap();
    assert_eq!(response.person.id, 42);
    assert_eq!(response.person.full_name(), "Ada Lovelace");
    assert_eq!(response.person.tags, vec!["donor".to_string()]);
    assert_eq!(client.session_state(), SessionState::Authenticated);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_session_is_reused_across_requests() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/people/1")
        .with_status(200)
        .with_body(r#"{"person":{"id":1}}"#)
        .expect(3)
        .create_async()
        .await;

    let client = test_client(&server);
    for _ in 0..3 {
        client.get_person(1).await.unwrap();
    }
    assert_eq!(client.session_state(), SessionState::Authenticated);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_person_not_found_carries_response() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/999")
        .with_status(404)
        .with_header("x-request-id", "req-1")
        .with_body(r#"{"code":"not_found","message":"Record not found"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_person(999).await.unwrap_err();
    assert!(err.is_not_found());
    let api = err.api_error().unwrap();
    assert_eq!(api.status.as_u16(), 404);
    assert_eq!(api.message, "Get person 999");
    assert!(api.body.contains("Record not found"));
    assert!(api.url.ends_with("/api/v1/people/999"));
    assert_eq!(api.headers.get("x-request-id").unwrap(), "req-1");
}

#[tokio::test]
async fn test_server_error_maps_to_response_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/5")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client.get_person(5).await.unwrap_err();
    assert!(matches!(err, AppError::Response(_)));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_missing_token_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut config = Config::new("acme", "").with_base_url(crate::common::api_root(&server));
    config.credentials.api_token = None;
    let client = Client::new(config);

    let err = client.get_person(1).await.unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(client.session_state(), SessionState::Unauthenticated);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_person_wraps_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/people/7")
        .match_body(Matcher::Json(json!({"person": {"first_name": "Grace"}})))
        .with_status(200)
        .with_body(r#"{"person":{"id":7,"first_name":"Grace"}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let updated = client
        .update_person(7, &json!({"first_name": "Grace"}))
        .await
        .unwrap();
    assert_eq!(updated.person.first_name.as_deref(), Some("Grace"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_volunteer_and_recruiter() {
    let mut server = Server::new_async().await;
    let volunteer = server
        .mock("POST", "/api/v1/people/7")
        .match_body(Matcher::Json(json!({"person": {"is_volunteer": true}})))
        .with_status(200)
        .with_body(r#"{"person":{"id":7,"is_volunteer":true}}"#)
        .create_async()
        .await;
    let recruiter = server
        .mock("POST", "/api/v1/people/7")
        .match_body(Matcher::Json(json!({"person": {"recruiter_id": 3}})))
        .with_status(200)
        .with_body(r#"{"person":{"id":7,"recruiter_id":3}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let person = client.set_volunteer(7, true).await.unwrap().person;
    assert_eq!(person.is_volunteer, Some(true));
    let person = client.set_recruiter_id(7, 3).await.unwrap().person;
    assert_eq!(person.recruiter_id, Some(3));
    volunteer.assert_async().await;
    recruiter.assert_async().await;
}

#[tokio::test]
async fn test_create_person_returns_new_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/people")
        .match_body(Matcher::Json(
            json!({"person": {"email": "new@example.com", "first_name": "New"}}),
        ))
        .with_status(201)
        .with_body(r#"{"person":{"id":100,"email":"new@example.com","first_name":"New"}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let created = client
        .create_person(&json!({"email": "new@example.com", "first_name": "New"}))
        .await
        .unwrap();
    assert_eq!(created.person.id, 100);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_person_by_email_no_matches_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/match")
        .match_query(Matcher::UrlEncoded("email".into(), "nobody@example.com".into()))
        .with_status(400)
        .with_body(r#"{"code":"no_matches","message":"No people matched the given criteria."}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    assert!(client
        .get_person_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert_eq!(client.get_id_by_email("nobody@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_get_person_by_email_other_bad_request_is_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/match")
        .match_query(Matcher::UrlEncoded("email".into(), "two@example.com".into()))
        .with_status(400)
        .with_body(r#"{"code":"multiple_matches","message":"Multiple people matched."}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let err = client
        .get_person_by_email("two@example.com")
        .await
        .unwrap_err();
    let AppError::BadRequest(api) = err else {
        panic!("expected BadRequest");
    };
    assert!(api.body.contains("multiple_matches"));
}

#[tokio::test]
async fn test_get_id_by_email_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/match")
        .match_query(Matcher::UrlEncoded("email".into(), "a+b@example.com".into()))
        .with_status(200)
        .with_body(r#"{"person":{"id":17,"email":"a+b@example.com"}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    assert_eq!(
        client.get_id_by_email("a+b@example.com").await.unwrap(),
        Some(17)
    );
}

#[tokio::test]
async fn test_match_person_rejects_unknown_keys() {
    let server = Server::new_async().await;
    let client = test_client(&server);
    let err = client.match_person(&[("city", "Paris")]).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    let err = client.match_person(&[]).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_match_person_encodes_criteria() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/people/match")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("first_name".into(), "Anne Marie".into()),
            Matcher::UrlEncoded("last_name".into(), "O'Neil & Co".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"person":{"id":3}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let matched = client
        .match_person(&[("first_name", "Anne Marie"), ("last_name", "O'Neil & Co")])
        .await
        .unwrap();
    assert_eq!(matched.person.id, 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_walks_every_page() {
    let mut server = Server::new_async().await;
    let filters = Matcher::UrlEncoded("city".into(), "Berlin".into());
    let first = server
        .mock("GET", "/api/v1/people/search")
        .match_query(Matcher::AllOf(vec![page_query(1, 2), filters.clone()]))
        .with_status(200)
        .with_body(r#"{"page":1,"per_page":2,"total_pages":2,"results":[{"id":1},{"id":2}]}"#)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/v1/people/search")
        .match_query(Matcher::AllOf(vec![page_query(2, 2), filters]))
        .with_status(200)
        .with_body(r#"{"page":2,"per_page":2,"total_pages":2,"results":[{"id":3}]}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let people = client.search(&[("city", "Berlin")], 2).await.unwrap();
    let ids: Vec<u64> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_people_paginator_is_lazy() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/api/v1/people")
        .match_query(page_query(1, 1))
        .with_status(200)
        .with_body(r#"{"page":1,"total_pages":2,"results":[{"id":10}]}"#)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/v1/people")
        .match_query(page_query(2, 1))
        .with_status(200)
        .with_body(r#"{"page":2,"total_pages":2,"results":[{"id":11}]}"#)
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let mut people = client.people(1);
    let person = people.next().await.unwrap().unwrap();
    assert_eq!(person.id, 10);
    assert_eq!(people.pages_fetched(), 1);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_get_nearby_converts_kilometres() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/people/nearby")
        .match_query(Matcher::AllOf(vec![
            page_query(1, 100),
            Matcher::UrlEncoded("location".into(), "52.5,13.4".into()),
            Matcher::UrlEncoded("distance".into(), (10.0 * MILES_PER_KM).to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"page":1,"total_pages":1,"results":[{"id":8}]}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let people = client.get_nearby(52.5, 13.4, 10.0, true, 500).await.unwrap();
    assert_eq!(people.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_and_delete_person() {
    let mut server = Server::new_async().await;
    let register = server
        .mock("GET", "/api/v1/people/9/register")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/v1/people/9")
        .with_status(204)
        .create_async()
        .await;

    let client = test_client(&server);
    client.register_person(9).await.unwrap();
    client.delete_person(9).await.unwrap();
    register.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_me_returns_token_owner() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/me")
        .with_status(200)
        .with_body(r#"{"person":{"id":1,"email":"admin@acme.org","is_volunteer":false}}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let me = client.me().await.unwrap();
    assert_json_eq!(
        serde_json::to_value(&me.person).unwrap()["email"],
        json!("admin@acme.org")
    );
}
