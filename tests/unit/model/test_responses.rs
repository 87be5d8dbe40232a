use nationbuilder_client::prelude::*;

#[test]
fn test_page_response_counted_shape() {
    let page: PageResponse<Person> = serde_json::from_str(
        r#"{"page":2,"per_page":10,"total":31,"total_pages":4,"results":[{"id":1,"first_name":"Ada","precinct_id":9}]}"#,
    )
    .unwrap();
    assert_eq!(page.page, Some(2));
    assert_eq!(page.total_pages, Some(4));
    assert_eq!(page.total, Some(31));
    assert!(!page.has_next());
    assert_eq!(page.results[0].extra.get("precinct_id"), Some(&json!(9)));
}

#[test]
fn test_page_response_link_shape() {
    let page: PageResponse<Site> = serde_json::from_str(
        r#"{"results":[{"id":1,"name":"Main","slug":"main"}],"next":"/api/v1/sites?__nonce=a","prev":null}"#,
    )
    .unwrap();
    assert!(page.has_next());
    assert_eq!(page.prev, None);
}

#[test]
fn test_page_response_missing_results_is_empty() {
    let page: PageResponse<Tag> = serde_json::from_str(r#"{"next":""}"#).unwrap();
    assert!(page.results.is_empty());
    assert!(!page.has_next());
}

#[test]
fn test_tagging_response_single() {
    let response: TaggingResponse =
        serde_json::from_str(r#"{"tagging":{"person_id":3,"tag":"donor","created_at":"2026-01-02T03:04:05Z"}}"#)
            .unwrap();
    let taggings = response.into_taggings();
    assert_eq!(taggings.len(), 1);
    assert!(taggings[0].created_at.is_some());
}

#[test]
fn test_person_response_with_precinct() {
    let response: PersonResponse =
        serde_json::from_str(r#"{"person":{"id":5},"precinct":{"id":2,"name":"North"}}"#).unwrap();
    assert_eq!(response.person.id, 5);
    assert_eq!(response.precinct.unwrap()["name"], "North");
}
