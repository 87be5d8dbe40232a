use crate::common::test_client;
use mockito::{Matcher, Server};
use nationbuilder_client::prelude::*;

#[tokio::test]
async fn test_get_contacts_follows_links() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/people/4/contacts")
        .match_query(Matcher::UrlEncoded("limit".into(), DEFAULT_LIMIT.to_string()))
        .with_status(200)
        .with_body(r#"{"results":[{"type_id":1,"method":"door_knock","note":"Home"}],"next":"/api/v1/people/4/contacts?__nonce=c2"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1/people/4/contacts")
        .match_query(Matcher::UrlEncoded("__nonce".into(), "c2".into()))
        .with_status(200)
        .with_body(r#"{"results":[{"type_id":2,"method":"phone_call"}],"next":null}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let contacts = client.get_contacts(4).await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[1].method.as_deref(), Some("phone_call"));
}

#[tokio::test]
async fn test_log_contact_wraps_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/people/4/contacts")
        .match_body(Matcher::Json(json!({
            "contact": {"sender_id": 1, "method": "email", "status": "answered", "note": "Replied"}
        })))
        .with_status(200)
        .with_body(r#"{"contact":{"sender_id":1,"recipient_id":4,"method":"email","status":"answered","note":"Replied"}}"#)
        .create_async()
        .await;

    let contact = Contact {
        sender_id: Some(1),
        method: Some("email".to_string()),
        status: Some("answered".to_string()),
        note: Some("Replied".to_string()),
        ..Contact::default()
    };

    let client = test_client(&server);
    let logged = client.log_contact(4, &contact).await.unwrap();
    assert_eq!(logged.contact.recipient_id, Some(4));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_contact_type_lifecycle() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/v1/settings/contact_types")
        .match_body(Matcher::Json(json!({"contact_type": {"name": "Canvass"}})))
        .with_status(200)
        .with_body(r#"{"contact_type":{"id":8,"name":"Canvass"}}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/v1/settings/contact_types/8")
        .match_body(Matcher::Json(json!({"contact_type": {"id": 8, "name": "Door canvass"}})))
        .with_status(200)
        .with_body(r#"{"contact_type":{"id":8,"name":"Door canvass"}}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/v1/settings/contact_types/8")
        .with_status(204)
        .create_async()
        .await;

    let client = test_client(&server);
    let mut contact_type = client
        .create_contact_type(&ContactType {
            id: None,
            name: "Canvass".to_string(),
        })
        .await
        .unwrap()
        .contact_type;
    assert_eq!(contact_type.id, Some(8));

    contact_type.name = "Door canvass".to_string();
    let updated = client
        .update_contact_type(8, &contact_type)
        .await
        .unwrap()
        .contact_type;
    assert_eq!(updated.name, "Door canvass");

    client.delete_contact_type(8).await.unwrap();
    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_contact_settings_lookups() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/settings/contact_types")
        .match_query(Matcher::UrlEncoded("limit".into(), DEFAULT_LIMIT.to_string()))
        .with_status(200)
        .with_body(r#"{"results":[{"id":1,"name":"Phone"}],"next":null}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1/settings/contact_methods")
        .with_status(200)
        .with_body(r#"{"results":[{"api_name":"door_knock","name":"Door knock"}],"next":null}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1/settings/contact_statuses")
        .with_status(200)
        .with_body(r#"{"results":[{"api_name":"answered","name":"Answered"}],"next":null}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    assert_eq!(client.get_contact_types().await.unwrap()[0].name, "Phone");
    assert_eq!(
        client.get_contact_methods().await.unwrap()[0].api_name,
        "door_knock"
    );
    assert_eq!(
        client.get_contact_statuses().await.unwrap()[0].api_name,
        "answered"
    );
}
