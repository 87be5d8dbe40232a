use nationbuilder_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let person_id: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    // Reads NATION_SLUG and NATIONBUILDER_API_TOKEN
    let client = Client::from_env();

    let response = client.get_person(person_id).await?;
    info!("Person {}: {}", person_id, response.person.full_name());
    info!("Person details: {}", response.person);

    if let Some(email) = response.person.email.as_deref() {
        let found = client.get_id_by_email(email).await?;
        info!("Lookup by email returned {:?}", found);
    }

    Ok(())
}
