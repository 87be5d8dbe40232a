use nationbuilder_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let client = Client::from_env();
    let per_page = client.config().per_page;

    let mut people = client.people(per_page);
    let mut count = 0usize;
    while let Some(person) = people.next().await? {
        count += 1;
        info!("{:>8} {}", person.id, person.full_name());
    }
    info!("{} people in {} pages", count, people.pages_fetched());

    for list in client.get_lists(per_page).await? {
        info!("List {} ({}): {:?} people", list.id, list.name, list.count);
    }

    Ok(())
}
