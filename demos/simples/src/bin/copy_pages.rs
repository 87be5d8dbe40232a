use nationbuilder_client::prelude::*;

/// Copies every basic page of one site to another
///
/// Usage: `copy_pages <from-site> <to-site>`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let (Some(from), Some(to)) = (args.next(), args.next()) else {
        error!("usage: copy_pages <from-site> <to-site>");
        return Ok(());
    };

    let client = Client::from_env();
    let mut pages = client.pages(&from, DEFAULT_LIMIT);
    let mut copied = 0;
    while let Some(mut page) = pages.next().await? {
        page.id = None;
        let created = client.create_page(&to, &page).await?;
        info!(
            "Copied {} as page {:?}",
            page.slug.as_deref().unwrap_or("<no slug>"),
            created.basic_page.id
        );
        copied += 1;
    }
    info!("Copied {} pages from {} to {}", copied, from, to);

    Ok(())
}
