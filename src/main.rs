use bedbet_client::{config::ClientConfig, handlers::auth, handlers::rooms};
use bedbet_core::slot::SlotIndex;
use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Read an optional slot from the environment.
fn slot_from_env(key: &str) -> Result<Option<SlotIndex>> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            let slot = match value.trim().parse::<u8>() {
                Ok(idx) => SlotIndex::new(idx)?,
                Err(_) => value.parse::<SlotIndex>()?,
            };
            Ok(Some(slot))
        }
        _ => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let email = std::env::var("BEDBET_EMAIL")
        .map_err(|_| eyre!("BEDBET_EMAIL environment variable not set"))?;
    let password = std::env::var("BEDBET_PASSWORD")
        .map_err(|_| eyre!("BEDBET_PASSWORD environment variable not set"))?;
    let sleep = slot_from_env("BEDBET_SLEEP_SLOT")?;
    let wake = slot_from_env("BEDBET_WAKE_SLOT")?;

    let ctx = bedbet_client::connect(config)?;

    let session = auth::login(&ctx, &email, &password).await?;
    info!("Signed in as {} ({} coins)", session.user.name, session.user.coin);

    let rooms = rooms::list_rooms(&ctx).await?;
    let visible = rooms::visible_rooms(&rooms, sleep, wake);

    if visible.is_empty() {
        println!("No rooms match.");
    }
    for room in &visible {
        println!(
            "{}  {}  {} participants  {} coins  [{}]",
            room.window.format_range(),
            room.name,
            room.participants,
            room.total_coin,
            room.id
        );
    }

    Ok(())
}
