use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use editor::config::Config;
use editor::gateway::StoreClient;
use editor::layout::LayoutType;

/// Smoke entrypoint: authenticates against the record store and logs what
/// the editor would hydrate on startup. The actual editor UI lives in the
/// web front end; this binary exercises the data layer end to end.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting signage editor core v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "{} layout types in catalog, {} fonts offered",
        LayoutType::ALL.len(),
        editor::fonts::all_fonts().len()
    );

    let mut store = StoreClient::new(&config.store_url);
    store
        .authenticate(&config.store_identity, &config.store_password)
        .await?;

    let campaigns = store.get_campaigns().await?;
    info!("{} campaigns", campaigns.len());
    for campaign in &campaigns {
        let expanded = campaign
            .expand
            .as_ref()
            .map(|e| e.layouts.len())
            .unwrap_or(0);
        info!(
            "  {}: {} ({} layouts, {} expanded)",
            campaign.id,
            campaign.name,
            campaign.layouts.len(),
            expanded
        );
    }

    let layouts = store.get_layouts().await?;
    info!("{} layouts", layouts.len());

    Ok(())
}
