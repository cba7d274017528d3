//! CLI command implementations

use anyhow::Context;
use clap::Subcommand;
use ezma_catalog::CatalogService;
use ezma_core::config::MapConfig;
use ezma_core::{EzmaConfig, LibraryId, LibraryView};
use ezma_web::pages::render_library_page;
use ezma_web::run_server;
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Catalog API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Use demo data for development
        #[arg(long)]
        demo: bool,
    },
    /// Resolve one library page and print it
    Show {
        /// Library id
        id: String,
        /// Book search query
        #[arg(short, long)]
        query: Option<String>,
        /// Print the rendered HTML page instead of JSON
        #[arg(long)]
        html: bool,
        /// Catalog API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Use demo data for development
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Server {
            host,
            port,
            api_url,
            demo,
        } => start_server(host, port, api_url, demo).await,
        Commands::Show {
            id,
            query,
            html,
            api_url,
            demo,
        } => show_library(id, query, html, api_url, demo).await,
    }
}

/// Start the web server
///
/// # Errors
/// - Environment configuration is malformed
/// - Catalog API URL is invalid
/// - Server failed to bind or stopped with an I/O error
pub async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    api_url: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let mut config = load_config(api_url, demo)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let catalog = CatalogService::from_config(&config.api).context("Invalid catalog settings")?;

    if config.api.use_demo_data {
        info!("Serving demo catalog");
    } else {
        info!("Using catalog API at {}", config.api.base_url);
    }

    run_server(config, catalog).await?;
    Ok(())
}

/// Resolve one library page and print it as JSON or HTML
///
/// # Errors
/// - Environment configuration is malformed
/// - Catalog API URL is invalid
/// - View could not be serialized
pub async fn show_library(
    id: String,
    query: Option<String>,
    html: bool,
    api_url: Option<String>,
    demo: bool,
) -> anyhow::Result<()> {
    let config = load_config(api_url, demo)?;
    let catalog = CatalogService::from_config(&config.api).context("Invalid catalog settings")?;

    let view = catalog
        .load_view(&LibraryId::new(id), query.as_deref())
        .await;

    println!("{}", render_view(&view, &config.map, html)?);
    Ok(())
}

fn render_view(view: &LibraryView, map: &MapConfig, html: bool) -> anyhow::Result<String> {
    if html {
        Ok(render_library_page(view, map).0)
    } else {
        Ok(serde_json::to_string_pretty(view)?)
    }
}

fn load_config(api_url: Option<String>, demo: bool) -> anyhow::Result<EzmaConfig> {
    let mut config = EzmaConfig::from_env().context("Invalid environment configuration")?;
    if let Some(url) = api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if demo {
        config.api.use_demo_data = true;
    }
    Ok(config)
}
