//! Web server for the embed page and the feature picker.
//!
//! - `/embed`: the iframe content, rendered server-side per request
//! - `/`: feature picker and snippet generator
//! - `/api/features`: feature list as JSON
//! - static scripts: height reporting, clipboard copy, host-page loader

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use askama::Template;

use crate::config::Settings;
use crate::error::Result;
use crate::render::EmbedView;
use crate::services::CompatClient;

use template_structs::EmbedTemplate;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub client: CompatClient,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: CompatClient::new(settings)?,
            settings: Arc::new(settings.clone()),
        })
    }
}

/// Render the embed page for a view.
pub fn render_embed_page(view: &EmbedView) -> Result<String> {
    Ok(EmbedTemplate::from_view(view).render()?)
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
