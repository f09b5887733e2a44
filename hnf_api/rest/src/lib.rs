use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use hnf_core_contact_contracts::ContactFeatureService;
use hnf_core_health_contracts::HealthFeatureService;
use hnf_core_sitemap_contracts::SitemapFeatureService;
use hnf_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact, Sitemap> {
    config: RestServerConfig,
    health: Health,
    contact: Contact,
    sitemap: Sitemap,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
}

impl<Health, Contact, Sitemap> RestServer<Health, Contact, Sitemap>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Sitemap: SitemapFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;

        info!("Starting REST API server on {addr}");
        axum::serve(listener, self.router())
            .await
            .context("Failed to start HTTP server")
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::sitemap::router(self.sitemap.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
