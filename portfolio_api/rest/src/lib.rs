use std::net::IpAddr;

use anyhow::Context;
use axum::Router;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_health_contracts::HealthFeatureService;
use portfolio_core_newsletter_contracts::NewsletterFeatureService;
use portfolio_core_showcase_contracts::ShowcaseFeatureService;
use portfolio_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact, Newsletter, Showcase> {
    health: Health,
    contact: Contact,
    newsletter: Newsletter,
    showcase: Showcase,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl<Health, Contact, Newsletter, Showcase> RestServer<Health, Contact, Newsletter, Showcase>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Newsletter: NewsletterFeatureService,
    Showcase: ShowcaseFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port } = self.config;
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::newsletter::router(self.newsletter.into()))
            .merge(routes::showcase::router(self.showcase.into()));

        // the request id has to be assigned before the trace span is created
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
