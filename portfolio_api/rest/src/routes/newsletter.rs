use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_newsletter_contracts::{NewsletterFeatureService, NewsletterSubscribeError};
use portfolio_models::email_address::EmailAddress;
use serde::Deserialize;

use crate::errors::{error, internal_server_error};

pub fn router(service: Arc<impl NewsletterFeatureService>) -> Router<()> {
    Router::new()
        .route("/newsletter/subscribe", routing::post(subscribe))
        .with_state(service)
}

#[derive(Deserialize)]
struct SubscribeRequest {
    email: String,
}

async fn subscribe(
    service: State<Arc<impl NewsletterFeatureService>>,
    Json(SubscribeRequest { email }): Json<SubscribeRequest>,
) -> Response {
    let Ok(email) = email.trim().parse::<EmailAddress>() else {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "Invalid email");
    };

    match service.subscribe(email).await {
        Ok(_) => Json(true).into_response(),
        Err(NewsletterSubscribeError::AlreadySubscribed) => {
            error(StatusCode::CONFLICT, "Already subscribed")
        }
        Err(NewsletterSubscribeError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core_newsletter_contracts::MockNewsletterFeatureService;
    use portfolio_demo::newsletter::SUBSCRIPTION_ALICE;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::routes::test_utils::serve;

    async fn post(url: &str, email: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{url}/newsletter/subscribe"))
            .json(&json!({"email": email}))
            .send()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockNewsletterFeatureService::new().with_subscribe(
            SUBSCRIPTION_ALICE.email.clone(),
            Ok(SUBSCRIPTION_ALICE.clone()),
        );
        let url = serve(router(Arc::new(service))).await;

        // Act
        let response = post(&url, " alice@example.com ").await;

        // Assert
        assert_eq!(response.status(), 200);
        assert!(response.json::<bool>().await.unwrap());
    }

    #[tokio::test]
    async fn already_subscribed() {
        // Arrange
        let service = MockNewsletterFeatureService::new().with_subscribe(
            SUBSCRIPTION_ALICE.email.clone(),
            Err(NewsletterSubscribeError::AlreadySubscribed),
        );
        let url = serve(router(Arc::new(service))).await;

        // Act
        let response = post(&url, "alice@example.com").await;

        // Assert
        assert_eq!(response.status(), 409);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            json!({"detail": "Already subscribed"})
        );
    }

    #[tokio::test]
    async fn invalid_email() {
        // Arrange
        let url = serve(router(Arc::new(MockNewsletterFeatureService::new()))).await;

        // Act
        let response = post(&url, "not-an-email").await;

        // Assert
        assert_eq!(response.status(), 422);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            json!({"detail": "Invalid email"})
        );
    }
}
