use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Form, Json, Router,
};
use portfolio_core_contact_contracts::{
    validate::ContactRejection, ContactFeatureService, ContactSubmitError, ContactSubmitOutcome,
};

use crate::{
    errors::{error, error_with, internal_server_error},
    models::contact::{ApiCaptcha, ApiContactFieldErrors, ApiContactMessage, ApiContactSubmission},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/contact/captcha", routing::get(captcha))
        .with_state(service)
}

async fn captcha(service: State<Arc<impl ContactFeatureService>>) -> Response {
    Json(ApiCaptcha {
        prompt: service.get_captcha_prompt(),
    })
    .into_response()
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Form(submission): Form<ApiContactSubmission>,
) -> Response {
    match service.submit(submission.into()).await {
        Ok(ContactSubmitOutcome::Accepted(message)) => {
            Json(ApiContactMessage::from(message)).into_response()
        }
        Ok(ContactSubmitOutcome::Rejected(ContactRejection::Honeypot)) => {
            error(StatusCode::BAD_REQUEST, "Submission rejected")
        }
        Ok(ContactSubmitOutcome::Rejected(ContactRejection::Invalid(errors))) => error_with(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid submission",
            ApiContactFieldErrors::from(errors),
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core_contact_contracts::{
        validate::{ContactField, ContactFieldError, ContactSubmission},
        MockContactFeatureService,
    };
    use portfolio_demo::contact::CONTACT_MESSAGE_JOHN;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::routes::test_utils::serve;

    fn form() -> [(&'static str, &'static str); 6] {
        [
            ("name", "John Doe"),
            ("email", "JOHN@Example.com"),
            ("phone", "+1234567890"),
            ("message", "This is a valid test message."),
            ("website", ""),
            ("captcha", "8"),
        ]
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "John Doe".into(),
            email: "JOHN@Example.com".into(),
            phone: "+1234567890".into(),
            message: "This is a valid test message.".into(),
            website: "".into(),
            captcha: "8".into(),
        }
    }

    #[tokio::test]
    async fn captcha() {
        // Arrange
        let service = MockContactFeatureService::new().with_get_captcha_prompt("What is 5 + 3?");
        let url = serve(router(Arc::new(service))).await;

        // Act
        let response = reqwest::get(format!("{url}/contact/captcha")).await.unwrap();

        // Assert
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            json!({"prompt": "What is 5 + 3?"})
        );
    }

    #[tokio::test]
    async fn accepted() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            submission(),
            Ok(ContactSubmitOutcome::Accepted(CONTACT_MESSAGE_JOHN.clone())),
        );
        let url = serve(router(Arc::new(service))).await;

        // Act
        let response = reqwest::Client::new()
            .post(format!("{url}/contact"))
            .form(&form())
            .send()
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), 200);
        let body = response.json::<serde_json::Value>().await.unwrap();
        assert_eq!(body["email"], "john@example.com");
        assert_eq!(body["phone"], "+1234567890");
        assert_eq!(body["is_read"], false);
    }

    #[tokio::test]
    async fn invalid() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ContactSubmission {
                email: "".into(),
                captcha: "7".into(),
                ..submission()
            },
            Ok(ContactSubmitOutcome::Rejected(ContactRejection::Invalid(
                [
                    (ContactField::Email, vec![ContactFieldError::Required]),
                    (ContactField::Captcha, vec![ContactFieldError::IncorrectAnswer]),
                ]
                .into(),
            ))),
        );
        let url = serve(router(Arc::new(service))).await;

        // Act
        let response = reqwest::Client::new()
            .post(format!("{url}/contact"))
            .form(&[
                ("name", "John Doe"),
                ("phone", "+1234567890"),
                ("message", "This is a valid test message."),
                ("captcha", "7"),
            ])
            .send()
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), 422);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            json!({
                "detail": "Invalid submission",
                "errors": {
                    "email": ["required"],
                    "captcha": ["incorrect answer"],
                },
            })
        );
    }

    #[tokio::test]
    async fn honeypot() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ContactSubmission {
                website: "http://spam.example".into(),
                ..submission()
            },
            Ok(ContactSubmitOutcome::Rejected(ContactRejection::Honeypot)),
        );
        let url = serve(router(Arc::new(service))).await;

        let mut form = form();
        form[4].1 = "http://spam.example";

        // Act
        let response = reqwest::Client::new()
            .post(format!("{url}/contact"))
            .form(&form)
            .send()
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), 400);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            json!({"detail": "Submission rejected"})
        );
    }
}
