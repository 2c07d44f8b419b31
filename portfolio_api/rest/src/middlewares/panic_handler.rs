use std::panic::AssertUnwindSafe;

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::errors::internal_server_error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => internal_server_error(anyhow!("request handler panicked")),
    }
}

#[cfg(test)]
mod tests {
    use axum::routing;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::routes::test_utils::serve;

    #[tokio::test]
    async fn panic_is_internal_server_error() {
        // Arrange
        let router = add(Router::new().route(
            "/",
            routing::get(|| async {
                if true {
                    panic!("boom");
                }
                "unreachable"
            }),
        ));
        let url = serve(router).await;

        // Act
        let response = reqwest::get(&url).await.unwrap();

        // Assert
        assert_eq!(response.status(), 500);
        assert_eq!(
            response.json::<serde_json::Value>().await.unwrap(),
            serde_json::json!({"detail": "Internal server error"})
        );
    }
}
