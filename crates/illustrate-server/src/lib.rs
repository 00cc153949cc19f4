mod cors;
mod health;
mod page;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, response::Html, routing::get};
use illustrate_config::Config;
use tower_http::trace::TraceLayer;

pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Assemble the UI page, API routes and middleware
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot be built
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address();

        let generator = illustrate_imagegen::build_generator(config)?;
        let index: Arc<str> = page::render(generator.status()).into();

        let mut app = Router::new().route(
            "/",
            get(move || {
                let index = Arc::clone(&index);
                async move { Html(index.to_string()) }
            }),
        );

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        app = app.merge(illustrate_imagegen::endpoint_router().with_state(generator));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve until `shutdown` is cancelled
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn get_text(router: Router, path: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_page_and_health() {
        let router = Server::new(&Config::default()).unwrap().into_router();

        let (status, body) = get_text(router.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>IllustrateLab</title>"));
        assert!(body.contains("Mock only"));

        let (status, body) = get_text(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn health_route_can_be_disabled() {
        let config = Config::parse("[server.health]\nenabled = false").unwrap();
        let router = Server::new(&config).unwrap().into_router();

        let (status, _) = get_text(router, "/health").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let config = Config::parse("[server.cors]\norigins = [\"http://localhost:5173\"]").unwrap();
        let router = Server::new(&config).unwrap().into_router();

        let response = router
            .oneshot(
                Request::options("/api/generate")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }
}
