use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::config::server_config::ServerConfig;
use crate::dispatcher::{Command, CommandDefinition, Dispatcher, Invocation};
use crate::presenter::Reply;

#[derive(Clone)]
struct AppState {
    dispatcher: Dispatcher,
    token: Arc<str>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    queued: usize,
    capacity: usize,
}

/// HTTP endpoint a platform relay forwards slash-command invocations to
#[derive(Clone)]
pub struct WebServer {
    pub config: ServerConfig,
    dispatcher: Dispatcher,
    token: Arc<str>,
}

impl WebServer {
    pub fn new(config: &ServerConfig, dispatcher: Dispatcher, token: &str) -> Self {
        Self {
            config: config.clone(),
            dispatcher,
            token: Arc::from(token),
        }
    }

    /// Serve until `shutdown` resolves
    pub async fn start<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.create_app();
        let addr: SocketAddr = self.config.bind_address().parse().with_context(|| {
            format!(
                "Invalid server address {}:{}",
                self.config.host, self.config.port
            )
        })?;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(
            "🚀 Interaction server ready and listening on http://{}:{}",
            self.config.host, self.config.port
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("Interaction server failed")?;

        info!("Interaction server stopped");
        Ok(())
    }

    pub fn create_app(&self) -> Router {
        Router::new()
            .route("/interactions", post(handle_interaction))
            .route("/commands", get(list_commands))
            .route("/health", get(health))
            .with_state(AppState {
                dispatcher: self.dispatcher.clone(),
                token: self.token.clone(),
            })
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
    }
}

fn is_authorized(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bot "))
        .is_some_and(|presented| presented == token)
}

async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(invocation): Json<Invocation>,
) -> Result<Json<Reply>, StatusCode> {
    if !is_authorized(&headers, &state.token) {
        warn!("Rejected unauthenticated interaction: {}", invocation.command);
        return Err(StatusCode::UNAUTHORIZED);
    }

    debug!("📨 Interaction {} from {}", invocation.command, invocation.user);
    Ok(Json(state.dispatcher.handle(&invocation)))
}

async fn list_commands() -> Json<Vec<CommandDefinition>> {
    Json(Command::definitions())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let manager = state.dispatcher.manager();
    Json(HealthResponse {
        status: "ok",
        queued: manager.len(),
        capacity: manager.capacity(),
    })
}
