//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `kernel::error::AppError`.

mod config;

use auth::{AuthAppState, AuthConfig, InMemoryUserRepository, PgUserRepository, UserRepository};
use axum::{
    Router, http,
    http::{Method, header},
};
use board::{CommentRepository, InMemoryBoardRepository, PgBoardRepository, PostRepository};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,board=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Store selection
    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            routes(
                PgUserRepository::new(pool.clone()),
                PgBoardRepository::new(pool),
                config.auth.clone(),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory stores");
            routes(
                InMemoryUserRepository::new(),
                InMemoryBoardRepository::new(),
                config.auth.clone(),
            )
        }
    };

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Auth and board routes over one user store and one signing key
fn routes<U, B>(users: U, board: B, auth_config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    B: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthAppState::new(users, auth_config);
    let board = board::board_router(board, auth_state.middleware_state());

    auth::auth_router(auth_state).merge(board)
}
