//! Author Service Library
//!
//! REST service for author registration, approval and login, with book
//! operations forwarded to the book and book-content services.

pub mod api;
pub mod clients;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::clients::{build_http_client, HttpBookClient, HttpBookContentClient, OAuthIdentityProvider};
use crate::config::AuthorServiceConfig;
use crate::infra::Database;
use crate::repository::AuthorStore;
use crate::service::AuthorManager;

/// Run the HTTP server. `host` and `port` override the environment settings.
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AuthorServiceConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AuthorServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

async fn run_server_with_config(config: AuthorServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;
    let author_repo = Arc::new(AuthorStore::new(db.get_connection()));

    // Downstream clients share one connection pool
    let http = build_http_client(&config.http_client)?;
    let books = Arc::new(HttpBookClient::new(http.clone(), &config.book_service_url));
    let book_content = Arc::new(HttpBookContentClient::new(
        http.clone(),
        &config.book_content_service_url,
    ));
    let identity = Arc::new(OAuthIdentityProvider::new(http, config.identity.clone()));

    let author_service = Arc::new(AuthorManager::new(author_repo, books, book_content, identity));
    let app = create_router(AppState::new(author_service));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Author service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
