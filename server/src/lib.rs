//! Todo Server Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - api: HTTP route handlers

pub mod api;
mod config;
mod domain;
mod repository;

#[cfg(test)]
mod contract_tests;

pub use config::ServerConfig;
use repository::TodoRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: TodoRepository,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            repo: TodoRepository::new(),
        }
    }
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new();
    let router = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "todo server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
