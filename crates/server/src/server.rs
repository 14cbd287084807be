use axum::{
    Router,
    routing::{get, post, put},
};

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{budgets, categories, expenses, export, queries, statistics};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}

async fn health() -> &'static str {
    "Expense Tracker API is running!"
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/expenses", post(expenses::create).get(expenses::list))
        .route("/expenses/total", get(statistics::total))
        .route("/expenses/breakdown", get(statistics::breakdown))
        .route("/expenses/filter", get(queries::filter))
        .route("/expenses/search", get(queries::search))
        .route("/expenses/tags", get(queries::tags))
        .route("/expenses/export", get(export::csv))
        .route(
            "/expenses/{id}",
            put(expenses::update).delete(expenses::remove),
        )
        .route("/budgets", get(budgets::list).post(budgets::set))
        .route("/categories", get(categories::list))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine))).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
