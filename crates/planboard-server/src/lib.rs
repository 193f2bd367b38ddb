pub mod body;
pub mod error;
pub mod routes;
pub mod state;
pub mod static_files;

use axum::routing::{get, put};
use axum::Router;
use planboard_core::store::PlanStore;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware, backed by the
/// flat-file store under `root`. Seeds `data.json` and `goals.json` when
/// they are missing.
pub fn build_router(root: PathBuf) -> anyhow::Result<Router> {
    Ok(router_for(state::AppState::new(root)?))
}

/// Build the router over an injected store. Integration tests pass a
/// `MemoryStore`; a future embedded store slots in here without touching
/// any routing logic.
pub fn build_router_with_store(root: PathBuf, plans: Arc<dyn PlanStore>) -> Router {
    router_for(state::AppState::with_store(root, plans))
}

fn router_for(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unrouted methods on API paths fall through to the static responder,
    // the same as unknown paths.
    Router::new()
        // Plans
        .route(
            "/api/plans",
            get(routes::plans::list_plans)
                .post(routes::plans::create_plan)
                .put(routes::plans::import_plans)
                .fallback(static_files::static_handler),
        )
        .route(
            "/api/plans/{id}",
            put(routes::plans::update_plan)
                .delete(routes::plans::delete_plan)
                .patch(routes::plans::toggle_plan)
                .fallback(static_files::static_handler),
        )
        // Goals
        .route(
            "/api/goals",
            get(routes::goals::get_goals).fallback(static_files::static_handler),
        )
        .route(
            "/api/goals/{year}",
            put(routes::goals::update_goals).fallback(static_files::static_handler),
        )
        .fallback(static_files::static_handler)
        .layer(cors)
        .with_state(app_state)
}

/// Start the planboard server.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let app = build_router(root)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("planboard listening on http://localhost:{port}");

    if open_browser {
        let url = format!("http://localhost:{port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the planboard server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0`
/// and the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root)?;

    tracing::info!("planboard listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
