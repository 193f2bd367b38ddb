use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use planboard_core::goals::Goals;
use planboard_core::{paths, PlanError};

use crate::body;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/goals — the whole goals document, keyed by year.
pub async fn get_goals(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let goals = tokio::task::spawn_blocking(move || Goals::load(&paths::goals_path(&root)))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    Ok(Json(serde_json::Value::Object(goals.0)))
}

/// PUT /api/goals/{year} — replace one year's entry.
pub async fn update_goals(
    State(app): State<AppState>,
    Path(year): Path<String>,
    bytes: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let Some(value) = body::decode(&bytes)? else {
        return Err(PlanError::InvalidBody.into());
    };

    let root = app.root.clone();
    let stored_year = year.clone();
    let lock = app.write_lock.clone();
    let _guard = lock.lock().await;
    tokio::task::spawn_blocking(move || {
        let path = paths::goals_path(&root);
        let mut goals = Goals::load(&path);
        goals.set_year(stored_year, value);
        goals.save(&path)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!("updated goals for {year}");
    Ok(Json(serde_json::json!({ "success": true, "year": year })))
}
