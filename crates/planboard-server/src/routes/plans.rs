use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planboard_core::plan::Plan;
use planboard_core::PlanError;

use crate::body;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/plans — the full collection in stored order.
pub async fn list_plans(State(app): State<AppState>) -> Result<Json<Vec<Plan>>, AppError> {
    let plans = tokio::task::spawn_blocking(move || app.plans.read_all())
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(plans))
}

/// POST /api/plans — append a new record with a fresh id and
/// `completed = false`.
pub async fn create_plan(
    State(app): State<AppState>,
    bytes: Bytes,
) -> Result<(StatusCode, Json<Plan>), AppError> {
    let fields = body::require_object(&bytes)?;

    let lock = app.write_lock.clone();
    let _guard = lock.lock().await;
    let created = tokio::task::spawn_blocking(move || {
        let mut plans = app.plans.read_all()?;
        let plan = Plan::create(fields);
        plans.push(plan.clone());
        app.plans.write_all(&plans)?;
        Ok::<_, PlanError>(plan)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!("added plan: {}", created.title());
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/plans — replace the whole collection (bulk import).
pub async fn import_plans(
    State(app): State<AppState>,
    bytes: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let plans = body::require_plans(&bytes)?;
    let count = plans.len();

    let lock = app.write_lock.clone();
    let _guard = lock.lock().await;
    tokio::task::spawn_blocking(move || app.plans.write_all(&plans))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!("imported {count} plans");
    Ok(Json(serde_json::json!({ "success": true, "count": count })))
}

/// PUT /api/plans/{id} — shallow-merge the body onto the matching record.
pub async fn update_plan(
    State(app): State<AppState>,
    Path(id): Path<String>,
    bytes: Bytes,
) -> Result<Json<Plan>, AppError> {
    let patch = body::require_object(&bytes)?;

    let lock = app.write_lock.clone();
    let _guard = lock.lock().await;
    let updated = tokio::task::spawn_blocking(move || {
        let mut plans = app.plans.read_all()?;
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PlanError::PlanNotFound)?;
        plan.merge(&patch);
        let updated = plan.clone();
        app.plans.write_all(&plans)?;
        Ok::<_, PlanError>(updated)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!("updated plan: {}", updated.title());
    Ok(Json(updated))
}

/// DELETE /api/plans/{id} — remove the matching record; an absent id is a
/// no-op, not an error.
pub async fn delete_plan(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let lock = app.write_lock.clone();
    let _guard = lock.lock().await;
    let removed = tokio::task::spawn_blocking(move || {
        let mut plans = app.plans.read_all()?;
        let removed = plans
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title().to_string());
        plans.retain(|p| p.id != id);
        app.plans.write_all(&plans)?;
        Ok::<_, PlanError>(removed)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if let Some(title) = removed {
        tracing::info!("deleted plan: {title}");
    }
    Ok(Json(serde_json::json!({ "success": true })))
}

/// PATCH /api/plans/{id} — flip the completed flag on the matching record.
pub async fn toggle_plan(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Plan>, AppError> {
    let lock = app.write_lock.clone();
    let _guard = lock.lock().await;
    let updated = tokio::task::spawn_blocking(move || {
        let mut plans = app.plans.read_all()?;
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PlanError::PlanNotFound)?;
        plan.toggle();
        let updated = plan.clone();
        app.plans.write_all(&plans)?;
        Ok::<_, PlanError>(updated)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(
        "{} plan: {}",
        if updated.completed { "completed" } else { "reopened" },
        updated.title()
    );
    Ok(Json(updated))
}
