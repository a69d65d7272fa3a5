use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::AppResult,
    models::{NamedView, NewNamed, from_json_object},
    routes::RecordId,
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<NamedView>>> {
    let rows = state.genres.list().await?;
    Ok(Json(rows.into_iter().map(NamedView::from).collect()))
}

pub async fn create(State(state): State<Arc<AppState>>, body: Bytes) -> AppResult<StatusCode> {
    let (id, fields) = from_json_object::<NewNamed>(&body)?.into_parts();
    state.genres.insert(id, fields).await?;
    Ok(StatusCode::CREATED)
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> AppResult<Json<NamedView>> {
    let row = state.genres.get(id).await?;
    Ok(Json(row.map(NamedView::from).unwrap_or_default()))
}

pub async fn replace(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    body: Bytes,
) -> AppResult<StatusCode> {
    state.genres.replace(id, || from_json_object(&body)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    state.genres.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
