use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::{
    AppState,
    error::AppResult,
    models::{MovieFilter, MovieQuery, MovieView, NewMovie, from_json_object},
    routes::RecordId,
};

pub async fn list(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MovieQuery>, QueryRejection>,
) -> AppResult<Json<Vec<MovieView>>> {
    let Query(q) = query.map_err(anyhow::Error::new)?;
    let filter = MovieFilter::try_from(q)?;
    let movies = state.movies.list(filter).await?;
    Ok(Json(movies.into_iter().map(MovieView::from).collect()))
}

pub async fn create(State(state): State<Arc<AppState>>, body: Bytes) -> AppResult<StatusCode> {
    let (id, fields) = from_json_object::<NewMovie>(&body)?.into_parts();
    state.movies.insert(id, fields).await?;
    Ok(StatusCode::CREATED)
}

/// A miss is not an error here: the body is a movie with every field null.
pub async fn get(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> AppResult<Json<MovieView>> {
    let movie = state.movies.get(id).await?;
    Ok(Json(movie.map(MovieView::from).unwrap_or_default()))
}

pub async fn replace(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    body: Bytes,
) -> AppResult<StatusCode> {
    // The body is decoded only after the row is found, so an unknown id is a
    // 404 whatever the payload.
    state.movies.replace(id, || from_json_object(&body)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
