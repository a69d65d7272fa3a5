pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    repo::{DirectorRepo, GenreRepo, MovieRepo},
    routes::{directors, genres, movies},
};

/// Storage handles shared by every handler.
pub struct AppState {
    pub movies: MovieRepo,
    pub directors: DirectorRepo,
    pub genres: GenreRepo,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            movies: MovieRepo::new(db.clone()),
            directors: DirectorRepo::new(db.clone()),
            genres: GenreRepo::new(db),
        }
    }
}

/// Builds the route table. Every collection and item path is registered with
/// and without a trailing slash.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route("/movies/{id}", get(movies::get).put(movies::replace).delete(movies::delete))
        .route("/movies/{id}/", get(movies::get).put(movies::replace).delete(movies::delete))
        .route("/directors", get(directors::list).post(directors::create))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/{id}",
            get(directors::get).put(directors::replace).delete(directors::delete),
        )
        .route(
            "/directors/{id}/",
            get(directors::get).put(directors::replace).delete(directors::delete),
        )
        .route("/genres", get(genres::list).post(genres::create))
        .route("/genres/", get(genres::list).post(genres::create))
        .route("/genres/{id}", get(genres::get).put(genres::replace).delete(genres::delete))
        .route("/genres/{id}/", get(genres::get).put(genres::replace).delete(genres::delete))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
