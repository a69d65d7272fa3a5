pub mod directors;
pub mod genres;
pub mod movies;

use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{
    error::AppError,
    models::{ApiIndex, Namespace},
};

pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        title: "Movies API",
        description: "A simple REST API for movies",
        namespaces: vec![
            Namespace { name: "movies", description: "Movies Base" },
            Namespace { name: "directors", description: "Directors List" },
            Namespace { name: "genres", description: "Genres List" },
        ],
    })
}

/// Item id from the path. Only unsigned decimal ids that fit an `i32` match;
/// anything else is answered as a missing route.
#[derive(Clone, Copy, Debug)]
pub struct RecordId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for RecordId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        parse_record_id(&raw).map(Self).ok_or(AppError::NotFound)
    }
}

fn parse_record_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_record_id;

    #[test]
    fn record_ids_are_unsigned_i32() {
        assert_eq!(parse_record_id("42"), Some(42));
        assert_eq!(parse_record_id("2147483647"), Some(i32::MAX));
        assert_eq!(parse_record_id("2147483648"), None);
        assert_eq!(parse_record_id("4294967296"), None);
        assert_eq!(parse_record_id("-1"), None);
        assert_eq!(parse_record_id("+1"), None);
        assert_eq!(parse_record_id("abc"), None);
        assert_eq!(parse_record_id(""), None);
    }
}
