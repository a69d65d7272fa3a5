//! Wire representations of the catalog entities.
//!
//! Outgoing views list exactly the fields exposed over HTTP. A lookup miss
//! renders as the `Default` view, every field null.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    entities::{director, genre, movie},
    error::AppResult,
};

/// Decodes a request body that must be a JSON object. Derived struct
/// deserializers also take arrays positionally, so the shape is checked first.
pub fn from_json_object<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    match serde_json::from_slice(body)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        _ => Err(anyhow::anyhow!("request body is not a JSON object").into()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MovieView {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieView {
    fn from(m: movie::Model) -> Self {
        Self {
            id: Some(m.id),
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

/// Director and genre share the `{id, name}` shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NamedView {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl From<director::Model> for NamedView {
    fn from(m: director::Model) -> Self {
        Self { id: Some(m.id), name: m.name }
    }
}

impl From<genre::Model> for NamedView {
    fn from(m: genre::Model) -> Self {
        Self { id: Some(m.id), name: m.name }
    }
}

/// Every writable movie column. Omitted keys deserialize to `None`, which is
/// what a full replace stores.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovieFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Body of `POST /movies/`. Keys map straight onto columns, so anything that
/// is not a column is rejected.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewMovie {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl NewMovie {
    pub fn into_parts(self) -> (Option<i32>, MovieFields) {
        let fields = MovieFields {
            title: self.title,
            description: self.description,
            trailer: self.trailer,
            year: self.year,
            rating: self.rating,
            genre_id: self.genre_id,
            director_id: self.director_id,
        };
        (self.id, fields)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NameFields {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewNamed {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl NewNamed {
    pub fn into_parts(self) -> (Option<i32>, NameFields) {
        (self.id, NameFields { name: self.name })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

/// Raw `GET /movies/` query string. Values stay textual so an empty value can
/// be treated as absent before integer parsing.
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

impl TryFrom<MovieQuery> for MovieFilter {
    type Error = anyhow::Error;

    fn try_from(q: MovieQuery) -> anyhow::Result<Self> {
        Ok(Self {
            director_id: parse_id_param("director_id", q.director_id)?,
            genre_id: parse_id_param("genre_id", q.genre_id)?,
        })
    }
}

fn parse_id_param(name: &str, raw: Option<String>) -> anyhow::Result<Option<i32>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|err| anyhow::anyhow!("query parameter {name}={value:?}: {err}")),
    }
}

#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub title: &'static str,
    pub description: &'static str,
    pub namespaces: Vec<Namespace>,
}

#[derive(Debug, Serialize)]
pub struct Namespace {
    pub name: &'static str,
    pub description: &'static str,
}
