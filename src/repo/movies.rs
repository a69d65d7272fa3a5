use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{MovieFields, MovieFilter},
};

#[derive(Clone)]
pub struct MovieRepo {
    db: DatabaseConnection,
}

impl MovieRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Lists movies matching every filter that is present.
    pub async fn list(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn insert(&self, id: Option<i32>, fields: MovieFields) -> AppResult<i32> {
        let mut model = movie::ActiveModel {
            id: Default::default(),
            title: Set(fields.title),
            description: Set(fields.description),
            trailer: Set(fields.trailer),
            year: Set(fields.year),
            rating: Set(fields.rating),
            genre_id: Set(fields.genre_id),
            director_id: Set(fields.director_id),
        };
        if let Some(id) = id {
            model.id = Set(id);
        }

        let id = movie::Entity::insert(model).exec(&self.db).await?.last_insert_id;
        tracing::debug!(id, "movie created");
        Ok(id)
    }

    /// Overwrites every column of an existing movie. `fields` is only
    /// evaluated once the row is known to exist.
    pub async fn replace<F>(&self, id: i32, fields: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<MovieFields>,
    {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound);
        };
        let fields = fields()?;

        let mut model: movie::ActiveModel = existing.into();
        model.title = Set(fields.title);
        model.description = Set(fields.description);
        model.trailer = Set(fields.trailer);
        model.year = Set(fields.year);
        model.rating = Set(fields.rating);
        model.genre_id = Set(fields.genre_id);
        model.director_id = Set(fields.director_id);
        model.update(&txn).await?;

        txn.commit().await?;
        tracing::debug!(id, "movie replaced");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if movie::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound);
        }
        movie::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        tracing::debug!(id, "movie deleted");
        Ok(())
    }
}
