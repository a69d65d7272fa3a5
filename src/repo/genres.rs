use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::{
    entities::genre,
    error::{AppError, AppResult},
    models::NameFields,
};

#[derive(Clone)]
pub struct GenreRepo {
    db: DatabaseConnection,
}

impl GenreRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn insert(&self, id: Option<i32>, fields: NameFields) -> AppResult<i32> {
        let mut model = genre::ActiveModel { id: Default::default(), name: Set(fields.name) };
        if let Some(id) = id {
            model.id = Set(id);
        }

        let id = genre::Entity::insert(model).exec(&self.db).await?.last_insert_id;
        tracing::debug!(id, "genre created");
        Ok(id)
    }

    pub async fn replace<F>(&self, id: i32, fields: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<NameFields>,
    {
        let txn = self.db.begin().await?;

        let Some(existing) = genre::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound);
        };
        let fields = fields()?;

        let mut model: genre::ActiveModel = existing.into();
        model.name = Set(fields.name);
        model.update(&txn).await?;

        txn.commit().await?;
        tracing::debug!(id, "genre replaced");
        Ok(())
    }

    /// Movies pointing at a deleted genre keep their dangling `genre_id`.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if genre::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound);
        }
        genre::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        tracing::debug!(id, "genre deleted");
        Ok(())
    }
}
