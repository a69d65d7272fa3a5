use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::{
    entities::director,
    error::{AppError, AppResult},
    models::NameFields,
};

#[derive(Clone)]
pub struct DirectorRepo {
    db: DatabaseConnection,
}

impl DirectorRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().all(&self.db).await?)
    }

    pub async fn insert(&self, id: Option<i32>, fields: NameFields) -> AppResult<i32> {
        let mut model = director::ActiveModel { id: Default::default(), name: Set(fields.name) };
        if let Some(id) = id {
            model.id = Set(id);
        }

        let id = director::Entity::insert(model).exec(&self.db).await?.last_insert_id;
        tracing::debug!(id, "director created");
        Ok(id)
    }

    pub async fn replace<F>(&self, id: i32, fields: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<NameFields>,
    {
        let txn = self.db.begin().await?;

        let Some(existing) = director::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound);
        };
        let fields = fields()?;

        let mut model: director::ActiveModel = existing.into();
        model.name = Set(fields.name);
        model.update(&txn).await?;

        txn.commit().await?;
        tracing::debug!(id, "director replaced");
        Ok(())
    }

    /// Movies pointing at a deleted director keep their dangling `director_id`.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if director::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound);
        }
        director::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        tracing::debug!(id, "director deleted");
        Ok(())
    }
}
