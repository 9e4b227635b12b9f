use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::model::{Note, User};

use super::{NoteStore, StoreError};

/// Postgres error code for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PgStore { pool }
    }
}

fn map_unique_violation(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StoreError::DuplicateUser
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn create_user(&self, name: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("INSERT INTO users (id, name) VALUES ($1, $2) RETURNING id, name")
            .bind(Uuid::new_v4())
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_unique_violation)
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name FROM users WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create_note(
        &self,
        content: &str,
        category: &str,
        user_id: Uuid,
    ) -> Result<Note, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, content, category, user_id) VALUES ($1, $2, $3, $4) \
             RETURNING id, content, category, user_id",
        )
        .bind(Uuid::new_v4())
        .bind(content)
        .bind(category)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }

    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>("SELECT id, content, category, user_id FROM notes")
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn list_notes_for_user(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, content, category, user_id FROM notes WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn list_notes_by_category(&self, category: &str) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, content, category, user_id FROM notes WHERE category = $1",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn find_note(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, content, category, user_id FROM notes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn update_note(
        &self,
        id: Uuid,
        user_id: Uuid,
        content: Option<&str>,
        category: Option<&str>,
    ) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "UPDATE notes SET content = COALESCE($3, content), category = COALESCE($4, category) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING id, content, category, user_id",
        )
        .bind(id)
        .bind(user_id)
        .bind(content)
        .bind(category)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn delete_note(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "DELETE FROM notes WHERE id = $1 AND user_id = $2 \
             RETURNING id, content, category, user_id",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }
}
