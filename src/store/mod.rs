use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Note, User};

mod pg;

pub use pg::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// User names are unique; a second insert with the same name is rejected.
    #[error("user name already taken")]
    DuplicateUser,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Data-access contract for the two collections. Note lookups are always
/// scoped to the owning user's id, so a note id alone never grants access
/// across users.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create_user(&self, name: &str) -> Result<User, StoreError>;

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn create_note(
        &self,
        content: &str,
        category: &str,
        user_id: Uuid,
    ) -> Result<Note, StoreError>;

    async fn list_notes(&self) -> Result<Vec<Note>, StoreError>;

    async fn list_notes_for_user(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError>;

    async fn list_notes_by_category(&self, category: &str) -> Result<Vec<Note>, StoreError>;

    async fn find_note(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError>;

    /// Updates only the provided fields and returns the post-update note,
    /// or `None` when no note matches the id/owner pair.
    async fn update_note(
        &self,
        id: Uuid,
        user_id: Uuid,
        content: Option<&str>,
        category: Option<&str>,
    ) -> Result<Option<Note>, StoreError>;

    /// Returns the deleted note, or `None` when no note matches.
    async fn delete_note(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError>;
}
