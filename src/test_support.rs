//! In-memory [`NoteStore`] used by the route tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    model::{Note, User},
    store::{NoteStore, StoreError},
};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    notes: Vec<Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_user(&self, name: &str) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|user| user.name == name) {
            return Err(StoreError::DuplicateUser);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|user| user.name == name).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.clone())
    }

    async fn create_note(
        &self,
        content: &str,
        category: &str,
        user_id: Uuid,
    ) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let note = Note {
            id: Uuid::new_v4(),
            content: content.to_owned(),
            category: category.to_owned(),
            user_id,
        };
        inner.notes.push(note.clone());
        Ok(note)
    }

    async fn list_notes(&self) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.notes.clone())
    }

    async fn list_notes_for_user(&self, user_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .notes
            .iter()
            .filter(|note| note.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_notes_by_category(&self, category: &str) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .notes
            .iter()
            .filter(|note| note.category == category)
            .cloned()
            .collect())
    }

    async fn find_note(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .notes
            .iter()
            .find(|note| note.id == id && note.user_id == user_id)
            .cloned())
    }

    async fn update_note(
        &self,
        id: Uuid,
        user_id: Uuid,
        content: Option<&str>,
        category: Option<&str>,
    ) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let note = inner
            .notes
            .iter_mut()
            .find(|note| note.id == id && note.user_id == user_id);
        Ok(note.map(|note| {
            if let Some(content) = content {
                note.content = content.to_owned();
            }
            if let Some(category) = category {
                note.category = category.to_owned();
            }
            note.clone()
        }))
    }

    async fn delete_note(&self, id: Uuid, user_id: Uuid) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let position = inner
            .notes
            .iter()
            .position(|note| note.id == id && note.user_id == user_id);
        Ok(position.map(|position| inner.notes.remove(position)))
    }
}
