// In-process store used when no DATABASE_URL is configured

use crate::core::errors::StoreError;
use crate::core::models::{NewNote, NewUser, Note, NoteId, NotePatch, User, UserId};
use crate::store::{NoteStore, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Memory-backed user and note store
///
/// Email uniqueness is checked and enforced under the same write lock, so
/// concurrent signups cannot both succeed. Notes keep insertion order.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            date: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| n.owner == owner).cloned().collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn insert(&self, new_note: NewNote) -> Result<Note, StoreError> {
        let note = Note {
            id: Uuid::new_v4(),
            owner: new_note.owner,
            title: new_note.title,
            desc: new_note.desc,
            tag: new_note.tag,
            date: Utc::now(),
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: NoteId, patch: NotePatch) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.write().await;
        Ok(notes.iter_mut().find(|n| n.id == id).map(|stored| {
            patch.apply_to(stored);
            stored.clone()
        }))
    }

    async fn delete(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.write().await;
        let position = notes.iter().position(|n| n.id == id);
        Ok(position.map(|idx| notes.remove(idx)))
    }
}
