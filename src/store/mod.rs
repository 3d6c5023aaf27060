// Persistence seams for users and notes

use crate::core::errors::StoreError;
use crate::core::models::{NewNote, NewUser, Note, NoteId, NotePatch, User, UserId};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::{PgNoteStore, PgUserStore};

/// Credential store ("users" collection)
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
    /// Fails with `StoreError::DuplicateEmail` when the email is taken
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Note store ("notes" collection)
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Notes owned by `owner`, in store order
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError>;
    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError>;
    async fn insert(&self, new_note: NewNote) -> Result<Note, StoreError>;
    /// Apply only the fields present in `patch`, atomically; `None` if the note is gone
    async fn update(&self, id: NoteId, patch: NotePatch) -> Result<Option<Note>, StoreError>;
    /// Remove a note and return its last content; `None` if it is gone
    async fn delete(&self, id: NoteId) -> Result<Option<Note>, StoreError>;
}
