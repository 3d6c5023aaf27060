//! Note ownership handler.
//!
//! A note is visible, mutable and deletable only by its owner. Update and
//! delete check existence before ownership, so a non-owner probing a missing
//! id sees `NotFound` rather than `Forbidden`.

use crate::core::errors::NotesError;
use crate::core::models::{
    CreateNoteRequest, DeleteNoteResponse, NewNote, Note, NoteId, NotePatch, UserId,
};
use crate::core::validation::ValidationErrors;
use crate::store::NoteStore;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub const MIN_TITLE_LENGTH: usize = 5;
pub const MIN_DESC_LENGTH: usize = 5;

pub const SHORT_TITLE_MESSAGE: &str = "Title length must be at least 5 characters";
pub const SHORT_DESC_MESSAGE: &str = "Description length must be at least 5 characters";
pub const DELETED_MESSAGE: &str = "Note deleted successfully";

/// Parse a path identifier; anything that is not a UUID names no note
pub fn parse_note_id(raw: &str) -> Result<NoteId, NotesError> {
    Uuid::parse_str(raw).map_err(|_| NotesError::NotFound)
}

pub struct NoteService {
    notes: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        Self { notes }
    }

    pub async fn list(&self, owner: UserId) -> Result<Vec<Note>, NotesError> {
        Ok(self.notes.list_by_owner(owner).await?)
    }

    pub async fn create(&self, owner: UserId, request: CreateNoteRequest) -> Result<Note, NotesError> {
        let mut errors = ValidationErrors::new();
        errors
            .min_length("title", &request.title, MIN_TITLE_LENGTH, SHORT_TITLE_MESSAGE)
            .min_length("desc", &request.desc, MIN_DESC_LENGTH, SHORT_DESC_MESSAGE);
        errors.into_result()?;

        let note = self
            .notes
            .insert(NewNote {
                owner,
                title: request.title,
                desc: request.desc,
                tag: request.tag,
            })
            .await?;

        info!(user_id = %owner, note_id = %note.id, "Note created");
        Ok(note)
    }

    /// Apply a sparse patch to a note owned by `owner`
    pub async fn update(&self, owner: UserId, note_id: &str, patch: NotePatch) -> Result<Note, NotesError> {
        let mut errors = ValidationErrors::new();
        if let Some(ref title) = patch.title {
            errors.min_length("title", title, MIN_TITLE_LENGTH, SHORT_TITLE_MESSAGE);
        }
        if let Some(ref desc) = patch.desc {
            errors.min_length("desc", desc, MIN_DESC_LENGTH, SHORT_DESC_MESSAGE);
        }
        errors.into_result()?;

        let note = self.find_owned(owner, note_id).await?;

        // Deleted between lookup and write
        let updated = self.notes.update(note.id, patch).await?.ok_or(NotesError::NotFound)?;

        info!(user_id = %owner, note_id = %updated.id, "Note updated");
        Ok(updated)
    }

    /// Remove a note owned by `owner`, returning its last content
    pub async fn delete(&self, owner: UserId, note_id: &str) -> Result<DeleteNoteResponse, NotesError> {
        let note = self.find_owned(owner, note_id).await?;
        let deleted = self.notes.delete(note.id).await?.ok_or(NotesError::NotFound)?;

        info!(user_id = %owner, note_id = %deleted.id, "Note deleted");
        Ok(DeleteNoteResponse {
            message: DELETED_MESSAGE.to_string(),
            deleted_note: deleted,
        })
    }

    /// Existence first, then ownership
    async fn find_owned(&self, owner: UserId, note_id: &str) -> Result<Note, NotesError> {
        let id = parse_note_id(note_id)?;
        let note = self.notes.find_by_id(id).await?.ok_or(NotesError::NotFound)?;

        if note.owner != owner {
            warn!(user_id = %owner, note_id = %id, "Access to foreign note denied");
            return Err(NotesError::Forbidden);
        }
        Ok(note)
    }
}
