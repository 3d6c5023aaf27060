// Core data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Store-assigned user identifier
pub type UserId = Uuid;

/// Store-assigned note identifier
pub type NoteId = Uuid;

/// Persisted user record
///
/// Not `Serialize`: the password hash must never reach a response.
/// Use [`UserProfile`] for anything that leaves the service.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub date: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<REDACTED>")
            .field("date", &self.date)
            .finish()
    }
}

/// User fields supplied on signup; the store assigns `id` and `date`
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User record with the password hash projected out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            date: user.date,
        }
    }
}

/// Persisted note record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    /// Owner, fixed at creation
    #[serde(rename = "user")]
    pub owner: UserId,
    pub title: String,
    pub desc: String,
    pub tag: Option<String>,
    pub date: DateTime<Utc>,
}

/// Note fields supplied on creation; the store assigns `id` and `date`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub owner: UserId,
    pub title: String,
    pub desc: String,
    pub tag: Option<String>,
}

/// Sparse update: only present fields overwrite the stored note
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl NotePatch {
    /// Apply present fields; absent fields are left untouched
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(desc) = self.desc {
            note.desc = desc;
        }
        if let Some(tag) = self.tag {
            note.tag = Some(tag);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.desc.is_none() && self.tag.is_none()
    }
}

/// Request body for POST /auth/signup
#[derive(Clone, Default, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Request body for POST /auth/login
///
/// `password` stays optional so that "absent" and "empty" can be told apart.
#[derive(Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Success body for signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_name: String,
}

/// Request body for POST /notes/addnote
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Success body for DELETE /notes/deleteNote/:id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteResponse {
    pub message: String,
    pub deleted_note: Note,
}
