// PostgreSQL-backed user and note storage

use crate::core::errors::StoreError;
use crate::core::models::{NewNote, NewUser, Note, NoteId, NotePatch, User, UserId};
use crate::store::{NoteStore, UserStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

/// Idempotent bootstrap statements, executed in order
///
/// The UNIQUE constraint on `users.email` is what actually closes the
/// duplicate-signup race; the pre-insert lookup is only a fast path.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        date TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS notes (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users (id),
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        tag TEXT,
        date TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE INDEX IF NOT EXISTS notes_user_id_idx ON notes (user_id)",
];

const NOTE_COLUMNS: &str = "id, user_id, title, description, tag, date";

/// Open a connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the `users` and `notes` tables if they do not exist yet
pub async fn ensure_schema(db_pool: &PgPool) -> Result<(), StoreError> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(db_pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}

/// Database row structure for users
#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    date: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            name: r.name,
            email: r.email,
            password_hash: r.password_hash,
            date: r.date,
        }
    }
}

/// Database row structure for notes
#[derive(FromRow)]
struct NoteRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: String,
    tag: Option<String>,
    date: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(r: NoteRow) -> Self {
        Note {
            id: r.id,
            owner: r.user_id,
            title: r.title,
            desc: r.description,
            tag: r.tag,
            date: r.date,
        }
    }
}

/// Database-backed credential store
pub struct PgUserStore {
    db_pool: PgPool,
}

impl PgUserStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, date FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, password_hash, date FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, password_hash, date",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::DuplicateEmail,
            other => StoreError::Database(other),
        })?;

        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.db_pool).await?;
        Ok(())
    }
}

/// Database-backed note store
pub struct PgNoteStore {
    db_pool: PgPool,
}

impl PgNoteStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Note>, StoreError> {
        let rows = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE user_id = $1 ORDER BY date, id"
        ))
        .bind(owner)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(row.map(Note::from))
    }

    async fn insert(&self, new_note: NewNote) -> Result<Note, StoreError> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "INSERT INTO notes (user_id, title, description, tag)
             VALUES ($1, $2, $3, $4)
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(new_note.owner)
        .bind(&new_note.title)
        .bind(&new_note.desc)
        .bind(&new_note.tag)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: NoteId, patch: NotePatch) -> Result<Option<Note>, StoreError> {
        // NULL binds keep the stored column
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "UPDATE notes
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 tag = COALESCE($4, tag)
             WHERE id = $1
             RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.desc)
        .bind(&patch.tag)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(row.map(Note::from))
    }

    async fn delete(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "DELETE FROM notes WHERE id = $1 RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(row.map(Note::from))
    }
}
