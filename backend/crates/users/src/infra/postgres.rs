//! PostgreSQL Repository Implementation
//!
//! One row per user. Each operation is a single conditional statement, so
//! the existence check and the write cannot interleave with another caller.

use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::entity::{user::User, user_patch::UserPatch};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, lesson_completion::LessonCompletion, timestamp::Timestamp, user_id::UserId,
};
use crate::error::{UserError, UserResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> UserResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                user_id,
                email,
                name,
                picture,
                created_at,
                last_login_at,
                completed_lessons
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING
                user_id,
                email,
                name,
                picture,
                created_at,
                last_login_at,
                completed_lessons
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(user.email.as_str())
        .bind(user.name.as_deref())
        .bind(user.picture.as_deref())
        .bind(user.created_at.as_str())
        .bind(user.last_login_at.as_ref().map(|t| t.as_str()))
        .bind(Json(&user.completed_lessons))
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).ok_or(UserError::AlreadyExists)
    }

    async fn get(&self, user_id: &UserId) -> UserResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                name,
                picture,
                created_at,
                last_login_at,
                completed_lessons
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).ok_or(UserError::NotFound)
    }

    async fn update(&self, user_id: &UserId, patch: &UserPatch) -> UserResult<User> {
        // NULL parameters keep the stored column (absent patch fields).
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                last_login_at = COALESCE($2, last_login_at),
                completed_lessons = COALESCE($3, completed_lessons)
            WHERE user_id = $1
            RETURNING
                user_id,
                email,
                name,
                picture,
                created_at,
                last_login_at,
                completed_lessons
            "#,
        )
        .bind(user_id.as_str())
        .bind(patch.last_login_at.as_ref().map(|t| t.as_str()))
        .bind(patch.completed_lessons.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).ok_or(UserError::NotFound)
    }

    async fn delete(&self, user_id: &UserId) -> UserResult<()> {
        let deleted = sqlx::query_scalar::<_, String>(
            "DELETE FROM users WHERE user_id = $1 RETURNING user_id",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        deleted.map(|_| ()).ok_or(UserError::NotFound)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
    created_at: String,
    last_login_at: Option<String>,
    completed_lessons: Json<Vec<LessonCompletion>>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_db(self.user_id),
            email: Email::from_db(self.email),
            name: self.name,
            picture: self.picture,
            created_at: Timestamp::from_db(self.created_at),
            last_login_at: self.last_login_at.map(Timestamp::from_db),
            completed_lessons: self.completed_lessons.0,
        }
    }
}
