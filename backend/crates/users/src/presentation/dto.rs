//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::{CreateUserInput, LessonInput, UpdateUserInput};
use crate::domain::entity::user::User;

// ============================================================================
// Create
// ============================================================================

/// Create user request
///
/// Required fields are optional here so that a missing field surfaces as a
/// validation error rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            user_id: req.user_id.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            name: req.name,
            picture: req.picture,
            created_at: req.created_at,
            last_login_at: req.last_login_at,
        }
    }
}

// ============================================================================
// Update
// ============================================================================

/// Update user request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub last_login_at: Option<String>,
    pub completed_lessons: Option<Vec<LessonEntryRequest>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonEntryRequest {
    pub id: Option<String>,
    pub at: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_input(self, user_id: String) -> UpdateUserInput {
        UpdateUserInput {
            user_id,
            last_login_at: self.last_login_at,
            completed_lessons: self.completed_lessons.map(|entries| {
                entries
                    .into_iter()
                    .map(|entry| LessonInput {
                        id: entry.id,
                        at: entry.at,
                    })
                    .collect()
            }),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Full user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    pub completed_lessons: Vec<LessonEntryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonEntryResponse {
    pub id: String,
    pub at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.as_str().to_string(),
            email: user.email.as_str().to_string(),
            name: user.name,
            picture: user.picture,
            created_at: user.created_at.as_str().to_string(),
            last_login_at: user.last_login_at.map(|t| t.as_str().to_string()),
            completed_lessons: user
                .completed_lessons
                .into_iter()
                .map(|lesson| LessonEntryResponse {
                    id: lesson.id,
                    at: lesson.at.as_str().to_string(),
                })
                .collect(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, timestamp::Timestamp, user_id::UserId};

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"userId":"u1","email":"a@b.com","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let input = CreateUserInput::from(req);
        assert_eq!(input.user_id, "u1");
        assert_eq!(input.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(input.name, None);
    }

    #[test]
    fn test_create_request_missing_fields_decode() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        let input = CreateUserInput::from(req);
        assert!(input.user_id.is_empty());
        assert!(input.email.is_empty());
    }

    #[test]
    fn test_update_request_keeps_partial_entries() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"completedLessons":[{"id":"l1"}]}"#).unwrap();
        let input = req.into_input("u1".to_string());
        assert_eq!(input.last_login_at, None);

        let lessons = input.completed_lessons.unwrap();
        assert_eq!(lessons[0].id.as_deref(), Some("l1"));
        assert_eq!(lessons[0].at, None);
    }

    #[test]
    fn test_user_response_shape() {
        let user = User::new(
            UserId::new("u1").unwrap(),
            Email::new("a@b.com").unwrap(),
            Timestamp::parse("2024-01-01T00:00:00Z", "createdAt").unwrap(),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "u1",
                "email": "a@b.com",
                "createdAt": "2024-01-01T00:00:00Z",
                "completedLessons": []
            })
        );
    }
}
