/// Users API routes
use crate::{
    error::{Result, ServerError, USER_NOT_FOUND},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use rollcall_core::types::{NewUser, User, UserChanges, UserId};
use serde::{Deserialize, Serialize};

/// Request body for create and update; both fields may be absent
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub message: String,
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct GetUserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Non-numeric ids can never match a row, so they are reported as missing
fn parse_user_id(raw: &str) -> Result<UserId> {
    raw.parse()
        .map_err(|_| ServerError::NotFound(USER_NOT_FOUND.to_string()))
}

/// A body that is not declared as JSON carries no fields; only malformed JSON
/// is rejected outright
fn read_payload(
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<UserPayload> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(UserPayload::default()),
        Err(rejection) => Err(ServerError::BadRequest(rejection.body_text())),
    }
}

/// GET /users
/// List every user in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<ListUsersResponse>> {
    let users = app_state.store.list_users().await?;
    Ok(Json(ListUsersResponse { users }))
}

/// POST /users
/// Create a user from a name and an email
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUserResponse>)> {
    let payload = read_payload(payload)?;
    let new_user = NewUser::from_parts(payload.name, payload.email)?;

    let user_id = app_state.store.create_user(new_user).await?;
    tracing::info!(user_id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

/// GET /users/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<GetUserResponse>> {
    let id = parse_user_id(&id)?;
    let user = app_state.store.get_user(id).await?;
    Ok(Json(GetUserResponse { user }))
}

/// PUT /users/:id
/// Overwrite name and email; a missing row is detected from the write itself
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;
    let payload = read_payload(payload)?;
    let changes = UserChanges {
        name: payload.name,
        email: payload.email,
    };

    app_state.store.update_user(id, changes).await?;
    tracing::info!(user_id = id, "User updated");

    Ok(MessageResponse::new("User updated successfully"))
}

/// DELETE /users/:id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;

    app_state.store.delete_user(id).await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(MessageResponse::new("User deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert!(matches!(parse_user_id("abc"), Err(ServerError::NotFound(_))));
        assert!(matches!(parse_user_id(""), Err(ServerError::NotFound(_))));
    }

    #[test]
    fn test_create_response_uses_camel_case_id() {
        let body = serde_json::to_value(CreateUserResponse {
            message: "User created successfully".to_string(),
            user_id: 3,
        })
        .unwrap();

        assert_eq!(body["userId"], 3);
        assert_eq!(body["message"], "User created successfully");
    }
}
