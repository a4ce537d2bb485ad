use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A user row as exposed on read paths. The credential column is never
/// selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    /// Identifier assigned by the store.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    /// Plaintext credential as submitted; hashed before it reaches the store.
    pub password: String,
}

/// Body of `PUT /users/{id}`. Credential and role are not updatable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Row fetched by the login handler to verify a credential.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: String,
}
