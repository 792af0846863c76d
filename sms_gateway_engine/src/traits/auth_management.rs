use thiserror::Error;

use crate::db_types::{Role, UserId};

#[derive(Debug, Clone, Error)]
pub enum AuthApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("No role is assigned to user {0}")]
    UserNotFound(UserId),
    #[error("User holds the '{0}' role, which may not send SMS")]
    RoleNotAllowed(Role),
    #[error("User is assigned a role this server does not recognise: {0}")]
    UnknownRole(String),
}

impl From<sqlx::Error> for AuthApiError {
    fn from(e: sqlx::Error) -> Self {
        AuthApiError::DatabaseError(e.to_string())
    }
}

/// The `AuthManagement` trait defines the storage half of the access-policy check.
///
/// Authentication itself happens upstream (the server trusts the identity attached to the request by the
/// authentication collaborator). What the backend provides is the durable mapping from a user id to the role
/// that decides whether the caller may dispatch messages.
#[allow(async_fn_in_trait)]
pub trait AuthManagement {
    /// Fetches the role assigned to the given user. Returns `Ok(None)` if the user has no role record at all.
    /// A role string in storage that the code does not recognise is reported as [`AuthApiError::UnknownRole`].
    async fn fetch_role_for_user(&self, user_id: &UserId) -> Result<Option<Role>, AuthApiError>;

    /// Assigns the given role to the user, replacing any previous assignment. This function is idempotent.
    async fn upsert_role(&self, user_id: &UserId, role: Role) -> Result<(), AuthApiError>;
}
