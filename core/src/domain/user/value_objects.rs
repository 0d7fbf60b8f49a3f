use serde::{Deserialize, Serialize};

use crate::domain::user::entities::UserRole;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub role: UserRole,
    /// Falls back to the configured default password when absent or empty.
    pub password: Option<String>,
}
