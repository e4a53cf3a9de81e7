use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::users::models::UserRole;

/// Identity carried by a verified session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn new(user_id: i32, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Collectors validate pickups; admins can do everything a collector can
    pub fn can_collect(&self) -> bool {
        matches!(self.role, UserRole::Collector | UserRole::Admin)
    }

    /// Owner-or-admin check used by the record mutation endpoints
    pub fn can_modify(&self, owner_id: i32) -> bool {
        self.user_id == owner_id || self.is_admin()
    }
}
