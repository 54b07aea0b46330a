use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::users;

/// Per-browser state kept in the session store.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ClientSchema {
    pub id: String,
    pub user: Option<UserSchema>,
    pub updated: DateTime<Utc>,
}

impl ClientSchema {
    pub fn update(&mut self, user_model: Option<users::Model>) {
        self.user = user_model.map(UserSchema::from);
        self.updated = Utc::now();
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct UserSchema {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<users::Model> for UserSchema {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
