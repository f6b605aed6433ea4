use serde::{Deserialize, Serialize};

use super::User;

pub const SHARED_INTERESTS_REASON: &str = "Shared interests";

/// Origin user with its friends hydrated, and each friend's own friends hydrated.
#[derive(Debug, Clone)]
pub struct FriendGraph {
    pub user: User,
    pub friends: Vec<FriendRecord>,
}

/// A direct friend expanded one more level.
#[derive(Debug, Clone)]
pub struct FriendRecord {
    pub user: User,
    pub friends: Vec<User>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct RecommendationEntry {
    pub id: String,
    pub name: String,
    #[schema(example = "Shared interests")]
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphResponse {
    pub user: UserSummary,
    pub direct_friends: Vec<UserSummary>,
    pub recommendations: Vec<RecommendationEntry>,
}
