// ==================== SOCIAL GRAPH ====================
// Two-hop friend expansion and shared-interest recommendations.
// Population is three reads: origin user, its friends, then every
// friend-of-friend in one batch.

use std::collections::{HashMap, HashSet};

use crate::{
    config::GraphOptions,
    database::UserStore,
    models::{
        FriendGraph, FriendRecord, GraphResponse, RecommendationEntry, User, UserSummary,
        SHARED_INTERESTS_REASON,
    },
    utils::AppError,
};

/// Resolve `ids` against `found`, keeping reference order and dropping dangling ids.
fn resolve_in_order(ids: &[String], found: &HashMap<String, User>) -> Vec<User> {
    ids.iter().filter_map(|id| found.get(id).cloned()).collect()
}

fn index_by_id(users: Vec<User>) -> HashMap<String, User> {
    users.into_iter().map(|u| (u.id.clone(), u)).collect()
}

/// Fetch `user_id` with friends populated two levels deep.
pub async fn load_friend_graph(
    store: &dyn UserStore,
    user_id: &str,
) -> Result<Option<FriendGraph>, AppError> {
    let user = match store.find_by_id(user_id).await? {
        Some(user) => user,
        None => return Ok(None),
    };

    let direct = index_by_id(store.find_by_ids(&user.friends).await?);
    let direct_friends = resolve_in_order(&user.friends, &direct);

    let mut seen = HashSet::new();
    let mut second_level_ids = Vec::new();
    for id in direct_friends.iter().flat_map(|f| &f.friends) {
        if seen.insert(id.clone()) {
            second_level_ids.push(id.clone());
        }
    }

    let second_level = index_by_id(store.find_by_ids(&second_level_ids).await?);

    log::debug!(
        "👥 Populated {}: {} direct friends, {} second-level users",
        user.id,
        direct_friends.len(),
        second_level.len()
    );

    let friends = direct_friends
        .into_iter()
        .map(|friend| {
            let friends = resolve_in_order(&friend.friends, &second_level);
            FriendRecord { user: friend, friends }
        })
        .collect();

    Ok(Some(FriendGraph { user, friends }))
}

/// Candidates reachable through a direct friend, excluding the origin and
/// anyone already a direct friend. Order follows first discovery.
pub fn friends_of_friends(graph: &FriendGraph, deduplicate: bool) -> Vec<&User> {
    let direct_ids: HashSet<&str> = graph.friends.iter().map(|f| f.user.id.as_str()).collect();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();

    for candidate in graph.friends.iter().flat_map(|friend| &friend.friends) {
        if candidate.id == graph.user.id || direct_ids.contains(candidate.id.as_str()) {
            continue;
        }
        if deduplicate && !emitted.insert(candidate.id.as_str()) {
            continue;
        }
        candidates.push(candidate);
    }

    candidates
}

/// One entry per candidate sharing an interest with `origin`; others are omitted.
pub fn recommend(origin: &User, candidates: &[&User]) -> Vec<RecommendationEntry> {
    candidates
        .iter()
        .filter(|candidate| candidate.shares_interest_with(origin))
        .map(|candidate| RecommendationEntry {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            reason: SHARED_INTERESTS_REASON.to_string(),
        })
        .collect()
}

pub fn assemble_graph(graph: &FriendGraph, options: GraphOptions) -> GraphResponse {
    let candidates = friends_of_friends(graph, options.deduplicate);
    let recommendations = recommend(&graph.user, &candidates);

    GraphResponse {
        user: UserSummary::from(&graph.user),
        direct_friends: graph.friends.iter().map(|f| UserSummary::from(&f.user)).collect(),
        recommendations,
    }
}

pub async fn build_social_graph(
    store: &dyn UserStore,
    user_id: &str,
    options: GraphOptions,
) -> Result<GraphResponse, AppError> {
    let graph = load_friend_graph(store, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", user_id)))?;

    Ok(assemble_graph(&graph, options))
}
