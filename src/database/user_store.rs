// ==================== USER STORE ====================
// Read-only access to user documents. Handlers receive the store as
// `web::Data<dyn UserStore>` so tests can swap in an in-memory one.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::Collection;

use super::MongoDB;
use crate::models::User;
use crate::utils::AppError;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a single user; `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Batch lookup. Unknown ids are skipped and result order is unspecified.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError>;
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &MongoDB, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<User>(collection_name),
        }
    }
}

/// Ids may be stored as ObjectIds or plain strings; hex ids match either form.
fn id_candidates(id: &str) -> Vec<Bson> {
    match ObjectId::parse_str(id) {
        Ok(oid) => vec![Bson::ObjectId(oid), Bson::String(id.to_string())],
        Err(_) => vec![Bson::String(id.to_string())],
    }
}

fn id_filter(ids: &[String]) -> Document {
    let candidates: Vec<Bson> = ids.iter().flat_map(|id| id_candidates(id)).collect();
    doc! { "_id": { "$in": candidates } }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = self
            .collection
            .find_one(id_filter(&[id.to_string()]))
            .await?;

        Ok(user)
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(id_filter(ids)).await?;
        let users: Vec<User> = cursor.try_collect().await?;

        log::debug!("🔎 Batch lookup: {} ids -> {} users", ids.len(), users.len());

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_ids_match_both_forms() {
        let oid = ObjectId::new();
        let candidates = id_candidates(&oid.to_hex());

        assert_eq!(candidates, vec![Bson::ObjectId(oid), Bson::String(oid.to_hex())]);
    }

    #[test]
    fn test_opaque_ids_match_as_strings() {
        assert_eq!(id_candidates("alice"), vec![Bson::String("alice".to_string())]);
    }

    #[test]
    fn test_id_filter_uses_in_operator() {
        let filter = id_filter(&["a".to_string(), "b".to_string()]);

        assert_eq!(filter, doc! { "_id": { "$in": ["a", "b"] } });
    }
}
