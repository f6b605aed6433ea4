use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// Document in the "users" collection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// References to other users (ObjectId or string ids)
    #[serde(default, deserialize_with = "deserialize_id_list")]
    pub friends: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl User {
    /// True when both users have interests and at least one tag matches.
    pub fn shares_interest_with(&self, other: &User) -> bool {
        !self.interests.is_empty()
            && !other.interests.is_empty()
            && self.interests.iter().any(|tag| other.interests.contains(tag))
    }
}

fn bson_to_id<E: serde::de::Error>(value: Bson) -> Result<String, E> {
    match value {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(s) => Ok(s),
        other => Err(E::custom(format!("Expected ObjectId or String, got {:?}", other.element_type()))),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    bson_to_id(Bson::deserialize(deserializer)?)
}

fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Vec<Bson>>::deserialize(deserializer)? {
        Some(values) => values.into_iter().map(bson_to_id).collect(),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, oid::ObjectId};

    fn user(id: &str, interests: &[&str]) -> User {
        User {
            id: id.to_string(),
            name: id.to_string(),
            friends: vec![],
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_deserialize_object_ids() {
        let id = ObjectId::new();
        let friend = ObjectId::new();
        let document = doc! {
            "_id": id,
            "name": "Ada",
            "friends": [friend, "legacy-id"],
            "interests": ["chess"],
        };

        let parsed: User = from_document(document).unwrap();

        assert_eq!(parsed.id, id.to_hex());
        assert_eq!(parsed.friends, vec![friend.to_hex(), "legacy-id".to_string()]);
        assert_eq!(parsed.interests, vec!["chess"]);
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let parsed: User = from_document(doc! { "_id": "u1", "name": "Bo" }).unwrap();

        assert!(parsed.friends.is_empty());
        assert!(parsed.interests.is_empty());
    }

    #[test]
    fn test_numeric_id_is_rejected() {
        let result: Result<User, _> = from_document(doc! { "_id": 42, "name": "X" });
        assert!(result.is_err());
    }

    #[test]
    fn test_shares_interest_with() {
        assert!(user("a", &["chess", "go"]).shares_interest_with(&user("b", &["go"])));
        assert!(!user("a", &["chess"]).shares_interest_with(&user("b", &["go"])));
        assert!(!user("a", &[]).shares_interest_with(&user("b", &["go"])));
        assert!(!user("a", &["go"]).shares_interest_with(&user("b", &[])));
    }
}
