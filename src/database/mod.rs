pub mod user_store;

#[cfg(test)]
pub mod memory;

pub use user_store::*;

use mongodb::{Client, Collection, Database};
use std::error::Error;
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { db })
    }

    /// Creates the indexes the graph queries rely on
    pub async fn ensure_indexes(&self, users_collection: &str) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<mongodb::bson::Document>(users_collection);

        // Reverse lookups ("who lists X as a friend") and friend id scans
        let friends_index = IndexModel::builder()
            .keys(doc! { "friends": 1 })
            .build();

        match users.create_index(friends_index).await {
            Ok(_) => log::info!("   ✅ Index created: {}(friends)", users_collection),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/social_graph".to_string());
        let db = MongoDB::new(&uri, "social_graph").await;
        assert!(db.is_ok());

        let db = db.unwrap();
        assert!(db.ensure_indexes("users").await.is_ok());
    }
}
