// src/db.rs

use futures::stream::TryStreamExt;
use mongodb::{bson::doc, error::Result, options::FindOptions, Client, Collection};
//
use crate::posting::Posting;

pub struct Config {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            uri: std::env::var("MONGO_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: std::env::var("DB_NAME")
                .unwrap_or_else(|_| "internship_recommendation".to_string()),
            collection: std::env::var("COLLECTION_NAME")
                .unwrap_or_else(|_| "internships".to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Db {
    pub client: Client,
    postings: Collection<Posting>,
}

impl Db {
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let postings = client
            .database(&config.database)
            .collection(&config.collection);

        Ok(Self { client, postings })
    }

    // delete all documents, no filter
    pub async fn clear_postings(&self) -> Result<u64> {
        let result = self.postings.delete_many(doc! {}, None).await?;

        Ok(result.deleted_count)
    }

    // single batch insert, the store assigns each _id
    pub async fn insert_postings(&self, postings: &[Posting]) -> Result<usize> {
        let result = self.postings.insert_many(postings, None).await?;

        Ok(result.inserted_ids.len())
    }

    pub async fn count_postings(&self) -> Result<u64> {
        self.postings.count_documents(None, None).await
    }

    // first n documents in natural (insertion) order
    pub async fn first_postings(&self, limit: i64) -> Result<Vec<Posting>> {
        let find_options = FindOptions::builder().limit(limit).build();

        let mut cursor = self.postings.find(None, find_options).await?;

        let mut postings = Vec::new();
        while let Some(posting) = cursor.try_next().await? {
            postings.push(posting);
        }

        Ok(postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_when_env_unset() {
        std::env::remove_var("MONGO_URI");
        std::env::remove_var("DB_NAME");
        std::env::remove_var("COLLECTION_NAME");

        let config = Config::from_env();

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "internship_recommendation");
        assert_eq!(config.collection, "internships");
    }
}
