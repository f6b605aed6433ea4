use crate::utils::AppError;
use std::env;

const DEFAULT_DATABASE: &str = "social_graph";

/// Runtime configuration, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub users_collection: String,
    pub cors_allowed_origins: Vec<String>,
    pub graph: GraphOptions,
}

/// Knobs for the friends-of-friends derivation.
#[derive(Debug, Clone, Copy)]
pub struct GraphOptions {
    /// Collapse candidates reachable through more than one direct friend.
    pub deduplicate: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { deduplicate: true }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::ConfigError(format!("PORT is not a valid port: {}", raw)))?,
            None => 3002,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| AppError::ConfigError("DATABASE_URL must be set".to_string()))?;
        let database_name = database_name_from_uri(&database_url);

        let users_collection = lookup("USERS_COLLECTION").unwrap_or_else(|| "users".to_string());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["http://localhost:3000".to_string()]);

        let deduplicate = match lookup("SOCIAL_GRAPH_DEDUPLICATE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::ConfigError(format!("SOCIAL_GRAPH_DEDUPLICATE is not a boolean: {}", raw))
            })?,
            None => GraphOptions::default().deduplicate,
        };

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            users_collection,
            cors_allowed_origins,
            graph: GraphOptions { deduplicate },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `mongodb://host:27017/mydb?retryWrites=true` -> `mydb`
fn database_name_from_uri(uri: &str) -> String {
    let after_scheme = uri.split_once("://").map(|(_, rest)| rest).unwrap_or(uri);

    after_scheme
        .split_once('/')
        .map(|(_, path)| path.split('?').next().unwrap_or(""))
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DATABASE)
        .to_string()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
