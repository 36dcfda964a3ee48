//! Bootstrap configuration.
//!
//! Values come from the environment (optionally via `.env`) and can be
//! overridden per run by command-line flags:
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `PRESS_SCHEMA_PATH`: Schema SQL file (default: "db/schema.sql")
//! - `PRESS_SEED_PATH`: Seed SQL file (default: "db/seed.sql")
//! - `PRESS_ADMIN_EMAIL`: Admin account email (default: "admin@example.com")
//! - `PRESS_ADMIN_PASSWORD`: Admin password to hash and store
//! - `PRESS_BCRYPT_COST`: bcrypt work factor (default: 10)
//! - `PRESS_REQUIRED_TABLES`: Comma-separated tables checked by `validate`

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::BootstrapError;

#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,

    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,

    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    #[serde(default)]
    pub admin_password: Option<String>,

    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    #[serde(default = "default_required_tables")]
    pub required_tables: Vec<String>,

    /// Read from `DATABASE_URL`, outside the `PRESS_` prefix.
    #[serde(skip)]
    pub database_url: Option<String>,
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("db/schema.sql")
}

fn default_seed_path() -> PathBuf {
    PathBuf::from("db/seed.sql")
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_required_tables() -> Vec<String> {
    vec!["users".to_string(), "articles".to_string()]
}

impl BootstrapConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, BootstrapError> {
        let mut config = envy::prefixed("PRESS_").from_env::<BootstrapConfig>()?;
        config.database_url = std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty());
        Ok(config)
    }

    pub fn database_url(&self) -> Result<&str, BootstrapError> {
        self.database_url
            .as_deref()
            .ok_or(BootstrapError::MissingDatabaseUrl)
    }

    pub fn admin_password(&self) -> Result<&str, BootstrapError> {
        self.admin_password
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(BootstrapError::MissingAdminPassword)
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            seed_path: default_seed_path(),
            admin_email: default_admin_email(),
            admin_password: None,
            bcrypt_cost: default_bcrypt_cost(),
            required_tables: default_required_tables(),
            database_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> BootstrapConfig {
        envy::prefixed("PRESS_")
            .from_iter(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.schema_path, PathBuf::from("db/schema.sql"));
        assert_eq!(config.seed_path, PathBuf::from("db/seed.sql"));
        assert_eq!(config.admin_email, "admin@example.com");
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.required_tables, vec!["users", "articles"]);
        assert!(config.admin_password.is_none());
    }

    #[test]
    fn test_prefixed_values() {
        let config = from_pairs(&[
            ("PRESS_SCHEMA_PATH", "backend/db/schema.sql"),
            ("PRESS_ADMIN_EMAIL", "editor@press.test"),
            ("PRESS_BCRYPT_COST", "12"),
            ("PRESS_REQUIRED_TABLES", "users,articles,reviews"),
        ]);
        assert_eq!(config.schema_path, PathBuf::from("backend/db/schema.sql"));
        assert_eq!(config.admin_email, "editor@press.test");
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.required_tables.len(), 3);
    }

    #[test]
    fn test_missing_database_url() {
        let config = BootstrapConfig::default();
        assert!(matches!(
            config.database_url(),
            Err(BootstrapError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn test_empty_password_is_missing() {
        let config = BootstrapConfig {
            admin_password: Some(String::new()),
            ..BootstrapConfig::default()
        };
        assert!(matches!(
            config.admin_password(),
            Err(BootstrapError::MissingAdminPassword)
        ));
    }
}
