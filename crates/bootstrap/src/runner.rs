//! Bootstrap steps and the commands built from them.
//!
//! Each command opens one connection, runs its steps in order and stops at
//! the first failure. The connection is closed on every exit path. Nothing
//! is rolled back: a failure after the schema step leaves the schema applied.

use std::path::Path;

use sqlx::{Connection, PgConnection};
use tracing::{info, warn};

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;

const UPDATE_ADMIN_PASSWORD: &str = "UPDATE users SET password = $1 WHERE email = $2";

const LIST_PUBLIC_TABLES: &str =
    "SELECT table_name::text FROM information_schema.tables WHERE table_schema = 'public'";

/// Read a SQL file, tagging errors with what the file is for.
pub async fn read_sql_file(label: &'static str, path: &Path) -> Result<String, BootstrapError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BootstrapError::ReadSql {
            label,
            path: path.to_path_buf(),
            source,
        })
}

/// Execute every statement in a SQL file.
async fn run_sql_file(
    conn: &mut PgConnection,
    label: &'static str,
    path: &Path,
) -> Result<(), BootstrapError> {
    info!(file = %path.display(), "Running {} file", label);

    let sql = read_sql_file(label, path).await?;

    sqlx::raw_sql(&sql)
        .execute(&mut *conn)
        .await
        .map_err(|source| BootstrapError::ExecuteSql {
            label,
            path: path.to_path_buf(),
            source,
        })?;

    info!(file = %path.display(), "Finished {} file", label);
    Ok(())
}

/// Salted bcrypt hash of `password`, computed off the async runtime.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, BootstrapError> {
    let password = password.to_string();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Store a password hash for the user with `email`.
async fn update_admin_password(
    conn: &mut PgConnection,
    email: &str,
    password_hash: &str,
) -> Result<(), BootstrapError> {
    let result = sqlx::query(UPDATE_ADMIN_PASSWORD)
        .bind(password_hash)
        .bind(email)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BootstrapError::AdminNotFound(email.to_string()));
    }

    Ok(())
}

async fn set_admin_credential(
    conn: &mut PgConnection,
    config: &BootstrapConfig,
) -> Result<(), BootstrapError> {
    let password = config.admin_password()?;

    info!(email = %config.admin_email, cost = config.bcrypt_cost, "Hashing admin password");
    let password_hash = hash_password(password, config.bcrypt_cost).await?;

    update_admin_password(conn, &config.admin_email, &password_hash).await?;
    info!(email = %config.admin_email, "Admin password updated");

    Ok(())
}

async fn apply_files_and_credential(
    conn: &mut PgConnection,
    config: &BootstrapConfig,
) -> Result<(), BootstrapError> {
    run_sql_file(conn, "schema", &config.schema_path).await?;
    run_sql_file(conn, "seed", &config.seed_path).await?;
    set_admin_credential(conn, config).await
}

async fn check_required_tables(
    conn: &mut PgConnection,
    required: &[String],
) -> Result<(), BootstrapError> {
    let existing: Vec<String> = sqlx::query_scalar(LIST_PUBLIC_TABLES)
        .fetch_all(&mut *conn)
        .await?;

    let missing = missing_tables(required, &existing);
    if !missing.is_empty() {
        return Err(BootstrapError::MissingTables(missing));
    }

    info!(tables = existing.len(), "Database schema is valid");
    Ok(())
}

/// Tables from `required` that are not in `existing`, in `required` order.
pub fn missing_tables(required: &[String], existing: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|t| !existing.contains(t))
        .cloned()
        .collect()
}

async fn connect(config: &BootstrapConfig) -> Result<PgConnection, BootstrapError> {
    let url = config.database_url()?;
    let conn = PgConnection::connect(url)
        .await
        .map_err(BootstrapError::Connect)?;
    info!("Connected to database");
    Ok(conn)
}

/// Close the connection and hand back the steps' result.
async fn release<T>(
    conn: PgConnection,
    result: Result<T, BootstrapError>,
) -> Result<T, BootstrapError> {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection cleanly");
    } else {
        info!("Database connection closed");
    }
    result
}

/// Schema, seed, then admin credential.
pub async fn setup(config: &BootstrapConfig) -> Result<(), BootstrapError> {
    // Fail before touching the database if the credential step cannot run.
    config.admin_password()?;

    let mut conn = connect(config).await?;
    let result = apply_files_and_credential(&mut conn, config).await;
    release(conn, result).await
}

/// Admin credential only.
pub async fn set_password(config: &BootstrapConfig) -> Result<(), BootstrapError> {
    config.admin_password()?;

    let mut conn = connect(config).await?;
    let result = set_admin_credential(&mut conn, config).await;
    release(conn, result).await
}

/// Check that every required table exists in the `public` schema.
pub async fn validate(config: &BootstrapConfig) -> Result<(), BootstrapError> {
    let mut conn = connect(config).await?;
    let result = check_required_tables(&mut conn, &config.required_tables).await;
    release(conn, result).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_sql_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CREATE TABLE users (id SERIAL PRIMARY KEY);").unwrap();

        let sql = read_sql_file("schema", file.path()).await.unwrap();
        assert!(sql.contains("CREATE TABLE users"));
    }

    #[tokio::test]
    async fn test_read_missing_sql_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.sql");

        let err = read_sql_file("seed", &path).await.unwrap_err();
        match err {
            BootstrapError::ReadSql { label, path: p, .. } => {
                assert_eq!(label, "seed");
                assert_eq!(p, path);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_hash_password_is_salted_and_verifiable() {
        let first = hash_password("hunter2", 4).await.unwrap();
        let second = hash_password("hunter2", 4).await.unwrap();

        assert_ne!(first, second);
        assert!(bcrypt::verify("hunter2", &first).unwrap());
        assert!(!bcrypt::verify("hunter3", &first).unwrap());
    }

    #[tokio::test]
    async fn test_hash_password_rejects_bad_cost() {
        let err = hash_password("hunter2", 2).await.unwrap_err();
        assert!(matches!(err, BootstrapError::Hash(_)));
    }

    #[tokio::test]
    async fn test_setup_without_password_fails_before_connecting() {
        let config = BootstrapConfig {
            database_url: Some("postgres://nobody@127.0.0.1:1/none".to_string()),
            ..BootstrapConfig::default()
        };
        let err = setup(&config).await.unwrap_err();
        assert!(matches!(err, BootstrapError::MissingAdminPassword));
    }

    #[tokio::test]
    async fn test_validate_without_database_url() {
        let err = validate(&BootstrapConfig::default()).await.unwrap_err();
        assert!(matches!(err, BootstrapError::MissingDatabaseUrl));
    }

    #[test]
    fn test_missing_tables() {
        let required = vec!["users".to_string(), "articles".to_string()];
        let existing = vec!["articles".to_string(), "sessions".to_string()];
        assert_eq!(missing_tables(&required, &existing), vec!["users"]);
        assert!(missing_tables(&required, &required).is_empty());
    }

    // Tests below need a disposable PostgreSQL database:
    // DATABASE_URL=postgres://... cargo test -p press-bootstrap -- --ignored

    const REPO_SCHEMA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../db/schema.sql");

    fn live_database_url() -> Option<String> {
        std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty())
    }

    fn unique_email(tag: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("{}-{}-{}@press.test", tag, std::process::id(), nanos)
    }

    fn write_seed(dir: &Path, sql: &str) -> std::path::PathBuf {
        let path = dir.join("seed.sql");
        std::fs::write(&path, sql).unwrap();
        path
    }

    async fn delete_user(url: &str, email: &str) {
        let mut conn = PgConnection::connect(url).await.unwrap();
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_setup_applies_files_then_sets_password() {
        let Some(url) = live_database_url() else { return };
        let dir = tempfile::tempdir().unwrap();
        let email = unique_email("setup");
        let seed = write_seed(
            dir.path(),
            &format!(
                "INSERT INTO users (email, password, name, role) VALUES ('{}', '!', 'Admin', 'admin');",
                email
            ),
        );

        let config = BootstrapConfig {
            database_url: Some(url.clone()),
            schema_path: REPO_SCHEMA.into(),
            seed_path: seed,
            admin_email: email.clone(),
            admin_password: Some("correct horse".to_string()),
            bcrypt_cost: 4,
            ..BootstrapConfig::default()
        };

        setup(&config).await.unwrap();

        let mut conn = PgConnection::connect(&url).await.unwrap();
        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();

        assert!(bcrypt::verify("correct horse", &stored).unwrap());
        delete_user(&url, &email).await;
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_set_password_for_unknown_email() {
        let Some(url) = live_database_url() else { return };
        let email = unique_email("absent");

        let mut conn = PgConnection::connect(&url).await.unwrap();
        let schema = read_sql_file("schema", Path::new(REPO_SCHEMA)).await.unwrap();
        sqlx::raw_sql(&schema).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();

        let config = BootstrapConfig {
            database_url: Some(url),
            admin_email: email.clone(),
            admin_password: Some("irrelevant".to_string()),
            bcrypt_cost: 4,
            ..BootstrapConfig::default()
        };

        match set_password(&config).await.unwrap_err() {
            BootstrapError::AdminNotFound(missing) => assert_eq!(missing, email),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_failing_seed_stops_after_schema() {
        let Some(url) = live_database_url() else { return };
        let dir = tempfile::tempdir().unwrap();
        let seed = write_seed(dir.path(), "INSERT INTO no_such_table VALUES (1);");
        let email = unique_email("unreached");

        let config = BootstrapConfig {
            database_url: Some(url.clone()),
            schema_path: REPO_SCHEMA.into(),
            seed_path: seed,
            admin_email: email,
            admin_password: Some("unused".to_string()),
            bcrypt_cost: 4,
            ..BootstrapConfig::default()
        };

        match setup(&config).await.unwrap_err() {
            BootstrapError::ExecuteSql { label, .. } => assert_eq!(label, "seed"),
            other => panic!("unexpected error: {other}"),
        }

        // The schema step ran and was not rolled back.
        let mut conn = PgConnection::connect(&url).await.unwrap();
        let users_exists: bool =
            sqlx::query_scalar("SELECT to_regclass('public.users') IS NOT NULL")
                .fetch_one(&mut conn)
                .await
                .unwrap();
        conn.close().await.unwrap();
        assert!(users_exists);
    }
}
