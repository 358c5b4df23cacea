use std::path::{Path, PathBuf};

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use tracing::debug;

use crate::service_broker::{
    domain::model::{
        enums::service_broker_domain_error::ServiceBrokerDomainError,
        value_objects::{
            connection_limit::ConnectionLimit, database_credentials::DatabaseCredentials,
            database_name::DatabaseName, database_password::DatabasePassword,
            database_username::DatabaseUsername,
        },
    },
    infrastructure::persistence::{
        repositories::{
            database_repository::DatabaseRepository,
            sqlite::sqlx_sqlite_statement_executor_impl::SqlxSqliteStatementExecutorImpl,
        },
        statement_executor::StatementExecutor,
    },
};

const CREATE_USER_REGISTRY: &str = r#"
    CREATE TABLE IF NOT EXISTS broker_users (
        username TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        elevated INTEGER NOT NULL DEFAULT 0
    )
"#;

/// Embedded engine: one SQLite file per tenant database.
///
/// SQLite has no roles, so login users live in a `broker_users` registry
/// inside each tenant file and [`verify_login`](Self::verify_login) is the
/// only way to authenticate against them.
pub struct SqlxSqliteDatabaseRepositoryImpl {
    data_dir: PathBuf,
}

impl SqlxSqliteDatabaseRepositoryImpl {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn database_path(&self, database_name: &DatabaseName) -> PathBuf {
        self.data_dir.join(format!("{}.db", database_name.value()))
    }

    async fn open_existing(
        &self,
        database_name: &DatabaseName,
    ) -> Result<SqlxSqliteStatementExecutorImpl, ServiceBrokerDomainError> {
        let path = self.database_path(database_name);
        if !path.exists() {
            return Err(ServiceBrokerDomainError::InfrastructureError(format!(
                "database {} does not exist",
                database_name.value()
            )));
        }

        SqlxSqliteStatementExecutorImpl::open(&path, false).await
    }

    /// Checks a username/password pair against the tenant's user registry.
    pub async fn verify_login(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
        password: &DatabasePassword,
    ) -> Result<bool, ServiceBrokerDomainError> {
        if !self.database_path(database_name).exists() {
            return Ok(false);
        }

        let executor = self.open_existing(database_name).await?;
        let record = executor
            .select_one(
                "SELECT password_hash FROM broker_users WHERE username = $1",
                &[username.value()],
            )
            .await;
        executor.close().await;

        let Some(password_hash) = record?.and_then(|mut row| row.remove("password_hash")) else {
            return Ok(false);
        };

        let parsed = PasswordHash::new(&password_hash)
            .map_err(|e| ServiceBrokerDomainError::InfrastructureError(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.value().as_bytes(), &parsed)
            .is_ok())
    }

    /// Whether the user was registered with elevated privileges, the embedded
    /// counterpart of an admin login. Unknown users are never elevated.
    pub async fn is_elevated(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<bool, ServiceBrokerDomainError> {
        if !self.database_path(database_name).exists() {
            return Ok(false);
        }

        let executor = self.open_existing(database_name).await?;
        let record = executor
            .select_one(
                "SELECT CAST(elevated AS TEXT) AS elevated FROM broker_users WHERE username = $1",
                &[username.value()],
            )
            .await;
        executor.close().await;

        Ok(record?
            .and_then(|mut row| row.remove("elevated"))
            .is_some_and(|flag| flag == "1"))
    }
}

#[async_trait]
impl DatabaseRepository for SqlxSqliteDatabaseRepositoryImpl {
    async fn create_database(
        &self,
        database_name: &DatabaseName,
        connection_limit: ConnectionLimit,
    ) -> Result<(), ServiceBrokerDomainError> {
        let path = self.database_path(database_name);
        if path.exists() {
            return Err(ServiceBrokerDomainError::BackendObjectAlreadyExists(format!(
                "database {} already exists",
                database_name.value()
            )));
        }

        if !connection_limit.is_unlimited() {
            debug!(
                database = database_name.value(),
                limit = connection_limit.value(),
                "embedded engine does not enforce connection limits"
            );
        }

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| ServiceBrokerDomainError::InfrastructureError(e.to_string()))?;

        let executor = SqlxSqliteStatementExecutorImpl::open(&path, true).await?;
        let result = initialize_database(&executor, database_name).await;
        executor.close().await;
        result
    }

    async fn delete_database(
        &self,
        database_name: &DatabaseName,
    ) -> Result<(), ServiceBrokerDomainError> {
        let path = self.database_path(database_name);
        remove_if_exists(&path).await?;
        remove_if_exists(&with_suffix(&path, "-wal")).await?;
        remove_if_exists(&with_suffix(&path, "-shm")).await?;

        debug!(database = database_name.value(), "database file removed");
        Ok(())
    }

    async fn create_user(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
        password: &DatabasePassword,
        elevated_privileges: bool,
    ) -> Result<DatabaseCredentials, ServiceBrokerDomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.value().as_bytes(), &salt)
            .map_err(|e| ServiceBrokerDomainError::InfrastructureError(e.to_string()))?
            .to_string();
        let elevated = if elevated_privileges { "1" } else { "0" };

        let executor = self.open_existing(database_name).await?;
        let result = executor
            .execute(
                "INSERT INTO broker_users (username, password_hash, elevated) VALUES ($1, $2, CAST($3 AS INTEGER))",
                &[username.value(), password_hash.as_str(), elevated],
            )
            .await;
        executor.close().await;
        result?;

        let path = self.database_path(database_name);
        Ok(DatabaseCredentials::for_embedded_file(
            &path.to_string_lossy(),
            database_name.clone(),
            username.clone(),
            password.clone(),
        ))
    }

    async fn delete_user(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<(), ServiceBrokerDomainError> {
        let executor = self.open_existing(database_name).await?;
        let result = executor
            .execute(
                "DELETE FROM broker_users WHERE username = $1",
                &[username.value()],
            )
            .await;
        executor.close().await;
        result?;

        Ok(())
    }

    async fn user_exists(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<bool, ServiceBrokerDomainError> {
        if !self.database_path(database_name).exists() {
            return Ok(false);
        }

        let executor = self.open_existing(database_name).await?;
        let record = executor
            .select_one(
                "SELECT username FROM broker_users WHERE username = $1",
                &[username.value()],
            )
            .await;
        executor.close().await;

        Ok(record?.is_some())
    }
}

async fn initialize_database(
    executor: &SqlxSqliteStatementExecutorImpl,
    database_name: &DatabaseName,
) -> Result<(), ServiceBrokerDomainError> {
    executor.execute(CREATE_USER_REGISTRY, &[]).await?;

    let rows = executor.select("SELECT '1' AS result", &[]).await?;
    let connected = rows.len() == 1
        && rows[0].get("result").map(String::as_str) == Some("1");

    if !connected {
        return Err(ServiceBrokerDomainError::InfrastructureError(format!(
            "unable to connect to new database {}",
            database_name.value()
        )));
    }

    Ok(())
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

async fn remove_if_exists(path: &Path) -> Result<(), ServiceBrokerDomainError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(ServiceBrokerDomainError::InfrastructureError(error.to_string())),
    }
}
