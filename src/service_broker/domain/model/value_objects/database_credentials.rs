use crate::service_broker::domain::model::value_objects::{
    database_name::DatabaseName, database_password::DatabasePassword,
    database_username::DatabaseUsername,
};

/// Connection details handed to a bound application. Never persisted by the broker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseCredentials {
    uri: String,
    jdbc_url: String,
    username: DatabaseUsername,
    password: DatabasePassword,
    hostname: Option<String>,
    port: Option<u16>,
    database: DatabaseName,
}

impl DatabaseCredentials {
    pub fn for_server(
        hostname: &str,
        port: u16,
        database: DatabaseName,
        username: DatabaseUsername,
        password: DatabasePassword,
    ) -> Self {
        let uri = format!(
            "postgres://{}:{}@{}:{}/{}",
            username.value(),
            password.value(),
            hostname,
            port,
            database.value()
        );
        let jdbc_url = format!(
            "jdbc:postgresql://{}:{}/{}?user={}&password={}",
            hostname,
            port,
            database.value(),
            username.value(),
            password.value()
        );

        Self {
            uri,
            jdbc_url,
            username,
            password,
            hostname: Some(hostname.to_string()),
            port: Some(port),
            database,
        }
    }

    /// Credentials for a file-backed database. SQLite URLs have no authority
    /// part, so `uri` and `jdbc_url` only name the file; the registered login
    /// is carried in `username` and `password`.
    pub fn for_embedded_file(
        path: &str,
        database: DatabaseName,
        username: DatabaseUsername,
        password: DatabasePassword,
    ) -> Self {
        Self {
            uri: format!("sqlite://{path}"),
            jdbc_url: format!("jdbc:sqlite:{path}"),
            username,
            password,
            hostname: None,
            port: None,
            database,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn jdbc_url(&self) -> &str {
        &self.jdbc_url
    }

    pub fn username(&self) -> &DatabaseUsername {
        &self.username
    }

    pub fn password(&self) -> &DatabasePassword {
        &self.password
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn database(&self) -> &DatabaseName {
        &self.database
    }
}
