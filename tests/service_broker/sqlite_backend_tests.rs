use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use database_service_broker::{
    config::app_config::{AppConfig, DatabaseBackend},
    service_broker::{
        build_service_broker_router,
        domain::model::{
            enums::service_broker_domain_error::ServiceBrokerDomainError,
            value_objects::{
                connection_limit::ConnectionLimit, database_name::DatabaseName,
                database_password::DatabasePassword, database_username::DatabaseUsername,
            },
        },
        infrastructure::persistence::repositories::{
            database_repository::DatabaseRepository,
            sqlite::sqlx_sqlite_database_repository_impl::SqlxSqliteDatabaseRepositoryImpl,
        },
    },
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::support::{BINDING_ID, INSTANCE_ID, ORGANIZATION_GUID, PLAN_ID, SERVICE_ID, SPACE_GUID};

fn database_name() -> DatabaseName {
    DatabaseName::new(INSTANCE_ID.to_string()).expect("valid database name")
}

fn username() -> DatabaseUsername {
    DatabaseUsername::new(BINDING_ID.to_string()).expect("valid username")
}

fn sqlite_config(data_dir: &TempDir) -> AppConfig {
    AppConfig {
        port: 0,
        database_backend: DatabaseBackend::Sqlite,
        master_database_url: String::new(),
        sqlite_data_dir: data_dir.path().to_path_buf(),
        elevated_privileges: false,
        max_connections: -1,
        catalog_json: None,
    }
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .expect("valid request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let payload = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, payload)
}

#[tokio::test]
async fn create_database_creates_file_and_rejects_duplicates() {
    let data_dir = TempDir::new().expect("temp dir");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());

    repository
        .create_database(&database_name(), ConnectionLimit::new(3).expect("valid limit"))
        .await
        .expect("create should succeed");
    assert!(repository.database_path(&database_name()).exists());

    let duplicate = repository
        .create_database(&database_name(), ConnectionLimit::unlimited())
        .await;
    assert!(matches!(
        duplicate,
        Err(ServiceBrokerDomainError::BackendObjectAlreadyExists(_))
    ));
}

#[tokio::test]
async fn unbinding_revokes_the_generated_credential() {
    let data_dir = TempDir::new().expect("temp dir");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());
    let password = DatabasePassword::new("k3v9q1m2n8b7c6x5z4l0p9o8i7".to_string())
        .expect("valid password");

    repository
        .create_database(&database_name(), ConnectionLimit::unlimited())
        .await
        .expect("create should succeed");
    let credentials = repository
        .create_user(&database_name(), &username(), &password, false)
        .await
        .expect("create user should succeed");

    assert!(credentials.uri().starts_with("sqlite://"));
    assert!(credentials.hostname().is_none());
    assert!(
        repository
            .user_exists(&database_name(), &username())
            .await
            .expect("probe should succeed")
    );
    assert!(
        repository
            .verify_login(&database_name(), &username(), &password)
            .await
            .expect("login check should succeed")
    );

    let duplicate = repository
        .create_user(&database_name(), &username(), &password, false)
        .await;
    assert!(matches!(
        duplicate,
        Err(ServiceBrokerDomainError::BackendObjectAlreadyExists(_))
    ));

    repository
        .delete_user(&database_name(), &username())
        .await
        .expect("delete user should succeed");

    assert!(
        !repository
            .verify_login(&database_name(), &username(), &password)
            .await
            .expect("login check should succeed")
    );
    assert!(
        !repository
            .user_exists(&database_name(), &username())
            .await
            .expect("probe should succeed")
    );
}

#[tokio::test]
async fn wrong_password_does_not_authenticate() {
    let data_dir = TempDir::new().expect("temp dir");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());
    let password =
        DatabasePassword::new("correct-horse-battery".to_string()).expect("valid password");
    let other = DatabasePassword::new("incorrect-horse".to_string()).expect("valid password");

    repository
        .create_database(&database_name(), ConnectionLimit::unlimited())
        .await
        .expect("create should succeed");
    repository
        .create_user(&database_name(), &username(), &password, false)
        .await
        .expect("create user should succeed");

    assert!(
        !repository
            .verify_login(&database_name(), &username(), &other)
            .await
            .expect("login check should succeed")
    );
}

#[tokio::test]
async fn bindings_on_one_instance_are_independent() {
    let data_dir = TempDir::new().expect("temp dir");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());
    let second_user = DatabaseUsername::new("3c4d5e6f-7a8b-4c9d-8e0f-1a2b3c4d5e6f".to_string())
        .expect("valid username");
    let first_password =
        DatabasePassword::new("a1b2c3d4e5f6g7h8i9j0k1l2m3".to_string()).expect("valid password");
    let second_password =
        DatabasePassword::new("v9u8t7s6r5q4p3o2n1m0l9k8j7".to_string()).expect("valid password");

    repository
        .create_database(&database_name(), ConnectionLimit::unlimited())
        .await
        .expect("create should succeed");
    repository
        .create_user(&database_name(), &username(), &first_password, false)
        .await
        .expect("first user should be created");
    repository
        .create_user(&database_name(), &second_user, &second_password, false)
        .await
        .expect("second user should be created");

    repository
        .delete_user(&database_name(), &username())
        .await
        .expect("delete user should succeed");

    assert!(
        !repository
            .verify_login(&database_name(), &username(), &first_password)
            .await
            .expect("login check should succeed")
    );
    assert!(
        repository
            .verify_login(&database_name(), &second_user, &second_password)
            .await
            .expect("login check should succeed")
    );
}

#[tokio::test]
async fn elevated_flag_is_recorded_per_user() {
    let data_dir = TempDir::new().expect("temp dir");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());
    let admin = DatabaseUsername::new("3c4d5e6f-7a8b-4c9d-8e0f-1a2b3c4d5e6f".to_string())
        .expect("valid username");
    let password =
        DatabasePassword::new("a1b2c3d4e5f6g7h8i9j0k1l2m3".to_string()).expect("valid password");

    repository
        .create_database(&database_name(), ConnectionLimit::unlimited())
        .await
        .expect("create should succeed");
    repository
        .create_user(&database_name(), &username(), &password, false)
        .await
        .expect("plain user should be created");
    repository
        .create_user(&database_name(), &admin, &password, true)
        .await
        .expect("elevated user should be created");

    assert!(
        !repository
            .is_elevated(&database_name(), &username())
            .await
            .expect("lookup should succeed")
    );
    assert!(
        repository
            .is_elevated(&database_name(), &admin)
            .await
            .expect("lookup should succeed")
    );

    repository
        .delete_user(&database_name(), &admin)
        .await
        .expect("delete user should succeed");
    assert!(
        !repository
            .is_elevated(&database_name(), &admin)
            .await
            .expect("lookup should succeed")
    );
}

#[tokio::test]
async fn delete_database_removes_file_and_tolerates_missing_database() {
    let data_dir = TempDir::new().expect("temp dir");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());

    repository
        .create_database(&database_name(), ConnectionLimit::unlimited())
        .await
        .expect("create should succeed");
    repository
        .delete_database(&database_name())
        .await
        .expect("delete should succeed");

    assert!(!repository.database_path(&database_name()).exists());
    assert!(
        !repository
            .user_exists(&database_name(), &username())
            .await
            .expect("probe should succeed")
    );
    repository
        .delete_database(&database_name())
        .await
        .expect("second delete should succeed");
}

#[tokio::test]
async fn broker_lifecycle_runs_end_to_end_on_embedded_backend() {
    let data_dir = TempDir::new().expect("temp dir");
    let app = build_service_broker_router(&sqlite_config(&data_dir))
        .await
        .expect("router should build");
    let instance_uri = format!("/v2/service_instances/{INSTANCE_ID}");
    let binding_uri = format!("{instance_uri}/service_bindings/{BINDING_ID}");
    let provision = json!({
        "service_id": SERVICE_ID,
        "plan_id": PLAN_ID,
        "organization_guid": ORGANIZATION_GUID,
        "space_guid": SPACE_GUID,
    });

    let (status, _) = send(&app, "PUT", &instance_uri, Some(provision.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "PUT", &instance_uri, Some(provision)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "PUT",
        &binding_uri,
        Some(json!({ "service_id": SERVICE_ID, "plan_id": PLAN_ID })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["credentials"]["username"], BINDING_ID);
    assert_eq!(body["credentials"]["database"], INSTANCE_ID);

    let password = DatabasePassword::new(
        body["credentials"]["password"]
            .as_str()
            .expect("password is a string")
            .to_string(),
    )
    .expect("valid password");
    let repository = SqlxSqliteDatabaseRepositoryImpl::new(data_dir.path());
    assert!(
        repository
            .verify_login(&database_name(), &username(), &password)
            .await
            .expect("login check should succeed")
    );

    let (status, _) = send(
        &app,
        "PUT",
        &binding_uri,
        Some(json!({ "service_id": SERVICE_ID, "plan_id": PLAN_ID })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, "DELETE", &binding_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
    assert!(
        !repository
            .verify_login(&database_name(), &username(), &password)
            .await
            .expect("login check should succeed")
    );

    let (status, body) = send(&app, "DELETE", &instance_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_instance_id"], INSTANCE_ID);
    assert!(!repository.database_path(&database_name()).exists());

    let (status, body) = send(&app, "DELETE", &instance_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}
