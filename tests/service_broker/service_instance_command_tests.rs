use database_service_broker::service_broker::domain::{
    model::{
        commands::update_service_instance_command::UpdateServiceInstanceCommand,
        enums::service_broker_domain_error::ServiceBrokerDomainError,
        queries::get_service_instance_query::GetServiceInstanceQuery,
        value_objects::connection_limit::ConnectionLimit,
    },
    services::{
        service_instance_command_service::ServiceInstanceCommandService,
        service_instance_query_service::ServiceInstanceQueryService,
    },
};

use crate::support::{
    FakeDatabaseRepository, FakeServiceInstanceRepository, INSTANCE_ID, PLAN_ID,
    create_harness, create_harness_with, create_instance_command,
    create_instance_command_with_plan, delete_instance_command, service_instance,
};

#[tokio::test]
async fn handle_create_records_instance_then_creates_database() {
    let harness = create_harness(vec![], FakeDatabaseRepository::new(false, false));

    let created = harness
        .instance_service
        .handle_create(create_instance_command())
        .await
        .expect("provisioning should succeed");

    assert_eq!(created, service_instance());
    assert_eq!(
        harness.instance_repository.saved(),
        vec![*created.service_instance_id()]
    );
    assert_eq!(
        harness.database_repository.calls(),
        vec![format!("create_database:{INSTANCE_ID}")]
    );
    assert_eq!(
        harness.database_repository.connection_limit_of(INSTANCE_ID),
        Some(-1)
    );
}

#[tokio::test]
async fn handle_create_passes_configured_connection_limit() {
    let harness = create_harness_with(
        FakeServiceInstanceRepository::with_entries(vec![]),
        FakeDatabaseRepository::new(false, false),
        ConnectionLimit::new(5).expect("valid limit"),
        false,
    );

    harness
        .instance_service
        .handle_create(create_instance_command())
        .await
        .expect("provisioning should succeed");

    assert_eq!(
        harness.database_repository.connection_limit_of(INSTANCE_ID),
        Some(5)
    );
}

#[tokio::test]
async fn handle_create_returns_existing_instance_without_side_effects() {
    let harness = create_harness(
        vec![service_instance()],
        FakeDatabaseRepository::new(false, false),
    );

    let result = harness
        .instance_service
        .handle_create(create_instance_command_with_plan("plan-premium"))
        .await;

    match result {
        Err(ServiceBrokerDomainError::ServiceInstanceAlreadyExists(existing)) => {
            assert_eq!(existing.plan_id().value(), PLAN_ID);
        }
        other => panic!("expected ServiceInstanceAlreadyExists, got {other:?}"),
    }
    assert!(harness.instance_repository.saved().is_empty());
    assert!(harness.database_repository.calls().is_empty());
}

#[tokio::test]
async fn handle_create_reports_conflict_when_concurrent_provision_wins_the_insert() {
    let harness = create_harness_with(
        FakeServiceInstanceRepository::with_racing_instance(service_instance()),
        FakeDatabaseRepository::new(false, false),
        ConnectionLimit::unlimited(),
        false,
    );

    let result = harness
        .instance_service
        .handle_create(create_instance_command())
        .await;

    assert!(matches!(
        result,
        Err(ServiceBrokerDomainError::ServiceInstanceAlreadyExists(_))
    ));
    assert!(harness.database_repository.calls().is_empty());
}

#[tokio::test]
async fn handle_create_surfaces_backend_failure_and_keeps_the_record() {
    let harness = create_harness(vec![], FakeDatabaseRepository::new(true, false));

    let result = harness
        .instance_service
        .handle_create(create_instance_command())
        .await;

    assert!(matches!(
        result,
        Err(ServiceBrokerDomainError::InfrastructureError(_))
    ));
    assert!(
        harness
            .instance_repository
            .contains(service_instance().service_instance_id())
    );
}

#[tokio::test]
async fn handle_delete_drops_database_then_removes_record() {
    let harness = create_harness(
        vec![service_instance()],
        FakeDatabaseRepository::new(false, false),
    );

    let deleted = harness
        .instance_service
        .handle_delete(delete_instance_command())
        .await
        .expect("deprovisioning should succeed");

    assert_eq!(deleted, Some(service_instance()));
    assert_eq!(
        harness.database_repository.calls(),
        vec![format!("delete_database:{INSTANCE_ID}")]
    );
    assert_eq!(
        harness.instance_repository.deleted(),
        vec![*service_instance().service_instance_id()]
    );

    let lookup = harness
        .query_service
        .handle_get(GetServiceInstanceQuery::new(INSTANCE_ID.to_string()).expect("valid query"))
        .await
        .expect("lookup should succeed");
    assert!(lookup.is_none());
}

#[tokio::test]
async fn handle_delete_of_unknown_instance_is_a_no_op() {
    let harness = create_harness(vec![], FakeDatabaseRepository::new(false, false));

    let deleted = harness
        .instance_service
        .handle_delete(delete_instance_command())
        .await
        .expect("deprovisioning should succeed");

    assert!(deleted.is_none());
    assert!(harness.database_repository.calls().is_empty());
    assert!(harness.instance_repository.deleted().is_empty());
}

#[tokio::test]
async fn handle_update_is_always_rejected() {
    let harness = create_harness(
        vec![service_instance()],
        FakeDatabaseRepository::new(false, false),
    );

    let result = harness
        .instance_service
        .handle_update(
            UpdateServiceInstanceCommand::new(
                INSTANCE_ID.to_string(),
                Some("plan-premium".to_string()),
            )
            .expect("valid update command"),
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceBrokerDomainError::ServiceInstanceUpdateNotSupported)
    ));
    assert!(harness.database_repository.calls().is_empty());
}
