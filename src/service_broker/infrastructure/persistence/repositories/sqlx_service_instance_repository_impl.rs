use std::sync::Arc;

use async_trait::async_trait;

use crate::service_broker::{
    domain::model::{
        entities::service_instance::ServiceInstance,
        enums::service_broker_domain_error::ServiceBrokerDomainError,
        value_objects::{
            external_identifier::ExternalIdentifier, service_instance_id::ServiceInstanceId,
        },
    },
    infrastructure::persistence::{
        repositories::service_instance_repository::ServiceInstanceRepository,
        statement_executor::{StatementExecutor, StatementRecord},
    },
};

/// Bookkeeping table access; the SQL is shared by the Postgres and SQLite stores.
pub struct SqlxServiceInstanceRepositoryImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl SqlxServiceInstanceRepositoryImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    fn record_to_entity(
        service_instance_id: ServiceInstanceId,
        mut record: StatementRecord,
    ) -> Result<ServiceInstance, ServiceBrokerDomainError> {
        let mut column = |name: &str| {
            record.remove(name).ok_or_else(|| {
                ServiceBrokerDomainError::InfrastructureError(format!(
                    "column {name} missing from service_instances"
                ))
            })
        };

        Ok(ServiceInstance::new(
            service_instance_id,
            ExternalIdentifier::new("service_id", column("service_definition_id")?)?,
            ExternalIdentifier::new("plan_id", column("plan_id")?)?,
            ExternalIdentifier::new("organization_guid", column("organization_guid")?)?,
            ExternalIdentifier::new("space_guid", column("space_guid")?)?,
        ))
    }
}

#[async_trait]
impl ServiceInstanceRepository for SqlxServiceInstanceRepositoryImpl {
    async fn save(&self, service_instance: &ServiceInstance) -> Result<(), ServiceBrokerDomainError> {
        let statement = r#"
            INSERT INTO service_instances (
                service_instance_id,
                service_definition_id,
                plan_id,
                organization_guid,
                space_guid
            )
            VALUES ($1, $2, $3, $4, $5)
        "#;

        let service_instance_id = service_instance.service_instance_id().to_string();
        self.executor
            .execute(
                statement,
                &[
                    service_instance_id.as_str(),
                    service_instance.service_definition_id().value(),
                    service_instance.plan_id().value(),
                    service_instance.organization_guid().value(),
                    service_instance.space_guid().value(),
                ],
            )
            .await?;

        Ok(())
    }

    async fn delete(
        &self,
        service_instance_id: &ServiceInstanceId,
    ) -> Result<(), ServiceBrokerDomainError> {
        let service_instance_id = service_instance_id.to_string();
        self.executor
            .execute(
                "DELETE FROM service_instances WHERE service_instance_id = $1",
                &[service_instance_id.as_str()],
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        service_instance_id: &ServiceInstanceId,
    ) -> Result<Option<ServiceInstance>, ServiceBrokerDomainError> {
        let statement = r#"
            SELECT service_definition_id, plan_id, organization_guid, space_guid
            FROM service_instances
            WHERE service_instance_id = $1
        "#;

        let raw_id = service_instance_id.to_string();
        let maybe_record = self
            .executor
            .select_one(statement, &[raw_id.as_str()])
            .await?;

        maybe_record
            .map(|record| Self::record_to_entity(*service_instance_id, record))
            .transpose()
    }
}
