#[path = "support/harness.rs"]
mod harness;

pub use fakes::{FakeDatabaseRepository, FakeServiceInstanceRepository, RecordingStatementExecutor};
pub use fixtures::{
    APP_GUID, BINDING_ID, INSTANCE_ID, ORGANIZATION_GUID, PLAN_ID, SERVICE_ID, SPACE_GUID,
    create_binding_command, create_instance_command, create_instance_command_with_plan,
    delete_binding_command, delete_instance_command, service_instance,
};
pub use harness::{create_harness, create_harness_with, postgres_repository};
