mod support;

mod service_instance_command_tests;
mod sqlite_backend_tests;
