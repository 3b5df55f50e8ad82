//! Host boundary documents: execution request, execution response,
//! configuration schema, and the validation stub.
//!
//! These formats are what the host pipeline exchanges with the plugin;
//! field names and shapes are kept exactly as the host expects them.

mod request;
mod response;
mod schema;

pub use request::{ConfigEntry, TaskContext, TaskRequest};
pub use response::{
    ExecutionResponse, ValidationResponse, INTERNAL_ERROR_RESPONSE_CODE, SUCCESS_RESPONSE_CODE,
};
pub use schema::{task_config_schema, ConfigField, ConfigSchema};
