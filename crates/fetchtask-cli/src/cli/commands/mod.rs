mod execute;
mod fetch;
mod schema;
mod validate;

pub use execute::run_execute;
pub use fetch::run_fetch;
pub use schema::run_schema;
pub use validate::run_validate;
