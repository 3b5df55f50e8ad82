//! `fetchtask schema` – print the configuration schema document.

use anyhow::Result;
use fetchtask_core::protocol;

pub fn run_schema() -> Result<()> {
    println!("{}", serde_json::to_string(&protocol::task_config_schema())?);
    Ok(())
}
