//! `fetchtask validate` – the config validation endpoint.

use anyhow::Result;
use fetchtask_core::protocol::ValidationResponse;
use std::path::Path;

use super::execute::read_request;

pub fn run_validate(request_path: Option<&Path>) -> Result<()> {
    // The document is read for protocol parity; this plugin defines no
    // validation rules, so the reply is always the empty error map.
    let _ = read_request(request_path)?;
    println!("{}", serde_json::to_string(&ValidationResponse::default())?);
    Ok(())
}
