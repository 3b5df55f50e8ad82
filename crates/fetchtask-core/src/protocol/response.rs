//! Execution and validation responses returned to the host.

use crate::task::TaskResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Protocol status code for a successful execution response.
pub const SUCCESS_RESPONSE_CODE: u32 = 200;
/// Protocol status code for a failed execution response.
pub const INTERNAL_ERROR_RESPONSE_CODE: u32 = 500;

/// The execution reply: a success flag plus the joined message trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResponse {
    pub success: bool,
    pub message: String,
}

impl ExecutionResponse {
    pub fn from_result(result: &TaskResult) -> Self {
        Self {
            success: !result.is_failure(),
            message: result.message(),
        }
    }

    /// Status code the host maps this response to.
    pub fn status_code(&self) -> u32 {
        if self.success {
            SUCCESS_RESPONSE_CODE
        } else {
            INTERNAL_ERROR_RESPONSE_CODE
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Validation reply. This plugin defines no validation rules, so the error
/// map is always empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub errors: BTreeMap<String, String>,
}
