//! Execution request sent by the host to run a task.
//!
//! ```json
//! {
//!   "config": {
//!     "url": { "secure": false, "value": "http://x.com", "required": true }
//!   },
//!   "context": {
//!     "workingDirectory": "working-dir",
//!     "environmentVariables": { "ENV1": "VAL1" }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One configured field: the value plus the host's secure/required flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub required: bool,
}

impl ConfigEntry {
    /// Entry carrying just a value; flags default to false.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            secure: false,
            required: false,
        }
    }
}

/// Execution context: where to write files, and the job environment.
/// The environment is carried for format parity; the fetch logic does not
/// read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskContext {
    #[serde(rename = "workingDirectory")]
    pub working_directory: String,
    #[serde(rename = "environmentVariables", default)]
    pub environment_variables: BTreeMap<String, String>,
}

/// The full execution request document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub config: BTreeMap<String, ConfigEntry>,
    pub context: TaskContext,
}

impl TaskRequest {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Configured value for `key`; empty when the field is absent or null.
    pub fn config_value(&self, key: &str) -> &str {
        self.config
            .get(key)
            .and_then(|entry| entry.value.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_request_document() {
        let raw = r#"{
            "config": {
                "url": { "secure": false, "value": "http://x.com/files", "required": true },
                "files": { "secure": false, "value": "a.txt\nb.txt", "required": false },
                "password": { "secure": true, "required": false }
            },
            "context": {
                "workingDirectory": "pipelines/build",
                "environmentVariables": { "ENV1": "VAL1", "ENV2": "VAL2" }
            }
        }"#;
        let request = TaskRequest::from_json(raw).unwrap();
        assert_eq!(request.config_value("url"), "http://x.com/files");
        assert_eq!(request.config_value("files"), "a.txt\nb.txt");
        assert_eq!(request.config_value("password"), "");
        assert_eq!(request.config_value("destination"), "");
        assert_eq!(request.context.working_directory, "pipelines/build");
        assert_eq!(
            request.context.environment_variables.get("ENV2").map(String::as_str),
            Some("VAL2")
        );
        assert!(request.config.get("password").unwrap().secure);
    }

    #[test]
    fn config_may_be_absent() {
        let raw = r#"{ "context": { "workingDirectory": "wd" } }"#;
        let request = TaskRequest::from_json(raw).unwrap();
        assert_eq!(request.config_value("url"), "");
        assert!(request.context.environment_variables.is_empty());
    }
}
