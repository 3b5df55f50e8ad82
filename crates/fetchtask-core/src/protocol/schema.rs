//! Configuration schema for the host's task form builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field descriptor: display metadata plus the secure/required flags.
/// Absent optionals are omitted from the serialized document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigField {
    #[serde(rename = "default-value", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(rename = "display-name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "display-order", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<String>,
    pub secure: bool,
    pub required: bool,
}

impl ConfigField {
    fn visible(display_name: &str, display_order: &str, required: bool, secure: bool) -> Self {
        Self {
            default_value: None,
            display_name: Some(display_name.to_string()),
            display_order: Some(display_order.to_string()),
            secure,
            required,
        }
    }
}

/// Field name → descriptor, as the host's form builder consumes it. The
/// on-screen ordering comes from `display-order`, not from key order.
pub type ConfigSchema = BTreeMap<String, ConfigField>;

/// The task configuration form: url is the only required field; username
/// and password are accepted but not used by the fetch logic (known gap).
pub fn task_config_schema() -> ConfigSchema {
    let mut schema = ConfigSchema::new();
    schema.insert("url".to_string(), ConfigField::visible("HTTP Url", "0", true, false));
    schema.insert("username".to_string(), ConfigField::visible("Username", "1", false, false));
    schema.insert("password".to_string(), ConfigField::visible("Password", "2", false, true));
    schema.insert("files".to_string(), ConfigField::visible("Files", "3", false, false));
    schema.insert("destination".to_string(), ConfigField::visible("Destination", "4", false, false));
    schema
}
