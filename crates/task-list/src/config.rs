//! Frontend Configuration
//!
//! Element ids, labels and log level used by the UI. Defaults match the
//! markup the task list has always produced; a host page may override any
//! subset of them with a JSON object.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Id of the element the app mounts into (empty = `<body>`)
    pub mount_id: String,
    pub form_id: String,
    pub input_id: String,
    pub list_id: String,
    pub placeholder: String,
    pub submit_label: String,
    /// Label of the delete button inside every task
    pub delete_label: String,
    /// Class set on a task while it is completed
    pub completed_class: String,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            form_id: "todo-form".to_string(),
            input_id: "task-input".to_string(),
            list_id: "task-list".to_string(),
            placeholder: "Nueva tarea...".to_string(),
            submit_label: "Agregar".to_string(),
            delete_label: "Eliminar".to_string(),
            completed_class: "completed".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("form_id", &self.form_id),
            ("input_id", &self.input_id),
            ("list_id", &self.list_id),
            ("delete_label", &self.delete_label),
            ("completed_class", &self.completed_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.completed_class.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                field: "completed_class",
                reason: "must be a single class name".to_string(),
            });
        }

        self.log_level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::Invalid {
                field: "log_level",
                reason: format!("unknown level {:?}", self.log_level),
            })?;

        Ok(())
    }

    /// Max log level, falling back to `Info` for unparsable values
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
