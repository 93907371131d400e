//! Action scripts
//!
//! A script is an ordered list of action records to dispatch. Two formats are
//! understood, picked by file extension:
//!
//! - `.json`: an array of records, `[{ "type": "ADD_TODO", "todo": { ... } }, ...]`
//! - `.toml`: an `[[actions]]` array of tables with the same fields

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::actions::{
    add_goal_action, add_todo_action, remove_goal_action, remove_todo_action, toggle_todo_action,
    Action,
};
use crate::domain_models::{Goal, Todo};

/// Errors that can occur while loading an action script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read action script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON action script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML action script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported action script format: {0:?} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Action {index} has no \"type\" field")]
    MissingType { index: usize },

    #[error("Action {index} has unknown type {kind:?} (expected one of {})", Action::KINDS.join(", "))]
    UnknownAction { index: usize, kind: String },

    #[error("Action {index} ({kind}) is malformed: {source}")]
    InvalidAction {
        index: usize,
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct TomlScript {
    actions: Vec<serde_json::Value>,
}

pub fn parse_json_script(content: &str) -> Result<Vec<Action>, ScriptError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(content)?;
    decode_records(records)
}

pub fn parse_toml_script(content: &str) -> Result<Vec<Action>, ScriptError> {
    let script: TomlScript = toml::from_str(content)?;
    decode_records(script.actions)
}

/// Turn raw records into actions, checking the `type` of each one first so
/// errors point at the offending record
fn decode_records(records: Vec<serde_json::Value>) -> Result<Vec<Action>, ScriptError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let kind = record
                .get("type")
                .and_then(serde_json::Value::as_str)
                .ok_or(ScriptError::MissingType { index })?
                .to_string();
            if !Action::KINDS.contains(&kind.as_str()) {
                return Err(ScriptError::UnknownAction { index, kind });
            }
            serde_json::from_value(record)
                .map_err(|source| ScriptError::InvalidAction { index, kind, source })
        })
        .collect()
}

/// Read and parse the script at `path`
pub fn load_script(path: &Path) -> Result<Vec<Action>, ScriptError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let actions = match extension.as_str() {
        "json" => parse_json_script(&std::fs::read_to_string(path)?)?,
        "toml" => parse_toml_script(&std::fs::read_to_string(path)?)?,
        _ => return Err(ScriptError::UnsupportedFormat(extension)),
    };

    log::info!("Loaded {} action(s) from {}", actions.len(), path.display());
    Ok(actions)
}

/// The built-in walkthrough: builds up and edits both lists
pub fn demo_scenario() -> Vec<Action> {
    vec![
        add_todo_action(Todo::new(0, "Learn React", false)),
        add_todo_action(Todo::new(1, "Learn Redux", false)),
        remove_todo_action(0),
        toggle_todo_action(1),
        add_goal_action(Goal::new(0, "React Dev")),
        add_goal_action(Goal::new(1, "Redux Dev")),
        remove_goal_action(0),
    ]
}
