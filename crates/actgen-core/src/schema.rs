//! Input document model: action groups, their actions, payloads and imports.
//!
//! Every map is an [`IndexMap`] so generated output follows the key order of
//! the source document.

use crate::error::{ActgenError, ParseError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Type name -> module path it is imported from.
pub type ImportMap = IndexMap<String, String>;

/// Parameter name (optionally suffixed with `?`) -> TypeScript type text.
pub type Payload = IndexMap<String, String>;

// ---------------------------------------------------------------------------
// DataRoot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRoot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<ImportMap>,
    pub action_groups: IndexMap<String, ActionGroup>,
}

impl DataRoot {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Read and parse an input file, choosing the parser from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = InputFormat::from_path(path)
            .ok_or_else(|| ActgenError::UnsupportedInput(path.to_path_buf()))?;
        let raw = std::fs::read_to_string(path).map_err(|source| ActgenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = match format {
            InputFormat::Json => serde_json::from_str(&raw).map_err(ParseError::Json),
            InputFormat::Yaml => serde_yaml::from_str(&raw).map_err(ParseError::Yaml),
        };
        parsed.map_err(|source| ActgenError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// ActionGroup / Action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionGroup {
    /// A `null` value declares an action with neither alias nor payload.
    pub actions: IndexMap<String, Option<Action>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<ImportMap>,
}

impl ActionGroup {
    /// File-level imports overlaid with this group's own; the group wins on conflict.
    pub fn merged_imports(&self, top: Option<&ImportMap>) -> ImportMap {
        let mut merged = top.cloned().unwrap_or_default();
        if let Some(own) = &self.imports {
            merged.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Action {
    /// Payload entries in declaration order; empty for a missing action body.
    pub fn payload_entries(action: Option<&Action>) -> Vec<(&str, &str)> {
        action
            .and_then(|a| a.payload.as_ref())
            .map(|p| p.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// InputFormat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<InputFormat> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(InputFormat::Json),
            Some("yaml") | Some("yml") => Some(InputFormat::Yaml),
            _ => None,
        }
    }
}
