//! Named-binding configuration for formbind.
//!
//! A configuration names the entity types that should be bound by the
//! form engine and whether each one may also be bound as a list:
//!
//! ```toml
//! model-namespace = "Crm.Models"
//!
//! [[binding]]
//! name = "account"
//! type = "Account"
//! enumerable = true
//! ```
//!
//! This crate only loads and checks the file. Mapping type names onto
//! runtime models happens in `formbind-core`.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fs, io, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read binder config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse binder config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate binding name '{0}'")]
    DuplicateName(String),

    #[error("binding '{0}' has an empty type")]
    EmptyType(String),
}

///
/// BinderConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BinderConfig {
    pub model_namespace: String,

    #[serde(default, rename = "binding")]
    pub bindings: Vec<BindingEntry>,
}

impl BinderConfig {
    /// Parse and check a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;

        Ok(config)
    }

    /// Read, parse and check a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Binding names are keys; a second entry with the same name is rejected.
    pub fn check(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();

        for entry in &self.bindings {
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateName(entry.name.clone()));
            }
            if entry.type_name.trim().is_empty() {
                return Err(ConfigError::EmptyType(entry.name.clone()));
            }
        }

        Ok(())
    }

    /// Namespace-qualified type name, `"{model_namespace}.{type}"`.
    #[must_use]
    pub fn qualified_name(&self, entry: &BindingEntry) -> String {
        if self.model_namespace.is_empty() {
            entry.type_name.clone()
        } else {
            format!("{}.{}", self.model_namespace, entry.type_name)
        }
    }

    /// Strip the configured namespace from a qualified type name.
    #[must_use]
    pub fn local_name<'a>(&self, name: &'a str) -> &'a str {
        if self.model_namespace.is_empty() {
            return name;
        }

        name.strip_prefix(self.model_namespace.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(name)
    }
}

///
/// BindingEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BindingEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    /// Also allow the type to be bound as a list of entries.
    #[serde(default)]
    pub enumerable: bool,
}

///
/// TESTS
///
