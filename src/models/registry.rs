use std::collections::BTreeMap;
use once_cell::sync::Lazy;

use super::device::DeviceId;
use super::error::ModelError;
use super::types::ModelSpec;

/// All known supported models
const KNOWN_MODELS: &[&str] = &["GB01", "GB02", "GB03", "GT01", "MX05", "MX06", "YT01"];

/// Models that can receive compressed data
const NEW_KIND_MODELS: &[&str] = &["GB03"];

/// Models that have problems with the feed command
const PROBLEM_FEEDING_MODELS: &[&str] = &["MX05", "MX06"];

/// Process-wide registry of the built-in models, built on first access.
pub static REGISTRY: Lazy<ModelRegistry> = Lazy::new(|| {
    ModelRegistry::builtin().unwrap_or_else(|e| panic!("built-in model table is inconsistent: {}", e))
});

/// Returns the shared built-in registry.
pub fn registry() -> &'static ModelRegistry {
    &REGISTRY
}

/// Immutable mapping from model name to its capabilities.
///
/// Names are exact and case-sensitive. There are no setters: once built,
/// a registry can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRegistry {
    models: BTreeMap<String, ModelSpec>,
}

impl ModelRegistry {
    /// Builds the registry from the hard-coded model tables.
    pub fn builtin() -> Result<Self, ModelError> {
        Self::from_lists(KNOWN_MODELS, NEW_KIND_MODELS, PROBLEM_FEEDING_MODELS)
    }

    /// Builds a registry from a known-model list and two override lists.
    ///
    /// Every known model starts with default capabilities; overrides then
    /// set `is_new_kind` or `problem_feeding`. An override that names a model
    /// missing from `known` is rejected instead of creating a new entry.
    pub fn from_lists(
        known: &[&str],
        new_kind: &[&str],
        problem_feeding: &[&str],
    ) -> Result<Self, ModelError> {
        let mut models: BTreeMap<String, ModelSpec> = known
            .iter()
            .map(|name| (name.to_string(), ModelSpec::default()))
            .collect();

        for name in new_kind {
            let spec = models.get_mut(*name).ok_or_else(|| ModelError::UnknownOverride {
                list: "new_kind",
                name: name.to_string(),
            })?;
            spec.is_new_kind = true;
        }

        for name in problem_feeding {
            let spec = models.get_mut(*name).ok_or_else(|| ModelError::UnknownOverride {
                list: "problem_feeding",
                name: name.to_string(),
            })?;
            spec.problem_feeding = true;
        }

        Ok(Self { models })
    }

    /// Looks up a model by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownModel`] when the name is not registered.
    pub fn get(&self, name: &str) -> Result<ModelSpec, ModelError> {
        self.models
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownModel(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// All registered model names. Sorted, but callers should not depend on order.
    pub fn names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// Iterates `(name, spec)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelSpec)> {
        self.models.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Looks up the model of a discovered device by its advertised name.
    pub fn resolve_device(&self, device: &DeviceId) -> Result<ModelSpec, ModelError> {
        self.get(&device.name)
    }
}
