use thiserror::Error;

/// Errors raised by model lookup and registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No registry entry exists for the requested name
    #[error("Model not recognized: {0}")]
    UnknownModel(String),

    /// An override list names a model that is not in the known-model list
    #[error("Override list '{list}' names unknown model: {name}")]
    UnknownOverride { list: &'static str, name: String },

    /// A device string was not of the form `name,address`
    #[error("Invalid device identifier: {0:?} (expected \"name,address\")")]
    InvalidDevice(String),
}
