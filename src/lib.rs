//! Printer model registry for thermal "cat" printers.
//!
//! The registry maps a model name (`GB01`, `MX05`, ...) to the capabilities
//! the transport and print-job encoder adapt to: line width, start command
//! variant and the feed workaround.

pub mod cli;
pub mod config;
pub mod models;

pub use models::{registry, DeviceId, ModelError, ModelRegistry, ModelSpec, REGISTRY};
