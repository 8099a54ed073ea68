mod device;
mod error;
mod registry;
mod types;

pub use device::DeviceId;
pub use error::ModelError;
pub use registry::{registry, ModelRegistry, REGISTRY};
pub use types::{FeedStrategy, ModelSpec, PayloadEncoding, StartCommand, DEFAULT_PAPER_WIDTH};
