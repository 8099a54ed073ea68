use serde::{Deserialize, Serialize};

/// Pixel columns per line on the standard paper stock.
pub const DEFAULT_PAPER_WIDTH: u32 = 384;

/// Capabilities of one printer model.
///
/// Consumed by the transport (line width, feed workaround) and the
/// print-job encoder (command variant, payload encoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Addressable pixel columns per printed line
    pub paper_width: u32,
    /// Supports the alternate "start print" command and compressed data
    pub is_new_kind: bool,
    /// Misbehaves on the standard feed command
    pub problem_feeding: bool,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            paper_width: DEFAULT_PAPER_WIDTH,
            is_new_kind: false,
            problem_feeding: false,
        }
    }
}

/// How the transport should advance paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedStrategy {
    /// Issue the normal feed command
    Standard,
    /// The feed command misbehaves; use the transport's substitute sequence
    Workaround,
}

/// Which "start print" command the model understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartCommand {
    Standard,
    NewKind,
}

/// Encoding used for image rows sent to the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadEncoding {
    Uncompressed,
}

impl ModelSpec {
    /// Size of one packed 1-bit row in bytes. A partial trailing byte counts.
    pub fn bytes_per_line(&self) -> usize {
        self.paper_width.div_ceil(8) as usize
    }

    pub fn feed_strategy(&self) -> FeedStrategy {
        if self.problem_feeding {
            FeedStrategy::Workaround
        } else {
            FeedStrategy::Standard
        }
    }

    pub fn start_command(&self) -> StartCommand {
        if self.is_new_kind {
            StartCommand::NewKind
        } else {
            StartCommand::Standard
        }
    }

    /// Always uncompressed: `is_new_kind` only records that a model could
    /// accept compressed rows, no compressor exists yet.
    pub fn payload_encoding(&self) -> PayloadEncoding {
        PayloadEncoding::Uncompressed
    }
}
