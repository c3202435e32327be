use crate::types::ItemName;

/// Errors raised by a mining run or by the flat-file collaborators.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// Minimum support outside `(0, 1]`
    #[error("minimum support must lie in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    /// Minimum confidence outside `[0, 1]`
    #[error("minimum confidence must lie in [0, 1], got {0}")]
    InvalidMinConfidence(f64),

    /// Support was requested for an item the vertical index never saw
    #[error("item {0:?} is not present in the vertical index")]
    ItemNotIndexed(ItemName),

    #[error("unknown mining strategy {0:?}, expected \"apriori\" or \"eclat\"")]
    UnknownStrategy(String),

    #[error("malformed record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;
