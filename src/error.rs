use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("variation id `{id}` is declared more than once")]
    DuplicateVariationId { id: i64 },

    #[error("snapshot export is unavailable: no capturable surface attached")]
    ExportUnavailable,

    #[error("failed to write snapshot to {}: {source}", path.display())]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
