use thiserror::Error;

/// Errors produced by the scale and binning core.
///
/// All variants are fail-fast: the core is pure computation, so nothing is
/// retried and no partial result is returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// No records to derive a domain from.
    #[error("dataset contains no usable records")]
    EmptyDataset,

    /// An accessor yielded a NaN or infinite value.
    #[error("non-finite value {value} at record {index}")]
    InvalidValue { index: usize, value: f64 },

    /// The pixel range has zero width (or a non-finite bound), so no
    /// meaningful mapping exists.
    #[error("pixel range ({0}, {1}) is degenerate; a finite non-zero span is required")]
    DegenerateRange(f64, f64),

    /// Bucket count must be at least 1.
    #[error("bucket count must be positive (got {0})")]
    InvalidBucketCount(usize),
}
