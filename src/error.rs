use thiserror::Error;

/// Errors returned by the fallible parts of the library.
///
/// Rendering itself never fails; missing optional configuration simply
/// suppresses the matching region.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse theme: {0}")]
    Theme(#[source] serde_json::Error),

    #[error("failed to parse checkbox group config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("theme variant {index} does not exist (theme has {count} variants)")]
    VariantOutOfRange { index: usize, count: usize },
}
