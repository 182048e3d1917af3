use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Fatal catalog-load failures.
///
/// The process must not start serving without a usable index, so both
/// variants abort startup. Malformed individual entries are *not* errors;
/// they are skipped during indexing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}
