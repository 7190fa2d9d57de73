use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Configuration error: {0}")]
    Configuration(&'static str),

    #[error("Screen not registered: {0}")]
    MissingScreen(String),

    #[error("Store call timed out: {0}")]
    StoreTimeout(String),

    #[error("Store query error: {0}")]
    StoreQuery(rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] rusqlite_migration::Error),

    #[error("Article not found: {0}")]
    ArticleNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data directory error: {0}")]
    DataDir(String),

    #[error("{0}")]
    Other(String),
}

impl CorpusError {
    /// True for failures of the document store, which screens render as a
    /// degraded frame instead of aborting.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            CorpusError::StoreTimeout(_) | CorpusError::StoreQuery(_)
        )
    }
}

// SQLite reports an exhausted busy timeout as BUSY/LOCKED.
impl From<rusqlite::Error> for CorpusError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => {
                CorpusError::StoreTimeout(err.to_string())
            }
            _ => CorpusError::StoreQuery(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, CorpusError>;
