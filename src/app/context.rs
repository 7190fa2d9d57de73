use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::app::error::{CorpusError, Result};
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    pub store: Arc<SqliteStore>,
}

impl AppContext {
    pub fn with_timeout(db_path: Option<PathBuf>, timeout: Duration) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        tracing::debug!("Opening store at {}", db_path.display());
        let store = Arc::new(SqliteStore::with_timeout(&db_path, timeout)?);

        Ok(Self { store })
    }

    pub fn in_memory() -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);

        Ok(Self { store })
    }

    /// Directory holding the database and the TUI log file.
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| CorpusError::DataDir("Could not find data directory".into()))?;
        let corpus_dir = data_dir.join("corpus");
        std::fs::create_dir_all(&corpus_dir)?;
        Ok(corpus_dir)
    }

    fn default_db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("corpus.db"))
    }
}
