use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rusqlite_migration::{Migrations, M};

use crate::app::{CorpusError, Result};
use crate::domain::Article;
use crate::store::Store;

/// Upper bound on how long a single store call may wait on the database.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_COLUMNS: &str = "SELECT id, author_id, title, content, created_at, updated_at FROM articles";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn with_timeout<P: AsRef<Path>>(path: P, timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn, timeout)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, DEFAULT_TIMEOUT)
    }

    fn from_connection(conn: Connection, timeout: Duration) -> Result<Self> {
        conn.busy_timeout(timeout)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.conn()?;
        migrations.to_latest(&mut conn)?;

        Ok(())
    }

    /// Empties the articles table and restarts id assignment.
    pub fn reset(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(
            "DELETE FROM articles;
             DELETE FROM sqlite_sequence WHERE name = 'articles';",
        )?;
        tracing::info!("Article table reset");
        Ok(())
    }

    /// Inserts `articles` in one transaction, assigning ids in place.
    pub fn add_articles(&self, articles: &mut [Article]) -> Result<usize> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO articles (author_id, title, content, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for article in articles.iter_mut() {
                stmt.execute(params![
                    article.author_id,
                    article.title,
                    article.content,
                    format_datetime(&article.created_at),
                    format_datetime(&article.updated_at),
                ])?;
                article.id = tx.last_insert_rowid();
            }
        }
        tx.commit()?;
        Ok(articles.len())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| CorpusError::Other(format!("Store connection poisoned: {}", e)))
    }

    fn row_to_article(row: &Row<'_>) -> rusqlite::Result<Article> {
        Ok(Article {
            id: row.get(0)?,
            author_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            created_at: row
                .get::<_, String>(4)
                .ok()
                .and_then(|s| parse_datetime(&s))
                .unwrap_or_else(Utc::now),
            updated_at: row
                .get::<_, String>(5)
                .ok()
                .and_then(|s| parse_datetime(&s))
                .unwrap_or_else(Utc::now),
        })
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    // Fixed precision keeps lexical order equal to chronological order.
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| s.parse::<DateTime<Utc>>().ok())
}

impl Store for SqliteStore {
    fn get_all_articles(&self) -> Result<Vec<Article>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))?;

        let articles = stmt
            .query_map([], Self::row_to_article)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} articles", articles.len());
        Ok(articles)
    }

    fn get_articles_by_author(&self, author_id: &str) -> Result<Vec<Article>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE author_id = ?1 ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))?;

        let articles = stmt
            .query_map(params![author_id], Self::row_to_article)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} articles by {}", articles.len(), author_id);
        Ok(articles)
    }

    fn get_article(&self, id: i64) -> Result<Option<Article>> {
        let conn = self.conn()?;
        let article = conn
            .query_row(
                &format!("{} WHERE id = ?1 LIMIT 1", SELECT_COLUMNS),
                params![id],
                Self::row_to_article,
            )
            .optional()?;

        Ok(article)
    }

    fn add_article(&self, article: &mut Article) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO articles (author_id, title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                article.author_id,
                article.title,
                article.content,
                format_datetime(&article.created_at),
                format_datetime(&article.updated_at),
            ],
        )?;

        article.id = conn.last_insert_rowid();
        Ok(article.id)
    }

    fn delete_article(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM articles WHERE id = ?1", params![id])?;
        if removed == 0 {
            tracing::debug!("Delete of article {} matched nothing", id);
        }
        Ok(())
    }

    fn count_articles(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
        Ok(count)
    }
}
