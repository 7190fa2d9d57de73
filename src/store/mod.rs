pub mod seed;
pub mod sqlite;

use crate::app::Result;
use crate::domain::Article;

pub use seed::{sample_articles, DEFAULT_SAMPLE_COUNT};
pub use sqlite::SqliteStore;

/// Read side of the article repository plus the insert/delete plumbing used
/// by seeding. Result sets are ordered newest first.
pub trait Store {
    fn get_all_articles(&self) -> Result<Vec<Article>>;
    fn get_articles_by_author(&self, author_id: &str) -> Result<Vec<Article>>;
    fn get_article(&self, id: i64) -> Result<Option<Article>>;

    /// Persists `article` and writes the assigned id back into it.
    fn add_article(&self, article: &mut Article) -> Result<i64>;

    /// Removing an id that does not exist is not an error.
    fn delete_article(&self, id: i64) -> Result<()>;

    fn count_articles(&self) -> Result<i64>;
}
