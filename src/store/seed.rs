//! Deterministic sample articles for first runs and demos.

use chrono::{Duration, Utc};

use crate::app::Result;
use crate::domain::Article;
use crate::store::SqliteStore;

pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Builds `count` sample articles, `Sample Article 1` oldest. Creation times
/// are one minute apart so newest-first ordering is stable.
pub fn sample_articles(count: usize) -> Vec<Article> {
    let base = Utc::now() - Duration::minutes(count as i64);

    (1..=count)
        .map(|i| {
            let author = format!("author-{}", i);
            let title = format!("Sample Article {}", i);
            let mut article = Article::new(&author, &title, &sample_content(&title, &author, i));
            article.created_at = base + Duration::minutes(i as i64);
            article.updated_at = article.created_at;
            article
        })
        .collect()
}

fn sample_content(title: &str, author: &str, n: usize) -> String {
    format!(
        "# {title}\n\n\
         _By {author}_\n\n\
         This is an example article written to populate the database for testing purposes.\n\n\
         {title} explores the idea of creating useful placeholder content, and demonstrates \
         code blocks, lists, and links in Markdown.\n\n\
         ## Overview\n\n\
         - Purpose: demonstrate article rendering\n\
         - Format: Markdown with headings, code, and lists\n\n\
         ## Example Code\n\n\
         ```rust\n\
         fn main() {{\n    \
             println!(\"Hello from Sample Article {n}\");\n\
         }}\n\
         ```\n\n\
         ## Conclusion\n\n\
         This sample article is intentionally verbose so you can see long content \
         re-flowed and scrolled in the terminal. Enjoy!\n"
    )
}

/// Inserts the sample set, optionally emptying the table first.
pub fn seed(store: &SqliteStore, count: usize, reset: bool) -> Result<usize> {
    if reset {
        store.reset()?;
    }
    let mut articles = sample_articles(count);
    let inserted = store.add_articles(&mut articles)?;
    tracing::info!("Seeded {} sample articles", inserted);
    Ok(inserted)
}
