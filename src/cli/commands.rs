use crate::app::{AppContext, CorpusError, Result};
use crate::config::Config;
use crate::domain::Article;
use crate::store::{seed, Store};
use crate::text;

pub fn list_articles(ctx: &AppContext, author: Option<&str>, json: bool) -> Result<()> {
    let articles = match author {
        Some(author) => ctx.store.get_articles_by_author(author)?,
        None => ctx.store.get_all_articles()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
        return Ok(());
    }

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    for article in &articles {
        println!("{}", summary_line(article));
    }

    Ok(())
}

pub fn show_article(ctx: &AppContext, id: i64, width: usize) -> Result<()> {
    let article = ctx
        .store
        .get_article(id)?
        .ok_or(CorpusError::ArticleNotFound(id))?;

    print!("{}", render_article(&article, width));
    Ok(())
}

pub fn seed_articles(ctx: &AppContext, count: usize, reset: bool) -> Result<()> {
    let inserted = seed::seed(&ctx.store, count, reset)?;
    println!(
        "Inserted {} sample articles ({} total)",
        inserted,
        ctx.store.count_articles()?
    );
    Ok(())
}

/// Seeds an empty store when the config asks for it, then runs the TUI.
pub fn launch_tui(ctx: &AppContext, config: &Config) -> Result<()> {
    seed_if_empty(ctx, config)?;
    crate::tui::run(ctx, config)
}

/// Returns the number of articles inserted.
pub fn seed_if_empty(ctx: &AppContext, config: &Config) -> Result<usize> {
    if !config.store.seed_on_empty || ctx.store.count_articles()? > 0 {
        return Ok(0);
    }
    seed::seed(&ctx.store, config.store.sample_count, false)
}

fn summary_line(article: &Article) -> String {
    format!(
        "{:>4}  {}  {:<12} {}",
        article.id,
        article.created_at.format("%Y-%m-%d %H:%M"),
        article.author_id,
        article.display_title()
    )
}

fn render_article(article: &Article, width: usize) -> String {
    let mut out = format!(
        "{}\nby {} on {}\n\n",
        article.display_title(),
        article.author_id,
        article.created_at.format("%Y-%m-%d %H:%M")
    );
    for line in text::wrap(&article.content, width) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
