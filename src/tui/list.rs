use std::sync::Arc;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::app::Result;
use crate::config::{ColorConfig, KeybindingConfig};
use crate::domain::Article;
use crate::store::Store;
use crate::text;
use crate::tui::detail::DetailView;
use crate::tui::event::{Action, Effect, Event};
use crate::tui::screen::Screen;

pub const APP_NAME: &str = "Corpus";

/// Rows taken by header, spacers and footer around the detail view. A status
/// line takes one more.
pub const CHROME_HEIGHT: u16 = 5;

pub const DEFAULT_ROW_WIDTH: u16 = 80;
pub const DEFAULT_EXCERPT_WORDS: usize = 12;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";
const PAGE_SIZE: usize = 5;

/// Article list with a drill-down detail view.
pub struct ListScreen {
    username: String,
    articles: Vec<Article>,
    selected: usize,
    detail: Option<DetailView>,
    show_detail: bool,
    store: Option<Arc<dyn Store>>,
    author_filter: Option<String>,
    status: Option<String>,
    size: Option<(u16, u16)>,
    colors: ColorConfig,
    footer: String,
    row_width: u16,
    excerpt_words: usize,
}

impl ListScreen {
    pub fn new(username: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            username: username.into(),
            articles,
            selected: 0,
            detail: None,
            show_detail: false,
            store: None,
            author_filter: None,
            status: None,
            size: None,
            colors: ColorConfig::default(),
            footer: KeybindingConfig::default().footer_hints(),
            row_width: DEFAULT_ROW_WIDTH,
            excerpt_words: DEFAULT_EXCERPT_WORDS,
        }
    }

    /// Articles are (re)loaded from `store` on init and on refresh.
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_style(mut self, colors: ColorConfig, footer: String) -> Self {
        self.colors = colors;
        self.footer = footer;
        self
    }

    pub fn with_layout(mut self, row_width: u16, excerpt_words: usize) -> Self {
        self.row_width = row_width;
        self.excerpt_words = excerpt_words;
        self
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// The article shown in detail mode, if detail mode is active.
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref().filter(|_| self.show_detail)
    }

    pub fn is_showing_detail(&self) -> bool {
        self.show_detail
    }

    pub fn author_filter(&self) -> Option<&str> {
        self.author_filter.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.articles.len() {
            self.selected += 1;
        }
    }

    fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_SIZE);
    }

    fn page_down(&mut self) {
        let last = self.articles.len().saturating_sub(1);
        self.selected = (self.selected + PAGE_SIZE).min(last);
    }

    fn open_detail(&mut self) {
        let Some(article) = self.articles.get(self.selected) else {
            return;
        };

        let resize = self
            .size
            .map(|(width, height)| self.detail_resize(width, height));
        let detail = self
            .detail
            .get_or_insert_with(|| DetailView::new(article.clone()));
        detail.show(article);
        if let Some(resize) = resize {
            detail.handle_event(&resize);
        }
        self.show_detail = true;
    }

    /// Replaces the collection, keeping the cursor on the same article when
    /// it is still present.
    pub fn set_articles(&mut self, articles: Vec<Article>) {
        let previous = self
            .selected_article()
            .filter(|a| a.is_persisted())
            .map(|a| a.id);
        self.articles = articles;
        self.selected = previous
            .and_then(|id| self.articles.iter().position(|a| a.id == id))
            .unwrap_or(self.selected)
            .min(self.articles.len().saturating_sub(1));
    }

    fn fetch(&self, filter: Option<&str>) -> Option<Result<Vec<Article>>> {
        let store = self.store.as_ref()?;
        Some(match filter {
            Some(author) => store.get_articles_by_author(author),
            None => store.get_all_articles(),
        })
    }

    /// Loads with `filter`. On failure the previous articles and filter stay
    /// in place and the error is shown in the status line.
    fn load(&mut self, filter: Option<String>) {
        match self.fetch(filter.as_deref()) {
            None => {}
            Some(Ok(articles)) => {
                tracing::info!("Loaded {} articles", articles.len());
                self.author_filter = filter;
                self.set_articles(articles);
                self.status = None;
            }
            Some(Err(e)) if e.is_store_error() => {
                tracing::warn!("Failed to load articles: {}", e);
                self.status = Some(format!("Could not load articles: {}", e));
            }
            Some(Err(e)) => {
                tracing::error!("Unexpected error loading articles: {}", e);
                self.status = Some(format!("Error: {}", e));
            }
        }
    }

    fn toggle_author_filter(&mut self) {
        let next = match self.author_filter {
            Some(_) => None,
            None => match self.selected_article() {
                Some(article) => Some(article.author_id.clone()),
                None => return,
            },
        };
        self.load(next);
    }

    fn handle_detail_event(&mut self, event: &Event) {
        let Some(detail) = self.detail.as_mut() else {
            self.show_detail = false;
            return;
        };
        match event {
            Event::Action(Action::Back) => self.show_detail = false,
            _ => {
                detail.handle_event(event);
            }
        }
    }

    /// Viewport size for the detail view inside a terminal of the given size.
    fn detail_resize(&self, width: u16, height: u16) -> Event {
        let chrome = CHROME_HEIGHT + u16::from(self.status.is_some());
        Event::Resize {
            width,
            height: height.saturating_sub(chrome),
        }
    }

    fn header_line(&self) -> Line<'static> {
        let mut header = format!(
            " {}  user: {}  •  {} articles",
            APP_NAME,
            self.username,
            self.articles.len()
        );
        if let Some(author) = &self.author_filter {
            header.push_str(&format!("  •  author: {}", author));
        }
        header.push(' ');

        Line::from(Span::styled(
            header,
            Style::default()
                .fg(self.colors.header_fg)
                .bg(self.colors.header_bg)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn row_lines(&self, index: usize, article: &Article, total_width: usize) -> [Line<'static>; 2] {
        let is_selected = index == self.selected;
        let marker = if is_selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        };
        let style = if is_selected {
            Style::default()
                .fg(self.colors.selected_item)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.unselected_item)
        };

        let (title, padding) = layout_row(marker, article.display_title(), &article.author_id, total_width);
        let excerpt = text::excerpt(&article.content, self.excerpt_words);

        [
            Line::from(vec![
                Span::styled(format!("{}{}", marker, title), style),
                Span::raw(" ".repeat(padding)),
                Span::styled(article.author_id.clone(), style.fg(self.colors.author)),
            ]),
            Line::from(Span::styled(format!("  {}", excerpt), style)),
        ]
    }

    fn footer_line(&self) -> Line<'static> {
        let hints = match self.detail() {
            Some(detail) => format!("{}%  •  {}", detail.viewport().scroll_percent(), self.footer),
            None => self.footer.clone(),
        };
        Line::from(Span::styled(
            format!(" {}", hints),
            Style::default().fg(self.colors.footer),
        ))
    }
}

impl Screen for ListScreen {
    fn init(&mut self) -> Effect {
        self.load(self.author_filter.clone());
        Effect::None
    }

    fn handle_event(&mut self, event: &Event) -> Effect {
        if let Event::Action(Action::Quit) = event {
            return Effect::Quit;
        }
        // A built detail view follows every resize, shown or not.
        if let Event::Resize { width, height } = *event {
            self.size = Some((width, height));
            let resize = self.detail_resize(width, height);
            if let Some(detail) = self.detail.as_mut() {
                detail.handle_event(&resize);
            }
            return Effect::None;
        }

        if self.show_detail {
            self.handle_detail_event(event);
            return Effect::None;
        }

        if let Event::Action(action) = event {
            match action {
                Action::MoveUp | Action::ScrollUp => self.move_up(),
                Action::MoveDown | Action::ScrollDown => self.move_down(),
                Action::PageUp => self.page_up(),
                Action::PageDown => self.page_down(),
                Action::Top => self.selected = 0,
                Action::Bottom => self.selected = self.articles.len().saturating_sub(1),
                Action::Select => self.open_detail(),
                Action::Refresh => self.load(self.author_filter.clone()),
                Action::FilterAuthor => self.toggle_author_filter(),
                Action::Back if self.author_filter.is_some() => self.load(None),
                _ => {}
            }
        }
        Effect::None
    }

    fn render(&self, width: u16) -> Text<'static> {
        let mut lines = vec![self.header_line(), Line::from("")];

        match self.detail() {
            Some(detail) => {
                lines.extend(detail.render().lines);
                lines.push(Line::from(""));
            }
            None => {
                lines.push(Line::from("List of Articles"));
                lines.push(Line::from(""));
                if self.articles.is_empty() {
                    lines.push(Line::from("  No articles yet."));
                }
                let total_width = width.min(self.row_width) as usize;
                for (i, article) in self.articles.iter().enumerate() {
                    lines.extend(self.row_lines(i, article, total_width));
                }
            }
        }

        if let Some(status) = &self.status {
            lines.push(Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(self.colors.error),
            )));
        }
        lines.push(self.footer_line());

        Text::from(lines)
    }
}


/// Fits `title` between `marker` and a right-aligned `author` on a line of
/// `total_width` columns. Returns the (possibly truncated) title and the
/// number of padding spaces to put before the author.
pub fn layout_row(marker: &str, title: &str, author: &str, total_width: usize) -> (String, usize) {
    let budget = total_width as isize
        - text::display_width(marker) as isize
        - text::display_width(author) as isize
        - 1;
    let budget = budget.max(1) as usize;

    let title = text::truncate(title, budget);
    let padding = (budget - text::display_width(&title) + 1).max(1);
    (title, padding)
}
