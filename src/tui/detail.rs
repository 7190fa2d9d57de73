use ratatui::text::{Line, Text};

use crate::domain::Article;
use crate::text;
use crate::tui::event::{Action, Effect, Event};
use crate::tui::viewport::Viewport;

/// Size used until the first resize arrives.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 20;

/// Full-content view of a single article.
#[derive(Debug, Clone)]
pub struct DetailView {
    article: Article,
    viewport: Viewport,
    ready: bool,
}

impl DetailView {
    pub fn new(article: Article) -> Self {
        let mut view = Self {
            article,
            viewport: Viewport::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            ready: false,
        };
        view.reflow();
        view
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// False until a resize has told the view its real size.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Starts a new session on `article`, scrolled to the top.
    pub fn show(&mut self, article: &Article) {
        if self.article != *article {
            self.article = article.clone();
        }
        self.viewport.to_top();
        self.reflow();
    }

    pub fn handle_event(&mut self, event: &Event) -> Effect {
        match event {
            Event::Resize { width, height } => {
                self.viewport.set_size(*width, *height);
                self.ready = true;
                self.reflow();
            }
            Event::Action(action) => match action {
                Action::Select | Action::Refresh => self.reflow(),
                Action::MoveUp | Action::ScrollUp => self.viewport.scroll_by(-1),
                Action::MoveDown | Action::ScrollDown => self.viewport.scroll_by(1),
                Action::PageUp => self.viewport.page_up(),
                Action::PageDown => self.viewport.page_down(),
                Action::Top => self.viewport.to_top(),
                Action::Bottom => self.viewport.to_bottom(),
                _ => {}
            },
        }
        Effect::None
    }

    /// Visible slice of the wrapped content.
    pub fn render(&self) -> Text<'static> {
        Text::from(
            self.viewport
                .visible()
                .iter()
                .map(|line| Line::from(line.clone()))
                .collect::<Vec<_>>(),
        )
    }

    fn reflow(&mut self) {
        let lines = text::wrap(&self.article.content, self.viewport.width() as usize);
        self.viewport.set_content(lines);
    }
}
